// TF-IDF strategy: n-gram term weighting over the joint corpus, compared by
// cosine similarity.

pub mod cosine;
pub mod strategy;
pub mod tfidf;

pub use tfidf::{TermWeightVector, TfIdfMatrix, TfIdfVectorizer, Vocabulary};
