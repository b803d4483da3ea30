// TF-IDF vectorizer over unigrams and bigrams.
//
// The questioned document and every suspect form one joint corpus (questioned
// first). Stop-words are dropped before n-grams are built, so a bigram is two
// adjacent surviving tokens. The vocabulary is every term seen anywhere in the
// corpus, indexed in sorted order; it lives only as long as this run.
//
// Weighting follows the usual smooth-IDF scheme:
//
//   idf(t)    = ln((1 + n) / (1 + df(t))) + 1
//   weight(t) = count(t, doc) * idf(t)
//
// where n is the number of documents and df(t) the number containing t.
// Terms found in every document keep an IDF of 1, so they still count but
// never outweigh distinctive terms. Rows are L2-normalized by default.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use tracing::debug;

use crate::error::AttributionError;
use crate::lexicon::Lexicon;
use crate::text::tokenize::normalize;

/// Term index for one run.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    fn from_terms(terms: BTreeSet<String>) -> Self {
        let terms: Vec<String> = terms.into_iter().collect();
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();
        Self { terms, index }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }
}

/// Sparse weights over a run's vocabulary, keyed by term index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermWeightVector {
    weights: BTreeMap<usize, f64>,
}

impl TermWeightVector {
    /// Build a vector from (term index, weight) pairs; zero weights are dropped.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (usize, f64)>) -> Self {
        Self {
            weights: pairs.into_iter().filter(|(_, w)| *w != 0.0).collect(),
        }
    }

    pub fn get(&self, index: usize) -> f64 {
        self.weights.get(&index).copied().unwrap_or(0.0)
    }

    /// Number of non-zero dimensions.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.weights.iter().map(|(&i, &w)| (i, w))
    }

    pub fn dot(&self, other: &Self) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().map(|(i, w)| w * large.get(i)).sum()
    }

    pub fn magnitude(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    fn normalize_l2(&mut self) {
        let magnitude = self.magnitude();
        if magnitude > 0.0 {
            for weight in self.weights.values_mut() {
                *weight /= magnitude;
            }
        }
    }
}

/// Vectorizer settings. The stop-word list comes from the shared lexicon.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    lexicon: Arc<Lexicon>,
    /// Shortest n-gram in tokens (default 1)
    pub min_n: usize,
    /// Longest n-gram in tokens (default 2)
    pub max_n: usize,
    /// Add one to document frequencies as if an extra document held every term
    pub smooth_idf: bool,
    /// Scale each vector to unit length
    pub normalize: bool,
}

impl TfIdfVectorizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            min_n: 1,
            max_n: 2,
            smooth_idf: true,
            normalize: true,
        }
    }

    /// Normalize raw texts and vectorize them as one corpus.
    pub fn fit_transform(&self, texts: &[&str]) -> Result<TfIdfMatrix, AttributionError> {
        let tokenized: Vec<Vec<String>> = texts.iter().map(|text| normalize(text)).collect();
        self.fit_transform_tokens(&tokenized)
    }

    /// Vectorize already-normalized documents as one corpus.
    pub fn fit_transform_tokens(
        &self,
        documents: &[Vec<String>],
    ) -> Result<TfIdfMatrix, AttributionError> {
        let counts: Vec<HashMap<String, usize>> =
            documents.iter().map(|tokens| self.term_counts(tokens)).collect();

        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        for doc in &counts {
            for term in doc.keys() {
                *document_frequency.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(AttributionError::EmptyVocabulary {
                documents: documents.len(),
            });
        }

        let vocabulary = Vocabulary::from_terms(
            document_frequency.keys().map(|t| t.to_string()).collect(),
        );

        let n = documents.len() as f64;
        let mut idf = vec![0.0; vocabulary.len()];
        for (term, df) in &document_frequency {
            if let Some(i) = vocabulary.index_of(term) {
                idf[i] = self.idf(n, *df as f64);
            }
        }

        let vectors = counts
            .iter()
            .map(|doc| {
                let weights = doc.iter().filter_map(|(term, &count)| {
                    vocabulary
                        .index_of(term)
                        .map(|i| (i, count as f64 * idf[i]))
                });
                let mut vector = TermWeightVector::from_pairs(weights);
                if self.normalize {
                    vector.normalize_l2();
                }
                vector
            })
            .collect();

        debug!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "Built TF-IDF matrix"
        );

        Ok(TfIdfMatrix {
            vocabulary,
            idf,
            vectors,
        })
    }

    fn idf(&self, n: f64, df: f64) -> f64 {
        if self.smooth_idf {
            ((1.0 + n) / (1.0 + df)).ln() + 1.0
        } else {
            (n / df).ln() + 1.0
        }
    }

    /// Count every n-gram in range after stop-word removal.
    fn term_counts(&self, tokens: &[String]) -> HashMap<String, usize> {
        let kept: Vec<&str> = tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !self.lexicon.is_stop_word(t))
            .collect();

        let mut counts = HashMap::new();
        for n in self.min_n.max(1)..=self.max_n {
            for window in kept.windows(n) {
                *counts.entry(window.join(" ")).or_insert(0) += 1;
            }
        }
        counts
    }
}

/// The vectors of one run plus the vocabulary they index into.
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    pub vocabulary: Vocabulary,
    /// IDF per vocabulary index
    pub idf: Vec<f64>,
    /// One vector per input document, in input order
    pub vectors: Vec<TermWeightVector>,
}

impl TfIdfMatrix {
    /// Terms carrying weight in both vectors, strongest joint weight first.
    pub fn shared_terms(
        &self,
        a: &TermWeightVector,
        b: &TermWeightVector,
        limit: usize,
    ) -> Vec<String> {
        let mut shared: Vec<(usize, f64)> = a
            .iter()
            .filter_map(|(i, w)| {
                let other = b.get(i);
                (other > 0.0).then_some((i, w * other))
            })
            .collect();
        shared.sort_by(|x, y| {
            y.1.partial_cmp(&x.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(x.0.cmp(&y.0))
        });

        shared
            .into_iter()
            .take(limit)
            .filter_map(|(i, _)| self.vocabulary.term(i).map(str::to_string))
            .collect()
    }
}
