// TF-IDF attribution: vectorize the joint corpus, then measure each suspect's
// cosine similarity to the questioned document.

use std::sync::Arc;

use tracing::debug;

use super::cosine::cosine_similarity;
use super::tfidf::TfIdfVectorizer;
use crate::corpus::Document;
use crate::error::AttributionError;
use crate::lexicon::Lexicon;
use crate::scoring::traits::{ResultDetail, ScoreDirection, SimilarityResult, SimilarityStrategy};
use crate::text::richness::type_token_ratio;
use crate::text::tokenize::normalize;

/// How many shared terms to keep per suspect for reporting.
const SHARED_TERMS_LIMIT: usize = 5;

/// Ranks suspects by TF-IDF cosine similarity.
pub struct TfIdfStrategy {
    pub vectorizer: TfIdfVectorizer,
}

impl TfIdfStrategy {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            vectorizer: TfIdfVectorizer::new(lexicon),
        }
    }
}

impl SimilarityStrategy for TfIdfStrategy {
    fn name(&self) -> &'static str {
        "tfidf"
    }

    fn direction(&self) -> ScoreDirection {
        ScoreDirection::HigherIsBetter
    }

    fn score_suspects(
        &self,
        questioned: &Document,
        suspects: &[Document],
    ) -> Result<Vec<SimilarityResult>, AttributionError> {
        // Questioned document sits at index 0 of the joint corpus
        let corpus: Vec<Vec<String>> = std::iter::once(questioned)
            .chain(suspects)
            .map(|doc| normalize(&doc.text))
            .collect();

        let matrix = self.vectorizer.fit_transform_tokens(&corpus)?;
        let reference = &matrix.vectors[0];

        let results = suspects
            .iter()
            .zip(corpus.iter().skip(1))
            .zip(matrix.vectors.iter().skip(1))
            .map(|((suspect, tokens), vector)| {
                let score = cosine_similarity(reference, vector);
                let lexical_richness = type_token_ratio(tokens);
                debug!(suspect = %suspect.label, score, lexical_richness, "TF-IDF similarity");

                SimilarityResult {
                    label: suspect.label.clone(),
                    score,
                    detail: ResultDetail::TermWeights {
                        word_count: tokens.len(),
                        lexical_richness,
                        shared_terms: matrix.shared_terms(reference, vector, SHARED_TERMS_LIMIT),
                    },
                }
            })
            .collect();

        Ok(results)
    }
}
