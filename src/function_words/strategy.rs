// Function-word attribution: fingerprint every document, then measure each
// suspect's L1 distance from the questioned document.

use std::sync::Arc;

use tracing::debug;

use super::distance::{manhattan_distance, symmetric_distance};
use super::fingerprint::FunctionWordFingerprint;
use crate::corpus::Document;
use crate::error::AttributionError;
use crate::lexicon::Lexicon;
use crate::scoring::traits::{ResultDetail, ScoreDirection, SimilarityResult, SimilarityStrategy};
use crate::text::tokenize::normalize;

/// Ranks suspects by function-word distance. Never fails: empty documents
/// produce empty fingerprints.
pub struct FunctionWordStrategy {
    lexicon: Arc<Lexicon>,
    /// Compare over the union of both fingerprints' words instead of only the
    /// questioned document's (off by default)
    pub symmetric: bool,
}

impl FunctionWordStrategy {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            symmetric: false,
        }
    }

    /// Fingerprint one document, returning it with the document's word count.
    pub fn fingerprint(&self, document: &Document) -> (FunctionWordFingerprint, usize) {
        let tokens = normalize(&document.text);
        let fingerprint = FunctionWordFingerprint::extract(&tokens, self.lexicon.function_words());
        (fingerprint, tokens.len())
    }
}

impl SimilarityStrategy for FunctionWordStrategy {
    fn name(&self) -> &'static str {
        "function-words"
    }

    fn direction(&self) -> ScoreDirection {
        ScoreDirection::LowerIsBetter
    }

    fn score_suspects(
        &self,
        questioned: &Document,
        suspects: &[Document],
    ) -> Result<Vec<SimilarityResult>, AttributionError> {
        let (reference, _) = self.fingerprint(questioned);

        let results = suspects
            .iter()
            .map(|suspect| {
                let (fingerprint, word_count) = self.fingerprint(suspect);
                let score = if self.symmetric {
                    symmetric_distance(&reference, &fingerprint)
                } else {
                    manhattan_distance(&reference, &fingerprint)
                };
                debug!(suspect = %suspect.label, word_count, score, "Function-word distance");

                SimilarityResult {
                    label: suspect.label.clone(),
                    score,
                    detail: ResultDetail::FunctionWords {
                        word_count,
                        fingerprint,
                    },
                }
            })
            .collect();

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_in_input_order() {
        let strategy = FunctionWordStrategy::new(Arc::new(Lexicon::english()));
        let questioned = Document::new("q", "the cat and the hat");
        let suspects = vec![
            Document::new("s1", "the dog and the log"),
            Document::new("s2", ""),
        ];

        let results = strategy.score_suspects(&questioned, &suspects).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].label, "s1");
        assert_eq!(results[0].score, 0.0);
        assert!(results[1].score > 0.0);
        assert_eq!(results[1].detail.word_count(), 0);
    }
}
