// One attribution run, start to finish.
//
// Strategies run sequentially over the full suspect set and are ranked
// independently. A strategy that fails (the TF-IDF path with an empty
// vocabulary) is recorded on its own report as inconclusive; the other
// strategies still report normally.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::corpus::Document;
use crate::function_words::fingerprint::FunctionWordFingerprint;
use crate::function_words::strategy::FunctionWordStrategy;
use crate::lexicon::Lexicon;
use crate::scoring::ranking::{rank, RankedOutcome};
use crate::scoring::traits::{ScoreDirection, SimilarityResult, SimilarityStrategy};
use crate::text::richness::type_token_ratio;
use crate::text::tokenize::normalize;
use crate::vectorize::strategy::TfIdfStrategy;

/// Which strategies to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    #[default]
    All,
    FunctionWords,
    TfIdf,
}

impl StrategyKind {
    fn includes_function_words(self) -> bool {
        matches!(self, Self::All | Self::FunctionWords)
    }

    fn includes_tfidf(self) -> bool {
        matches!(self, Self::All | Self::TfIdf)
    }
}

/// How many function words a profile lists as most used.
const PROFILE_TOP_WORDS: usize = 5;

/// Standalone statistics for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentProfile {
    pub label: String,
    pub word_count: usize,
    pub lexical_richness: f64,
    pub fingerprint: FunctionWordFingerprint,
    /// Most used function words, highest rate first
    pub top_words: Vec<String>,
}

/// Scores and outcome for a single strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyReport {
    pub strategy: String,
    pub direction: ScoreDirection,
    /// Per-suspect results in input order
    pub results: Vec<SimilarityResult>,
    pub outcome: RankedOutcome,
    /// Why the strategy produced no results, if it failed
    pub error: Option<String>,
}

/// Everything one run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributionReport {
    pub generated_at: DateTime<Utc>,
    pub questioned: DocumentProfile,
    pub suspect_count: usize,
    pub strategies: Vec<StrategyReport>,
}

impl AttributionReport {
    /// Report for a strategy by name.
    pub fn strategy(&self, name: &str) -> Option<&StrategyReport> {
        self.strategies.iter().find(|s| s.strategy == name)
    }
}

/// Holds the strategies built from one shared lexicon.
pub struct Attributor {
    lexicon: Arc<Lexicon>,
    function_words: FunctionWordStrategy,
    tfidf: TfIdfStrategy,
}

impl Attributor {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            function_words: FunctionWordStrategy::new(Arc::clone(&lexicon)),
            tfidf: TfIdfStrategy::new(Arc::clone(&lexicon)),
            lexicon,
        }
    }

    /// Use the union-of-keys distance instead of the questioned-keys distance.
    pub fn with_symmetric_distance(mut self, symmetric: bool) -> Self {
        self.function_words.symmetric = symmetric;
        self
    }

    /// Word count, lexical richness, fingerprint, and most used function
    /// words of one document.
    pub fn profile(&self, document: &Document) -> DocumentProfile {
        let tokens = normalize(&document.text);
        let fingerprint = FunctionWordFingerprint::extract(&tokens, self.lexicon.function_words());
        let top_words = fingerprint
            .top(PROFILE_TOP_WORDS)
            .iter()
            .map(|rate| rate.word.clone())
            .collect();

        DocumentProfile {
            label: document.label.clone(),
            word_count: tokens.len(),
            lexical_richness: type_token_ratio(&tokens),
            fingerprint,
            top_words,
        }
    }

    /// Score and rank every suspect under the selected strategies.
    pub fn run(
        &self,
        questioned: &Document,
        suspects: &[Document],
        kind: StrategyKind,
    ) -> AttributionReport {
        let questioned_profile = self.profile(questioned);
        info!(
            label = %questioned.label,
            word_count = questioned_profile.word_count,
            suspects = suspects.len(),
            "Starting attribution"
        );

        let mut selected: Vec<&dyn SimilarityStrategy> = Vec::new();
        if kind.includes_function_words() {
            selected.push(&self.function_words);
        }
        if kind.includes_tfidf() {
            selected.push(&self.tfidf);
        }

        let strategies = selected
            .into_iter()
            .map(|strategy| run_strategy(strategy, questioned, suspects))
            .collect();

        AttributionReport {
            generated_at: Utc::now(),
            questioned: questioned_profile,
            suspect_count: suspects.len(),
            strategies,
        }
    }
}

fn run_strategy(
    strategy: &dyn SimilarityStrategy,
    questioned: &Document,
    suspects: &[Document],
) -> StrategyReport {
    let direction = strategy.direction();

    match strategy.score_suspects(questioned, suspects) {
        Ok(results) => {
            let outcome = rank(&results, direction);
            info!(
                strategy = strategy.name(),
                best = outcome.label().unwrap_or("inconclusive"),
                "Ranked suspects"
            );
            StrategyReport {
                strategy: strategy.name().to_string(),
                direction,
                results,
                outcome,
                error: None,
            }
        }
        Err(e) => {
            warn!(strategy = strategy.name(), error = %e, "Strategy failed");
            StrategyReport {
                strategy: strategy.name().to_string(),
                direction,
                results: Vec::new(),
                outcome: RankedOutcome::Inconclusive,
                error: Some(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_selection() {
        let attributor = Attributor::new(Arc::new(Lexicon::english()));
        let q = Document::new("q", "the ink and the quill");
        let s = vec![Document::new("s", "the ink and the quill")];

        assert_eq!(attributor.run(&q, &s, StrategyKind::All).strategies.len(), 2);

        let fw = attributor.run(&q, &s, StrategyKind::FunctionWords);
        assert_eq!(fw.strategies.len(), 1);
        assert!(fw.strategy("function-words").is_some());

        let tf = attributor.run(&q, &s, StrategyKind::TfIdf);
        assert_eq!(tf.strategies.len(), 1);
        assert!(tf.strategy("tfidf").is_some());
    }

    #[test]
    fn test_profile() {
        let attributor = Attributor::new(Arc::new(Lexicon::english()));
        let profile = attributor.profile(&Document::new("d", "The cat sat on the mat."));
        assert_eq!(profile.word_count, 6);
        assert!((profile.lexical_richness - 5.0 / 6.0).abs() < 1e-12);
        assert!((profile.fingerprint.get("the") - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(profile.top_words, vec!["the", "on"]);
    }

    #[test]
    fn test_profile_top_words_capped() {
        let attributor = Attributor::new(Arc::new(Lexicon::english()));
        let text = "the the the of of and and a a to in is";
        let profile = attributor.profile(&Document::new("d", text));
        assert_eq!(profile.top_words, vec!["the", "and", "of", "a", "to"]);

        let empty = attributor.profile(&Document::new("e", "42"));
        assert!(empty.top_words.is_empty());
    }
}
