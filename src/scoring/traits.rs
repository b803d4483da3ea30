// Similarity strategy trait.
//
// Each strategy scores every suspect against the questioned document and
// declares which way its scores point. The ranking policy only looks at that
// direction, so adding a strategy never means another copy of min/max logic.
//
// Strategies receive the whole suspect set at once because TF-IDF weighting
// needs the joint corpus before any single document can be scored.

use serde::{Deserialize, Serialize};

use crate::corpus::Document;
use crate::error::AttributionError;
use crate::function_words::FunctionWordFingerprint;

/// Which end of the score range marks the best match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreDirection {
    /// Distances: 0 is identical.
    LowerIsBetter,
    /// Similarities: 0 is no overlap, and a best score of 0 is inconclusive.
    HigherIsBetter,
}

impl ScoreDirection {
    /// True when `candidate` strictly beats `best`.
    pub fn improves(self, candidate: f64, best: f64) -> bool {
        match self {
            Self::LowerIsBetter => candidate < best,
            Self::HigherIsBetter => candidate > best,
        }
    }

    /// Short hint printed next to scores.
    pub fn hint(self) -> &'static str {
        match self {
            Self::LowerIsBetter => "lower is better",
            Self::HigherIsBetter => "higher is better",
        }
    }
}

/// Strategy-specific context kept alongside a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultDetail {
    FunctionWords {
        word_count: usize,
        fingerprint: FunctionWordFingerprint,
    },
    TermWeights {
        word_count: usize,
        /// Type-token ratio of the suspect, reported for context only
        lexical_richness: f64,
        /// Terms weighted in both this suspect and the questioned document
        shared_terms: Vec<String>,
    },
}

impl ResultDetail {
    pub fn word_count(&self) -> usize {
        match self {
            Self::FunctionWords { word_count, .. } | Self::TermWeights { word_count, .. } => {
                *word_count
            }
        }
    }
}

/// One suspect's score under one strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub label: String,
    pub score: f64,
    pub detail: ResultDetail,
}

/// Trait for attribution strategies.
pub trait SimilarityStrategy {
    /// Stable name used in reports and on the command line.
    fn name(&self) -> &'static str;

    fn direction(&self) -> ScoreDirection;

    /// Score each suspect against the questioned document, in input order.
    fn score_suspects(
        &self,
        questioned: &Document,
        suspects: &[Document],
    ) -> Result<Vec<SimilarityResult>, AttributionError>;
}
