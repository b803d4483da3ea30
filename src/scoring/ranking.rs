// Ranking policy: pick the best suspect for a strategy's score direction.
//
// Ties go to the first suspect in input order because only a strict
// improvement replaces the current best. For similarity strategies a best
// score of exactly 0 means nobody shares any weighted term with the
// questioned document, which is reported as inconclusive.

use serde::{Deserialize, Serialize};

use super::traits::{ScoreDirection, SimilarityResult};

/// The winner of one strategy, or nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RankedOutcome {
    Match { label: String, score: f64 },
    Inconclusive,
}

impl RankedOutcome {
    pub fn is_inconclusive(&self) -> bool {
        matches!(self, Self::Inconclusive)
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Match { label, .. } => Some(label),
            Self::Inconclusive => None,
        }
    }
}

/// Select the best result under `direction`.
///
/// NaN scores never win. An empty result list is inconclusive.
pub fn rank(results: &[SimilarityResult], direction: ScoreDirection) -> RankedOutcome {
    let mut best: Option<&SimilarityResult> = None;

    for result in results.iter().filter(|r| !r.score.is_nan()) {
        let replace = match best {
            None => true,
            Some(current) => direction.improves(result.score, current.score),
        };
        if replace {
            best = Some(result);
        }
    }

    match best {
        None => RankedOutcome::Inconclusive,
        Some(winner) if direction == ScoreDirection::HigherIsBetter && winner.score == 0.0 => {
            RankedOutcome::Inconclusive
        }
        Some(winner) => RankedOutcome::Match {
            label: winner.label.clone(),
            score: winner.score,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::traits::ResultDetail;

    fn result(label: &str, score: f64) -> SimilarityResult {
        SimilarityResult {
            label: label.to_string(),
            score,
            detail: ResultDetail::TermWeights {
                word_count: 1,
                lexical_richness: 1.0,
                shared_terms: Vec::new(),
            },
        }
    }

    #[test]
    fn test_min_for_distance() {
        let results = vec![result("a", 3.0), result("b", 1.5), result("c", 2.0)];
        assert_eq!(
            rank(&results, ScoreDirection::LowerIsBetter).label(),
            Some("b")
        );
    }

    #[test]
    fn test_max_for_similarity() {
        let results = vec![result("a", 0.2), result("b", 0.9), result("c", 0.4)];
        assert_eq!(
            rank(&results, ScoreDirection::HigherIsBetter).label(),
            Some("b")
        );
    }

    #[test]
    fn test_zero_distance_wins() {
        let results = vec![result("a", 0.0), result("b", 4.0)];
        assert_eq!(
            rank(&results, ScoreDirection::LowerIsBetter),
            RankedOutcome::Match {
                label: "a".to_string(),
                score: 0.0
            }
        );
    }

    #[test]
    fn test_nan_never_wins() {
        let results = vec![result("nan", f64::NAN), result("b", 0.5)];
        assert_eq!(
            rank(&results, ScoreDirection::HigherIsBetter).label(),
            Some("b")
        );
        assert_eq!(
            rank(&[result("nan", f64::NAN)], ScoreDirection::LowerIsBetter),
            RankedOutcome::Inconclusive
        );
    }
}
