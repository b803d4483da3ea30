// Unit tests for the ranking policy.
//
// Tests min/max selection per score direction, first-encountered tie
// breaking, and the inconclusive outcomes (no suspects, all-zero similarity).

use inkprint::scoring::ranking::{rank, RankedOutcome};
use inkprint::scoring::traits::{ResultDetail, ScoreDirection, SimilarityResult};

fn result(label: &str, score: f64) -> SimilarityResult {
    SimilarityResult {
        label: label.to_string(),
        score,
        detail: ResultDetail::TermWeights {
            word_count: 10,
            lexical_richness: 0.5,
            shared_terms: vec![],
        },
    }
}

fn matched(label: &str, score: f64) -> RankedOutcome {
    RankedOutcome::Match {
        label: label.to_string(),
        score,
    }
}

// ============================================================
// Empty input
// ============================================================

#[test]
fn no_suspects_is_inconclusive_for_both_directions() {
    assert_eq!(rank(&[], ScoreDirection::LowerIsBetter), RankedOutcome::Inconclusive);
    assert_eq!(rank(&[], ScoreDirection::HigherIsBetter), RankedOutcome::Inconclusive);
}

// ============================================================
// Distance (lower is better)
// ============================================================

#[test]
fn distance_picks_minimum() {
    let results = [result("a", 12.5), result("b", 3.25), result("c", 7.0)];
    assert_eq!(rank(&results, ScoreDirection::LowerIsBetter), matched("b", 3.25));
}

#[test]
fn distance_tie_goes_to_first() {
    let results = [result("a", 5.0), result("b", 2.0), result("c", 2.0)];
    assert_eq!(rank(&results, ScoreDirection::LowerIsBetter), matched("b", 2.0));
}

#[test]
fn distance_all_zero_is_a_match() {
    let results = [result("a", 0.0), result("b", 0.0)];
    assert_eq!(rank(&results, ScoreDirection::LowerIsBetter), matched("a", 0.0));
}

// ============================================================
// Similarity (higher is better)
// ============================================================

#[test]
fn similarity_picks_maximum() {
    let results = [result("a", 0.1), result("b", 0.8), result("c", 0.3)];
    assert_eq!(rank(&results, ScoreDirection::HigherIsBetter), matched("b", 0.8));
}

#[test]
fn similarity_tie_goes_to_first() {
    let results = [result("a", 0.6), result("b", 0.6), result("c", 0.2)];
    assert_eq!(rank(&results, ScoreDirection::HigherIsBetter), matched("a", 0.6));
}

#[test]
fn similarity_all_zero_is_inconclusive() {
    let results = [result("a", 0.0), result("b", 0.0), result("c", 0.0)];
    assert_eq!(
        rank(&results, ScoreDirection::HigherIsBetter),
        RankedOutcome::Inconclusive
    );
}

#[test]
fn similarity_small_positive_beats_zero_floor() {
    let results = [result("a", 0.0), result("b", 1e-9)];
    assert_eq!(rank(&results, ScoreDirection::HigherIsBetter), matched("b", 1e-9));
}

#[test]
fn outcome_accessors() {
    assert_eq!(matched("x", 1.0).label(), Some("x"));
    assert!(!matched("x", 1.0).is_inconclusive());
    assert!(RankedOutcome::Inconclusive.is_inconclusive());
    assert_eq!(RankedOutcome::Inconclusive.label(), None);
}
