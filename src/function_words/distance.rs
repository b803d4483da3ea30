// Manhattan (L1) distance between function-word fingerprints.
//
// The distance walks only the reference fingerprint's keys. A candidate's
// rates for words the reference does not carry never add to the score, so
// the metric is asymmetric. Attribution keeps that behaviour for
// compatibility; `symmetric_distance` is the variant that also penalises
// candidate-only words.

use std::collections::BTreeSet;

use super::fingerprint::FunctionWordFingerprint;

/// Sum of |reference - candidate| over the reference's words.
///
/// 0.0 means identical rates for every reference word. Lower is more similar.
pub fn manhattan_distance(
    reference: &FunctionWordFingerprint,
    candidate: &FunctionWordFingerprint,
) -> f64 {
    reference
        .iter()
        .map(|(word, rate)| (rate - candidate.get(word)).abs())
        .sum()
}

/// L1 distance over the union of both fingerprints' words.
pub fn symmetric_distance(a: &FunctionWordFingerprint, b: &FunctionWordFingerprint) -> f64 {
    let words: BTreeSet<&str> = a.iter().chain(b.iter()).map(|(word, _)| word).collect();
    words
        .into_iter()
        .map(|word| (a.get(word) - b.get(word)).abs())
        .sum()
}
