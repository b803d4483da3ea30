// Cosine similarity: the dot product of two vectors divided by the product of
// their magnitudes. Magnitude does not matter, only direction, so a long and a
// short document with the same term mix score 1.0. A vector with no weight at
// all has no direction and scores 0.0 against anything.

use super::tfidf::TermWeightVector;

/// Cosine similarity of two vectors from the same run.
///
/// Returns a value in [-1, 1]; TF-IDF weights are non-negative so in practice
/// it lies in [0, 1].
pub fn cosine_similarity(a: &TermWeightVector, b: &TermWeightVector) -> f64 {
    let denom = a.magnitude() * b.magnitude();
    if denom == 0.0 {
        return 0.0;
    }
    a.dot(b) / denom
}
