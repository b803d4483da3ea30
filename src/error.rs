// Core error type.
//
// The attribution core is almost entirely infallible: empty documents degrade
// to empty fingerprints, zero similarity, and zero richness. The only fatal
// condition is a joint corpus that yields no vocabulary for the TF-IDF
// strategy. Application code (loading, CLI) uses anyhow instead.

use thiserror::Error;

/// Errors raised by the attribution core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttributionError {
    /// Every document in the joint corpus was empty or made of stop-words,
    /// so there is nothing to weight.
    #[error("joint corpus of {documents} documents produced an empty vocabulary")]
    EmptyVocabulary { documents: usize },
}
