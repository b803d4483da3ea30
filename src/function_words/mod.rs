// Function-word strategy: usage-rate fingerprints compared by L1 distance.

pub mod distance;
pub mod fingerprint;
pub mod strategy;

pub use fingerprint::FunctionWordFingerprint;
