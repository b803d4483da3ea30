// Text normalization and per-document descriptive statistics.

pub mod richness;
pub mod tokenize;
