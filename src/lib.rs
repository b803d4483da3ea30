// Inkprint: stylometric authorship attribution.
//
// This is the library root. The core (text, lexicon, function_words,
// vectorize, scoring, pipeline) works on already-decoded text; corpus and
// output are the filesystem and terminal edges used by the CLI.

pub mod config;
pub mod corpus;
pub mod error;
pub mod function_words;
pub mod lexicon;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod text;
pub mod vectorize;
