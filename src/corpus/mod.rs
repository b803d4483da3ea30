// Documents and the filesystem loader that feeds them to the core.
//
// The core never touches the filesystem. Everything that can go wrong with
// files (missing paths, unreadable directories, no suspects) is reported
// here as an anyhow error before attribution starts.

pub mod document;
pub mod loader;

pub use document::Document;
