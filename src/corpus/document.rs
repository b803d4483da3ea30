use serde::{Deserialize, Serialize};

/// A labelled piece of already-decoded text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// File name or role ("questioned", "suspect-2", ...)
    pub label: String,
    pub text: String,
}

impl Document {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}
