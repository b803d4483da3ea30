use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::lexicon::{Lexicon, StopWordLanguage};

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy; command-line flags
/// override whatever is set here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Extension of suspect files in the suspects directory (default "txt")
    pub suspect_extension: String,
    /// Language of the stop-word list used by the TF-IDF strategy
    pub stop_word_language: StopWordLanguage,
    /// Optional replacement for the default function-word list
    pub function_words_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every setting has a default; only a malformed language name fails.
    pub fn load() -> Result<Self> {
        let stop_word_language = match env::var("INKPRINT_STOP_WORDS") {
            Ok(name) if !name.trim().is_empty() => StopWordLanguage::parse(&name)?,
            _ => StopWordLanguage::English,
        };

        Ok(Self {
            suspect_extension: env::var("INKPRINT_SUSPECT_EXT")
                .ok()
                .filter(|ext| !ext.trim().is_empty())
                .unwrap_or_else(|| "txt".to_string()),
            stop_word_language,
            function_words_path: env::var("INKPRINT_FUNCTION_WORDS")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    /// Build the process-wide lexicon for this configuration.
    pub fn lexicon(&self) -> Result<Lexicon> {
        let lexicon = Lexicon::for_language(self.stop_word_language);
        match &self.function_words_path {
            Some(path) => lexicon.with_function_words_file(path),
            None => Ok(lexicon),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suspect_extension: "txt".to_string(),
            stop_word_language: StopWordLanguage::English,
            function_words_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lexicon() {
        let lexicon = Config::default().lexicon().unwrap();
        assert_eq!(lexicon.function_words()[0], "the");
    }

    #[test]
    fn test_missing_function_words_file() {
        let config = Config {
            function_words_path: Some(std::env::temp_dir().join("inkprint-no-such-list.txt")),
            ..Config::default()
        };
        assert!(config.lexicon().is_err());
    }
}
