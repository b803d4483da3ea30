// Reference word lists shared by every component of a run.
//
// A Lexicon is built once at startup and handed to the strategies behind an
// Arc. Nothing mutates it afterwards, so swapping languages or function-word
// lists never touches the algorithms themselves.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use stop_words::{get, LANGUAGE};

/// Function words whose usage rates make up the default English fingerprint.
pub const DEFAULT_FUNCTION_WORDS: &[&str] = &[
    "the", "to", "and", "of", "a", "in", "that", "is", "for", "it", "with", "as", "was", "on",
    "at", "by", "be", "this", "have", "from", "or", "not", "but",
];

/// Languages with a bundled stop-word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopWordLanguage {
    English,
    French,
    German,
    Spanish,
    Italian,
    Portuguese,
}

impl StopWordLanguage {
    /// Parse a language name as written in config or on the command line.
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "french" | "fr" => Ok(Self::French),
            "german" | "de" => Ok(Self::German),
            "spanish" | "es" => Ok(Self::Spanish),
            "italian" | "it" => Ok(Self::Italian),
            "portuguese" | "pt" => Ok(Self::Portuguese),
            other => anyhow::bail!(
                "Unsupported stop-word language '{other}'. \
                 Expected one of: english, french, german, spanish, italian, portuguese"
            ),
        }
    }

    fn stop_words(self) -> Vec<String> {
        let language = match self {
            Self::English => LANGUAGE::English,
            Self::French => LANGUAGE::French,
            Self::German => LANGUAGE::German,
            Self::Spanish => LANGUAGE::Spanish,
            Self::Italian => LANGUAGE::Italian,
            Self::Portuguese => LANGUAGE::Portuguese,
        };
        get(language)
    }
}

/// Immutable reference lists: the function words that form a fingerprint and
/// the stop-words excluded from TF-IDF vocabularies.
#[derive(Debug, Clone)]
pub struct Lexicon {
    function_words: Vec<String>,
    stop_words: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from explicit lists.
    ///
    /// Function words are lowercased and de-duplicated, keeping first-seen
    /// order so fingerprints list terms in a stable order.
    pub fn new<F, S>(function_words: F, stop_words: S) -> Self
    where
        F: IntoIterator,
        F::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let function_words = function_words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty() && seen.insert(w.clone()))
            .collect();

        let stop_words = stop_words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            function_words,
            stop_words,
        }
    }

    /// The default English configuration.
    pub fn english() -> Self {
        Self::for_language(StopWordLanguage::English)
    }

    /// Default function words with the stop-word list for `language`.
    pub fn for_language(language: StopWordLanguage) -> Self {
        Self::new(DEFAULT_FUNCTION_WORDS.iter().copied(), language.stop_words())
    }

    /// Replace the function-word list with one read from a file.
    ///
    /// One word per line; blank lines and lines starting with `#` are skipped.
    pub fn with_function_words_file(self, path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read function-word list {}", path.display()))?;

        let words: Vec<&str> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        if words.is_empty() {
            anyhow::bail!("Function-word list {} contains no words", path.display());
        }

        Ok(Self::new(words, self.stop_words))
    }

    /// Reference function words, lowercased, in fingerprint order.
    pub fn function_words(&self) -> &[String] {
        &self.function_words
    }

    pub fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}
