// FunctionWordFingerprint: how often a document uses each reference word.
//
// Function words (articles, prepositions, conjunctions) are chosen largely
// unconsciously and independently of topic, so their rates say more about
// the writer than the subject. Each rate is a percentage of all tokens in the
// document; rates are independent and do not sum to 100.

use std::collections::HashMap;

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Usage rate of a single reference word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionWordRate {
    pub word: String,
    /// Occurrences / total tokens × 100
    pub percent: f64,
}

/// Rates for every reference word, in reference-list order.
///
/// An empty fingerprint means the document had no tokens at all ("no
/// signal"). Lookups of words that are not present read as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionWordFingerprint {
    pub rates: Vec<FunctionWordRate>,
}

impl FunctionWordFingerprint {
    /// Compute the fingerprint of a normalized token sequence.
    pub fn extract(tokens: &[String], function_words: &[String]) -> Self {
        let total = tokens.len();
        if total == 0 {
            return Self::default();
        }

        let mut counts: HashMap<&str, usize> = HashMap::with_capacity(function_words.len());
        for word in function_words {
            counts.insert(word.as_str(), 0);
        }
        for token in tokens {
            if let Some(count) = counts.get_mut(token.as_str()) {
                *count += 1;
            }
        }

        let rates = function_words
            .iter()
            .map(|word| FunctionWordRate {
                word: word.clone(),
                percent: counts[word.as_str()] as f64 / total as f64 * 100.0,
            })
            .collect();

        Self { rates }
    }

    /// Rate for `word`, or 0.0 if the word is not a key.
    pub fn get(&self, word: &str) -> f64 {
        self.rates
            .iter()
            .find(|r| r.word == word)
            .map(|r| r.percent)
            .unwrap_or(0.0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.rates.iter().any(|r| r.word == word)
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Iterate (word, percent) pairs in reference order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|r| (r.word.as_str(), r.percent))
    }

    /// The `n` most used reference words, highest rate first. Ties keep
    /// reference order; words with a zero rate are left out.
    pub fn top(&self, n: usize) -> Vec<&FunctionWordRate> {
        let mut used: Vec<&FunctionWordRate> =
            self.rates.iter().filter(|r| r.percent > 0.0).collect();
        used.sort_by(|a, b| {
            b.percent
                .partial_cmp(&a.percent)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        used.truncate(n);
        used
    }

    /// Print the fingerprint as a bar chart, scaled to the highest rate.
    pub fn display(&self, label: &str, word_count: usize) {
        println!(
            "\n{}",
            format!("=== Function-word fingerprint: {label} ({word_count} words) ===").bold()
        );
        println!();

        if self.is_empty() {
            println!("  {}", "No words found, nothing to fingerprint.".dimmed());
            return;
        }

        let bar_width: usize = 30;
        let max = self
            .rates
            .iter()
            .map(|r| r.percent)
            .fold(0.0_f64, f64::max);

        for rate in &self.rates {
            let filled = if max > 0.0 {
                (rate.percent / max * bar_width as f64).round() as usize
            } else {
                0
            };
            let bar = format!(
                "[{}{}]",
                "=".repeat(filled),
                " ".repeat(bar_width.saturating_sub(filled))
            );

            let colored_bar = if rate.percent >= 5.0 {
                bar.bright_green()
            } else if rate.percent >= 1.0 {
                bar.bright_yellow()
            } else {
                bar.bright_blue()
            };

            println!("  {:<8} {} {:>6.2}%", rate.word.bold(), colored_bar, rate.percent);
        }
        println!();
    }
}
