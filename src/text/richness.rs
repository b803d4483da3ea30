// Lexical richness (type-token ratio).

use std::collections::HashSet;

use super::tokenize::normalize;

/// Distinct tokens divided by total tokens for raw text, 0.0 when empty.
pub fn lexical_richness(text: &str) -> f64 {
    type_token_ratio(&normalize(text))
}

/// Type-token ratio of an already-normalized token sequence.
pub fn type_token_ratio(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }

    let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    distinct.len() as f64 / tokens.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_distinct() {
        assert!((lexical_richness("alpha beta gamma") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_repeats() {
        // 6 tokens, 5 types ("the" repeats)
        let ratio = lexical_richness("The cat sat on the mat");
        assert!((ratio - 5.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_no_tokens() {
        assert_eq!(lexical_richness(""), 0.0);
        assert_eq!(lexical_richness("123 456 !!!"), 0.0);
    }
}
