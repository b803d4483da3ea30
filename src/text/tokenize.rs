// Tokenizer/normalizer shared by every strategy.
//
// Text is lowercased and split on Unicode (UAX #29) word boundaries, which
// drops whitespace and punctuation. English contractions are then split the
// Penn Treebank way ("don't" -> "do" + "n't", "cannot" -> "can" + "not",
// "'tis" -> "'t" + "is") so the stem survives while any piece carrying an
// apostrophe is filtered out with every other token that is not purely
// alphabetic (numerals, "3rd", "o'clock").
//
// Hyphen-joined compounds ("well-known", "2-stroke") are one token in the
// Treebank scheme and never purely alphabetic, so every part of them is
// dropped rather than counted as separate words.

use unicode_segmentation::UnicodeSegmentation;

/// Clitics split off the end of a word, checked after "n't".
const CLITICS: &[&str] = &["'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Whole words the Treebank rules split into two pieces.
const FUSED: &[(&str, &str, &str)] = &[
    ("cannot", "can", "not"),
    ("d'ye", "d", "'ye"),
    ("gimme", "gim", "me"),
    ("gonna", "gon", "na"),
    ("gotta", "got", "ta"),
    ("lemme", "lem", "me"),
    ("more'n", "more", "'n"),
    ("wanna", "wan", "na"),
];

/// Words that follow a leading "'t" clitic ("'tis", "'twas").
const AFTER_LEADING_T: &[(&str, &str)] = &[("tis", "is"), ("twas", "was")];

/// Normalize raw text into lowercase alphabetic word tokens in source order.
pub fn normalize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase().replace('\u{2019}', "'");

    lowered
        .unicode_word_indices()
        .filter(|&(start, word)| !is_hyphen_joined(&lowered, start, word))
        .flat_map(|(start, word)| {
            if lowered[..start].ends_with('\'') {
                if let Some(pieces) = split_leading_clitic(word) {
                    return pieces;
                }
            }
            split_contraction(word)
        })
        .filter(|token| is_alphabetic_token(token))
        .map(str::to_string)
        .collect()
}

/// True when the token is non-empty and every char is a letter.
pub fn is_alphabetic_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Split a fused word, a trailing "n't", or a trailing clitic off a word.
fn split_contraction(word: &str) -> Vec<&str> {
    if let Some(&(_, head, tail)) = FUSED.iter().find(|(fused, _, _)| *fused == word) {
        return vec![head, tail];
    }

    if word.len() > 3 && word.ends_with("n't") {
        let (stem, clitic) = word.split_at(word.len() - 3);
        return vec![stem, clitic];
    }

    for clitic in CLITICS {
        if word.len() > clitic.len() && word.ends_with(clitic) {
            let (stem, tail) = word.split_at(word.len() - clitic.len());
            return vec![stem, tail];
        }
    }

    vec![word]
}

/// UAX #29 strips the apostrophe from "'tis"; the caller checks for it.
fn split_leading_clitic(word: &str) -> Option<Vec<&'static str>> {
    AFTER_LEADING_T
        .iter()
        .find(|(joined, _)| *joined == word)
        .map(|&(_, rest)| vec!["'t", rest])
}

/// True when `word` sits directly against a hyphen that joins it to another
/// letter or digit.
fn is_hyphen_joined(text: &str, start: usize, word: &str) -> bool {
    let before = text[..start].chars().rev();
    let after = text[start + word.len()..].chars();
    joins_across_hyphen(before) || joins_across_hyphen(after)
}

fn joins_across_hyphen(mut chars: impl Iterator<Item = char>) -> bool {
    chars.next() == Some('-') && chars.next().is_some_and(char::is_alphanumeric)
}
