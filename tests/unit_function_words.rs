// Unit tests for function-word fingerprints and the L1 distance.
//
// Covers the empty-document edge case, the [0, 100] range of every rate,
// the zero distance of identical fingerprints, and the deliberate asymmetry
// of manhattan_distance (only the reference fingerprint's words count).

use inkprint::function_words::distance::{manhattan_distance, symmetric_distance};
use inkprint::function_words::fingerprint::{FunctionWordFingerprint, FunctionWordRate};
use inkprint::lexicon::{Lexicon, DEFAULT_FUNCTION_WORDS};
use inkprint::text::tokenize::normalize;

fn english_fingerprint(text: &str) -> FunctionWordFingerprint {
    let lexicon = Lexicon::english();
    FunctionWordFingerprint::extract(&normalize(text), lexicon.function_words())
}

fn fp(pairs: &[(&str, f64)]) -> FunctionWordFingerprint {
    FunctionWordFingerprint {
        rates: pairs
            .iter()
            .map(|(word, percent)| FunctionWordRate {
                word: word.to_string(),
                percent: *percent,
            })
            .collect(),
    }
}

// ============================================================
// FunctionWordFingerprint::extract
// ============================================================

#[test]
fn empty_document_has_empty_fingerprint() {
    assert!(english_fingerprint("").is_empty());
    assert!(english_fingerprint("404 -- 500 !!").is_empty());
}

#[test]
fn every_reference_word_has_a_rate() {
    let fp = english_fingerprint("The cat sat on the mat.");
    assert_eq!(fp.len(), DEFAULT_FUNCTION_WORDS.len());
    for word in DEFAULT_FUNCTION_WORDS {
        assert!(fp.contains(word), "missing {word}");
    }
}

#[test]
fn rates_are_percentages_of_all_tokens() {
    let fp = english_fingerprint("The cat sat on the mat.");
    assert!((fp.get("the") - 100.0 * 2.0 / 6.0).abs() < 1e-9);
    assert!((fp.get("on") - 100.0 / 6.0).abs() < 1e-9);
    assert_eq!(fp.get("and"), 0.0);
}

#[test]
fn rates_stay_within_bounds() {
    let fp = english_fingerprint("the the the the");
    assert!((fp.get("the") - 100.0).abs() < 1e-9);
    for (_, rate) in fp.iter() {
        assert!((0.0..=100.0).contains(&rate));
    }
}

#[test]
fn rates_need_not_sum_to_hundred() {
    let total: f64 = english_fingerprint("the cat").iter().map(|(_, r)| r).sum();
    assert!((total - 50.0).abs() < 1e-9);

    let none: f64 = english_fingerprint("Quiet rivers run deep")
        .iter()
        .map(|(_, r)| r)
        .sum();
    assert_eq!(none, 0.0);
}

#[test]
fn lookup_of_unknown_word_is_zero() {
    let fp = english_fingerprint("the end");
    assert_eq!(fp.get("whereas"), 0.0);
}

#[test]
fn custom_reference_list_is_respected() {
    let lexicon = Lexicon::new(["le", "la"], Vec::<String>::new());
    let tokens = normalize("Le chat et la souris");
    let fp = FunctionWordFingerprint::extract(&tokens, lexicon.function_words());
    assert_eq!(fp.len(), 2);
    assert!((fp.get("le") - 20.0).abs() < 1e-9);
    assert!((fp.get("la") - 20.0).abs() < 1e-9);
}

// ============================================================
// manhattan_distance
// ============================================================

#[test]
fn identical_fingerprints_have_zero_distance() {
    let a = english_fingerprint("It was the best of times, it was the worst of times.");
    assert_eq!(manhattan_distance(&a, &a), 0.0);
}

#[test]
fn distance_is_non_negative() {
    let a = english_fingerprint("the cat and the hat");
    let b = english_fingerprint("of mice and men");
    assert!(manhattan_distance(&a, &b) > 0.0);
    assert!(manhattan_distance(&b, &a) > 0.0);
}

#[test]
fn distance_is_asymmetric_by_reference_keys() {
    // The reference carries only "the"; the candidate also uses "of" heavily.
    // Walking the reference's keys ignores the candidate's "of" entirely,
    // so the two directions differ.
    let reference = fp(&[("the", 10.0)]);
    let candidate = fp(&[("the", 10.0), ("of", 40.0)]);

    assert_eq!(manhattan_distance(&reference, &candidate), 0.0);
    assert!((manhattan_distance(&candidate, &reference) - 40.0).abs() < 1e-12);
}

#[test]
fn empty_reference_scores_zero_against_anything() {
    let empty = FunctionWordFingerprint::default();
    let full = english_fingerprint("the end of the road");
    assert_eq!(manhattan_distance(&empty, &full), 0.0);
}

#[test]
fn symmetric_distance_closes_the_gap() {
    let reference = fp(&[("the", 10.0)]);
    let candidate = fp(&[("the", 10.0), ("of", 40.0)]);

    let ab = symmetric_distance(&reference, &candidate);
    let ba = symmetric_distance(&candidate, &reference);
    assert!((ab - 40.0).abs() < 1e-12);
    assert!((ab - ba).abs() < 1e-12);
}
