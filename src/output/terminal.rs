// Colored terminal output for attribution reports and document profiles.

use colored::Colorize;

use super::truncate_chars;
use crate::lexicon::Lexicon;
use crate::pipeline::{AttributionReport, DocumentProfile, StrategyReport};
use crate::scoring::ranking::RankedOutcome;
use crate::scoring::traits::ResultDetail;

const LABEL_WIDTH: usize = 32;

/// Display a full attribution report: questioned stats, then one section per
/// strategy.
pub fn display_report(report: &AttributionReport) {
    println!(
        "\n{}",
        format!(
            "=== Questioned document: {} ===",
            report.questioned.label
        )
        .bold()
    );
    println!(
        "  Word count: {}  |  Lexical richness: {:.3}  |  Suspects: {}",
        report.questioned.word_count, report.questioned.lexical_richness, report.suspect_count
    );

    for strategy in &report.strategies {
        display_strategy(strategy);
    }
}

/// Display one strategy's per-suspect table and verdict.
pub fn display_strategy(report: &StrategyReport) {
    println!(
        "\n{}",
        format!(
            "--- Strategy: {} ({}) ---",
            report.strategy,
            report.direction.hint()
        )
        .bold()
    );

    if let Some(error) = &report.error {
        println!("  {} {}", "x".red().bold(), error.red());
        println!("  {}", "Inconclusive analysis.".dimmed());
        return;
    }

    println!(
        "  {:>4}  {:<32} {:>8}  {:>9}  {}",
        "#".dimmed(),
        "Suspect".dimmed(),
        "Words".dimmed(),
        "Score".dimmed(),
        "Context".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    let winner = report.outcome.label();

    for (i, result) in report.results.iter().enumerate() {
        let label = truncate_chars(&result.label, LABEL_WIDTH - 3);
        let label = if winner == Some(result.label.as_str()) {
            format!("{label:<LABEL_WIDTH$}").bright_green().bold()
        } else {
            format!("{label:<LABEL_WIDTH$}").normal()
        };

        let context = match &result.detail {
            ResultDetail::FunctionWords { fingerprint, .. } => {
                let top: Vec<String> = fingerprint
                    .top(3)
                    .iter()
                    .map(|r| format!("{} {:.1}%", r.word, r.percent))
                    .collect();
                if top.is_empty() {
                    "no words".to_string()
                } else {
                    top.join(", ")
                }
            }
            ResultDetail::TermWeights {
                lexical_richness,
                shared_terms,
                ..
            } => {
                if shared_terms.is_empty() {
                    format!("TTR {lexical_richness:.3}")
                } else {
                    format!("TTR {lexical_richness:.3}; shared: {}", shared_terms.join(", "))
                }
            }
        };

        println!(
            "  {:>4}. {} {:>8}  {:>9.4}  {}",
            i + 1,
            label,
            result.detail.word_count(),
            result.score,
            context.dimmed()
        );
    }

    println!();
    match &report.outcome {
        RankedOutcome::Match { label, score } => {
            println!(
                "  {} PRIME SUSPECT: {}",
                "!!".red().bold(),
                label.to_uppercase().bold()
            );
            println!("     (score {score:.4}, {})", report.direction.hint());
        }
        RankedOutcome::Inconclusive => {
            println!("  {}", "Inconclusive analysis.".yellow());
        }
    }
}

/// Display a single document's profile with its fingerprint chart.
pub fn display_profile(profile: &DocumentProfile) {
    profile
        .fingerprint
        .display(&profile.label, profile.word_count);
    println!("  Lexical richness: {:.3}", profile.lexical_richness);

    if !profile.top_words.is_empty() {
        println!("  Most used function words: {}", profile.top_words.join(", ").bold());
    }
}

/// Print the active function-word list.
pub fn display_function_words(lexicon: &Lexicon) {
    println!(
        "\n{}",
        format!(
            "=== Function words ({}) | {} stop-words ===",
            lexicon.function_words().len(),
            lexicon.stop_words().len()
        )
        .bold()
    );
    for chunk in lexicon.function_words().chunks(8) {
        println!("  {}", chunk.join("  "));
    }
}
