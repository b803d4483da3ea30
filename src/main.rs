use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::info;

use inkprint::config::Config;
use inkprint::corpus::loader::{load_document, load_suspects};
use inkprint::lexicon::StopWordLanguage;
use inkprint::output::terminal;
use inkprint::pipeline::{Attributor, StrategyKind};

/// Inkprint: authorship attribution by linguistic fingerprint.
///
/// Compares a questioned document against a folder of suspect documents and
/// ranks the suspects by writing style.
#[derive(Parser)]
#[command(name = "inkprint", version, about)]
struct Cli {
    /// Stop-word language for the TF-IDF strategy (overrides INKPRINT_STOP_WORDS)
    #[arg(long, global = true)]
    stop_words: Option<String>,

    /// File with one function word per line (overrides INKPRINT_FUNCTION_WORDS)
    #[arg(long, global = true)]
    function_words: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank suspect documents by similarity to a questioned document
    Analyze {
        /// The questioned document (e.g. ransom.txt)
        questioned: PathBuf,

        /// Directory holding the suspect documents
        suspects: PathBuf,

        /// Which strategies to run
        #[arg(long, value_enum, default_value_t = StrategyArg::All)]
        strategy: StrategyArg,

        /// Suspect file extension (overrides INKPRINT_SUSPECT_EXT)
        #[arg(long)]
        extension: Option<String>,

        /// Penalise function words only the suspect uses as well
        #[arg(long)]
        symmetric_distance: bool,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show word count, lexical richness, and fingerprint for one document
    Profile {
        file: PathBuf,

        /// Print the profile as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the active function words
    FunctionWords,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    All,
    FunctionWords,
    Tfidf,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::All => StrategyKind::All,
            StrategyArg::FunctionWords => StrategyKind::FunctionWords,
            StrategyArg::Tfidf => StrategyKind::TfIdf,
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Structured logging to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("inkprint=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(name) = &cli.stop_words {
        config.stop_word_language = StopWordLanguage::parse(name)?;
    }
    if let Some(path) = cli.function_words {
        config.function_words_path = Some(path);
    }
    let lexicon = Arc::new(config.lexicon()?);

    match cli.command {
        Commands::Analyze {
            questioned,
            suspects,
            strategy,
            extension,
            symmetric_distance,
            json,
        } => {
            let extension = extension.unwrap_or_else(|| config.suspect_extension.clone());

            let questioned = load_document(&questioned)?;
            let suspects = load_suspects(&suspects, &extension)?;
            info!(
                questioned = %questioned.label,
                suspects = suspects.len(),
                "Documents loaded"
            );

            let attributor = Attributor::new(lexicon).with_symmetric_distance(symmetric_distance);
            let report = attributor.run(&questioned, &suspects, strategy.into());

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_report(&report);
            }
        }

        Commands::Profile { file, json } => {
            let document = load_document(&file)?;
            let profile = Attributor::new(lexicon).profile(&document);

            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                terminal::display_profile(&profile);
                if profile.word_count == 0 {
                    println!(
                        "{}",
                        "The document contains no alphabetic words.".dimmed()
                    );
                }
            }
        }

        Commands::FunctionWords => {
            terminal::display_function_words(&lexicon);
        }
    }

    Ok(())
}
