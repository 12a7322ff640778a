use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use lexsim::config::Config;
use lexsim::corpus;
use lexsim::output::terminal;
use lexsim::pipeline::ranking;
use lexsim::profile::builder::WordFrequencyBuilder;
use lexsim::profile::traits::ProfileBuilder;
use lexsim::similarity::overlap::{shared_tokens, similarity};

/// lexsim: find the most lexically similar documents in a collection.
///
/// Each document is reduced to the relative frequencies of its most common
/// words; pairs of documents are scored by how much those profiles overlap.
#[derive(Parser)]
#[command(name = "lexsim", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank every pair of documents by similarity
    Rank {
        /// Document paths, in order
        paths: Vec<PathBuf>,

        /// Read document paths from a file, one per line
        #[arg(long, conflicts_with_all = ["paths", "interactive"])]
        manifest: Option<PathBuf>,

        /// Prompt for document paths on stdin
        #[arg(long, conflicts_with = "paths")]
        interactive: bool,

        /// How many paths to prompt for (default: 64, or LEXSIM_PROMPT_COUNT)
        #[arg(long, requires = "interactive")]
        count: Option<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        limits: Limits,
    },

    /// Show the word-frequency profile of a single document
    Profile {
        path: PathBuf,

        /// Number of words to display (default: 20)
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Words kept in the profile (default: 100, or LEXSIM_TOP_WORDS)
        #[arg(long)]
        top_words: Option<usize>,
    },

    /// Score the similarity of two documents
    Compare {
        first: PathBuf,
        second: PathBuf,

        /// Words kept in each profile (default: 100, or LEXSIM_TOP_WORDS)
        #[arg(long)]
        top_words: Option<usize>,
    },
}

#[derive(Args)]
struct Limits {
    /// Words kept in each profile (default: 100, or LEXSIM_TOP_WORDS)
    #[arg(long)]
    top_words: Option<usize>,

    /// Pairs shown in the report (default: 10, or LEXSIM_TOP_PAIRS)
    #[arg(long)]
    top_pairs: Option<usize>,
}

fn main() -> Result<ExitCode> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Structured logging goes to stderr; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lexsim=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            paths,
            manifest,
            interactive,
            count,
            json,
            limits,
        } => {
            let config = Config::load()?.with_overrides(limits.top_words, limits.top_pairs)?;

            let documents = if let Some(manifest) = manifest {
                corpus::read_manifest(&manifest)?
            } else if interactive {
                let count = count.unwrap_or(config.prompt_count);
                let stdin = io::stdin();
                corpus::prompt_paths(stdin.lock(), io::stdout(), count)?
            } else {
                paths
            };

            info!(
                documents = documents.len(),
                top_words = config.top_words,
                top_pairs = config.top_pairs,
                "Ranking document pairs"
            );

            let builder = WordFrequencyBuilder {
                top_words: config.top_words,
            };
            let report = ranking::run(&builder, documents, config.top_pairs)?;

            let stdout = io::stdout();
            let mut out = stdout.lock();
            if json {
                terminal::write_json(&mut out, &report)?;
            } else {
                terminal::write_report(&mut out, &report, config.top_pairs)?;
            }
        }

        Commands::Profile {
            path,
            limit,
            top_words,
        } => {
            let config = Config::load()?.with_overrides(top_words, None)?;
            let builder = WordFrequencyBuilder {
                top_words: config.top_words,
            };
            let outcome = builder.build(&path);
            // The builder has already reported the unreadable path
            if !outcome.readable {
                return Ok(ExitCode::FAILURE);
            }
            outcome
                .profile
                .display(&format!("Profile of {}", path.display()), limit);
        }

        Commands::Compare {
            first,
            second,
            top_words,
        } => {
            let config = Config::load()?.with_overrides(top_words, None)?;
            let builder = WordFrequencyBuilder {
                top_words: config.top_words,
            };
            let a = builder.build(&first).profile;
            let b = builder.build(&second).profile;
            let score = similarity(&a, &b);

            let shared = shared_tokens(&a, &b, 10);

            terminal::display_comparison(&first, &second, score, &shared);
        }
    }

    Ok(ExitCode::SUCCESS)
}
