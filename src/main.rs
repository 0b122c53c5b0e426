//! Megafauna CLI - inspect the board and resolve ecology contests.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Megafauna - ecology rules for an evolution board game
#[derive(Parser, Debug)]
#[command(name = "megafauna")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log rules decisions (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the board: rows, climax numbers, orogeny habitats
    Board {
        /// Board layout file (JSON, default: the printed board)
        #[arg(short, long)]
        layout: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Find the lowest-climax habitat of a latitude
    Lowest {
        /// Latitude key: A, J, H, T, or O
        #[arg(required = true)]
        latitude: String,

        /// Board layout file (JSON, default: the printed board)
        #[arg(short, long)]
        layout: Option<PathBuf>,
    },

    /// Resolve a herbivore contest for one biome
    Herbivore {
        /// Biome requirements as DNA letters, e.g. BB
        #[arg(short, long)]
        requirement: String,

        /// Biome niche: size, a dentition (2-5), or a DNA letter
        #[arg(short, long)]
        niche: String,

        /// Candidate as DENTITION:SIZE:GENOME (repeatable, in priority order)
        #[arg(short, long = "animal", required = true)]
        animals: Vec<String>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Resolve predation in one biome
    Predation {
        /// Carnivore as DENTITION:SIZE:GENOME[:SILHOUETTE] (repeatable)
        #[arg(short, long = "carnivore", required = true)]
        carnivores: Vec<String>,

        /// Prey as DENTITION:SIZE:GENOME[:SILHOUETTE] (up to 2)
        #[arg(short, long = "prey", required = true)]
        prey: Vec<String>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// List the tile catalog, or the shuffled stacks for a seed
    Tiles {
        /// Shuffle seed (default: list the catalog in printed order)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

/// Install the stderr subscriber. Returns false if one was already set,
/// in which case that one keeps receiving events.
fn init_tracing(verbose: bool) -> bool {
    let default = if verbose { "megafauna=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

fn main() -> ExitCode {
    let args = Args::parse();
    if !init_tracing(args.verbose) {
        eprintln!("Warning: a tracing subscriber was already installed");
    }

    let result = match args.command {
        Commands::Board { layout, format } => cli::board::execute(layout.as_deref(), format),

        Commands::Lowest { latitude, layout } => {
            cli::lowest::execute(&latitude, layout.as_deref())
        }

        Commands::Herbivore {
            requirement,
            niche,
            animals,
            format,
        } => cli::herbivore::execute(&requirement, &niche, &animals, format),

        Commands::Predation {
            carnivores,
            prey,
            format,
        } => cli::predation::execute(&carnivores, &prey, format),

        Commands::Tiles { seed, format } => cli::tiles::execute(seed, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
