//! stimlist CLI — the main entry point.
//!
//! Commands:
//! - `build`   — Build a randomized experiment list and write it as TSV
//! - `check`   — Validate an item source and report on its buckets
//! - `preview` — Show per-list condition assignments without shuffling

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod output;

#[derive(Parser)]
#[command(
    name = "stimlist",
    about = "stimlist — counterbalanced stimulus lists for sentence-processing experiments",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the randomized experiment list for a subject or list number
    Build {
        /// Item source file (default: the configured item_file)
        #[arg(short, long)]
        items: Option<PathBuf>,

        /// Subject number; derives the list number and the output name
        #[arg(short, long, conflicts_with = "list")]
        subject: Option<u32>,

        /// Explicit 1-based list number (bypasses subject derivation)
        #[arg(short, long)]
        list: Option<u32>,

        /// RNG seed for a reproducible list
        #[arg(long)]
        seed: Option<u64>,

        /// Output path, "-" for stdout (default: <results_dir>/NNN.tsv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate an item source and report bucket and filler diagnostics
    Check {
        /// Item source file (default: the configured item_file)
        items: Option<PathBuf>,
    },

    /// Show which condition each item receives on each list
    Preview {
        /// Item source file (default: the configured item_file)
        items: Option<PathBuf>,

        /// How many lists to show (default: the configured number_of_lists)
        #[arg(long)]
        lists: Option<u32>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Build {
            items,
            subject,
            list,
            seed,
            output,
        } => commands::build::run(items, subject, list, seed, output)?,
        Commands::Check { items } => commands::check::run(items)?,
        Commands::Preview { items, lists } => commands::preview::run(items, lists)?,
    }

    Ok(())
}
