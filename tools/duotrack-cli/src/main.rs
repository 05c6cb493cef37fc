//! Duotrack CLI: replay recorded pose streams through the two-person tracker.
//!
//! Usage:
//!   duotrack replay <PATH>       Count repetitions in a recorded frame stream
//!   duotrack validate <PATH>     Check a frame stream for problems
//!   duotrack config              Show (or write) the effective configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use duotrack_common::config::AppConfig;
use duotrack_motion_core::ExerciseKind;

mod commands;

#[derive(Parser)]
#[command(
    name = "duotrack",
    about = "Two-person pose tracking and exercise repetition counting",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSONL frame stream and count repetitions per subject
    Replay {
        /// Path to the frame stream
        path: PathBuf,

        /// Exercise to detect: high-knees|side-slide
        #[arg(short, long, default_value = "high-knees")]
        exercise: ExerciseKind,

        /// Seed for feedback phrase selection (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Emit repetition events and the summary as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Validate a JSONL frame stream
    Validate {
        /// Path to the frame stream
        path: PathBuf,
    },

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        write: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load();
    duotrack_common::logging::init_logging(&config.logging, cli.verbose);

    match cli.command {
        Commands::Replay {
            path,
            exercise,
            seed,
            json,
        } => commands::replay::run(&config, path, exercise, seed, json),
        Commands::Validate { path } => commands::validate::run(path),
        Commands::Config { write } => commands::config::run(&config, write),
    }
}
