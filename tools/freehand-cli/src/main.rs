//! Freehand CLI: replay and inspect recorded pointer traces.
//!
//! Usage:
//!   freehand turns <TRACE>      Write the turns detected in a trace as JSONL
//!   freehand validate <TRACE>   Validate a trace file
//!   freehand info <TRACE>       Show trace information
//!   freehand init               Write a starting config file

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use freehand_common::config::{AppConfig, LoggingConfig};
use freehand_turn_core::DetectorKind;

mod commands;

#[derive(Parser)]
#[command(
    name = "freehand",
    about = "Axis-aligned turn detection for freehand pointer strokes",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Treat trace coordinates as real numbers instead of integers
    #[arg(long, global = true)]
    real: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a trace and write its turns as JSONL
    Turns {
        /// Path to the trace file
        path: PathBuf,

        /// Turn detector: simple|reversal (defaults to the configured one)
        #[arg(short, long)]
        detector: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a trace file
    Validate {
        /// Path to the trace file
        path: PathBuf,
    },

    /// Show trace information
    Info {
        /// Path to the trace file
        path: PathBuf,
    },

    /// Write a starting config file
    Init {
        /// Default turn detector: simple|reversal
        #[arg(short, long, default_value = "simple")]
        detector: String,

        /// Config file to write (standard location if omitted)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load();

    // Initialize logging
    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    freehand_common::logging::init_logging(&LoggingConfig {
        level,
        json: config.logging.json,
    });

    let real = cli.real || !config.turns.integer_coordinates;

    match cli.command {
        Commands::Turns {
            path,
            detector,
            output,
        } => {
            let detector: DetectorKind = detector
                .as_deref()
                .unwrap_or(config.turns.detector.as_str())
                .parse()?;
            commands::turns::run(path, detector, real, output)
        }
        Commands::Validate { path } => commands::validate::run(path, real),
        Commands::Info { path } => commands::info::run(path, real),
        Commands::Init {
            detector,
            path,
            force,
        } => commands::init::run(path, detector.parse()?, cli.real, force),
    }
}
