//! Fleetboard CLI
//!
//! Turns a JSON dump of discovered AWS resources into CloudWatch
//! dashboard bodies and alarm definitions on disk.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Fleetboard CLI
#[derive(Parser)]
#[command(name = "fleetboard")]
#[command(author, version, about = "CloudWatch dashboard generator", long_about = None)]
pub struct Cli {
    /// Path to the generator config file (JSON)
    #[arg(long, short, env = "FLEETBOARD_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "table", global = true)]
    pub format: output::OutputFormat,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate dashboard bodies and alarms from a resource dump
    Synth {
        /// Resource dump produced by the discovery collector (JSON array)
        input: PathBuf,

        /// Directory the dashboard bodies are written to
        #[arg(long, short, default_value = "out")]
        out_dir: PathBuf,
    },

    /// Show how a resource dump classifies, without generating anything
    Classify {
        /// Resource dump produced by the discovery collector (JSON array)
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with(fmt::layer().with_target(false))
        .init();

    let generator_config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Synth { input, out_dir } => {
            commands::synth::run(&input, &out_dir, &generator_config, cli.format)?;
        }
        Commands::Classify { input } => {
            commands::classify::run(&input, cli.format)?;
        }
    }

    Ok(())
}
