//! Command-line interface for strictly_arithmetic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Arithmetic - timed arithmetic quiz in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_arithmetic")]
#[command(
    about = "Answer as many arithmetic problems as you can in 120 seconds",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the quiz in the terminal
    Play {
        /// Path to the TOML config file
        #[arg(short, long, default_value = strictly_arithmetic::DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Path to the database file, overriding the config
        #[arg(long)]
        db_path: Option<String>,
    },

    /// Print the persisted best score
    Best {
        /// Path to the TOML config file
        #[arg(short, long, default_value = strictly_arithmetic::DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Path to the database file, overriding the config
        #[arg(long)]
        db_path: Option<String>,
    },
}
