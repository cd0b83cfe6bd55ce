//! Strictly Arithmetic - CLI entry point

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_arithmetic::{QuizConfig, ScoreRepository, SqliteBestScore, run_tui};
use strictly_quiz::{BestScoreStore, GameSession, MemoryBestScore, RandomProblems};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,strictly_arithmetic=debug,strictly_quiz=debug";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, db_path } => run_play(&config, db_path).await,
        Command::Best { config, db_path } => run_best(&config, db_path),
    }
}

/// Play the quiz in the terminal
async fn run_play(config_path: &Path, db_path: Option<String>) -> Result<()> {
    let config = load_config(config_path, db_path)?;

    // Log to a file so tracing output does not tear the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file '{}'", config.log_file()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    let session = GameSession::new(RandomProblems::new(), open_store(&config));
    run_tui(session).await
}

/// Print the persisted best score
fn run_best(config_path: &Path, db_path: Option<String>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(config_path, db_path)?;
    let repository = ScoreRepository::open(config.db_path().clone())
        .context("Failed to open score database")?;
    let store = SqliteBestScore::new(repository, config.store_key().clone());
    let best = store.load().context("Failed to read best score")?;

    println!("Best Score: {}", best);
    Ok(())
}

#[instrument(skip(config_path), fields(config_path = %config_path.display()))]
fn load_config(config_path: &Path, db_path: Option<String>) -> Result<QuizConfig> {
    let config = QuizConfig::load_or_default(config_path)?;

    Ok(match db_path {
        Some(path) => {
            info!(db_path = %path, "Overriding database path");
            config.with_db_path(path)
        }
        None => config,
    })
}

/// Opens the SQLite store, falling back to an in-memory one so the game is
/// still playable without a writable database.
#[instrument(skip(config), fields(db_path = %config.db_path()))]
fn open_store(config: &QuizConfig) -> Box<dyn BestScoreStore> {
    match ScoreRepository::open(config.db_path().clone()) {
        Ok(repository) => Box::new(SqliteBestScore::new(
            repository,
            config.store_key().clone(),
        )),
        Err(e) => {
            warn!(error = %e, "Best score will not persist this run");
            Box::new(MemoryBestScore::default())
        }
    }
}
