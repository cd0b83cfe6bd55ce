//! Strictly Arithmetic library - timed arithmetic quiz application
//!
//! Wires the pure quiz logic from [`strictly_quiz`] to a terminal UI, a
//! TOML configuration file and a SQLite best-score store.
//!
//! # Architecture
//!
//! - **Config**: [`QuizConfig`] loaded from TOML
//! - **Database**: [`ScoreRepository`] and the [`SqliteBestScore`] store port
//! - **TUI**: ratatui front end driving a [`strictly_quiz::GameSession`]
//!
//! # Example
//!
//! ```no_run
//! use strictly_arithmetic::{QuizConfig, ScoreRepository, SqliteBestScore};
//! use strictly_quiz::{GameSession, RandomProblems};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = QuizConfig::default();
//! let repository = ScoreRepository::open(config.db_path().clone())?;
//! let store = SqliteBestScore::new(repository, config.store_key().clone());
//! let session = GameSession::new(RandomProblems::new(), store);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod db;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, QuizConfig};

// Crate-level exports - Persistence
pub use db::{BestScore, DbError, MIGRATIONS, NewBestScore, ScoreRepository, SqliteBestScore};

// Crate-level exports - Terminal UI
pub use tui::{App, Command, Flow, Hud, command_for, run_tui};
