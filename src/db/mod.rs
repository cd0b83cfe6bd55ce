//! SQLite persistence for the best score.

mod error;
mod models;
mod repository;
mod schema; // Diesel schema - internal use only
mod store;

pub use error::DbError;
pub use models::{BestScore, NewBestScore};
pub use repository::{MIGRATIONS, ScoreRepository};
pub use store::SqliteBestScore;
