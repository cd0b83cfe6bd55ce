//! [`BestScoreStore`] backed by [`ScoreRepository`].

use strictly_quiz::{BestScoreStore, StoreError};
use tracing::instrument;

use crate::db::ScoreRepository;

/// Best score kept in one keyed row of the SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteBestScore {
    repository: ScoreRepository,
    key: String,
}

impl SqliteBestScore {
    /// Creates a store reading and writing the row under `key`.
    #[instrument(skip(repository))]
    pub fn new(repository: ScoreRepository, key: String) -> Self {
        Self { repository, key }
    }

    /// The key this store uses.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl BestScoreStore for SqliteBestScore {
    #[instrument(skip(self), fields(key = %self.key))]
    fn load(&self) -> Result<u32, StoreError> {
        match self.repository.get_score(&self.key)? {
            Some(row) => u32::try_from(*row.score()).map_err(|_| {
                StoreError::new(format!("Stored score {} is negative", row.score()))
            }),
            None => Ok(0),
        }
    }

    #[instrument(skip(self), fields(key = %self.key))]
    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        let score = i32::try_from(score)
            .map_err(|_| StoreError::new(format!("Score {} does not fit the database", score)))?;
        self.repository.upsert_score(&self.key, score)?;
        Ok(())
    }
}
