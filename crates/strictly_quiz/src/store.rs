//! Best-score persistence port.

use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Failure reported by a [`BestScoreStore`], with caller location.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Key-value storage for the single best-score integer.
///
/// Injected into [`GameSession`](crate::GameSession) at construction. The
/// session loads once and saves only when the best score improves.
pub trait BestScoreStore {
    /// Reads the stored best score. An empty store reads as `0`.
    fn load(&self) -> Result<u32, StoreError>;

    /// Persists a new best score.
    fn save(&mut self, score: u32) -> Result<(), StoreError>;
}

impl<S: BestScoreStore + ?Sized> BestScoreStore for Box<S> {
    fn load(&self) -> Result<u32, StoreError> {
        (**self).load()
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        (**self).save(score)
    }
}

/// Process-local store, for tests and sessions without a database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryBestScore {
    score: u32,
}

impl MemoryBestScore {
    /// Creates a store that already holds `score`.
    pub fn new(score: u32) -> Self {
        Self { score }
    }

    /// Currently stored value.
    pub fn score(&self) -> u32 {
        self.score
    }
}

impl BestScoreStore for MemoryBestScore {
    fn load(&self) -> Result<u32, StoreError> {
        Ok(self.score)
    }

    #[instrument(skip(self))]
    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        debug!(previous = self.score, "Saving best score in memory");
        self.score = score;
        Ok(())
    }
}
