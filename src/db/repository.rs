//! Database repository for stored scores.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Integer;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::db::{BestScore, DbError, NewBestScore, schema};

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Database repository for keyed scores.
#[derive(Debug, Clone)]
pub struct ScoreRepository {
    db_path: String,
}

impl ScoreRepository {
    /// Opens the database at the given path, creating it and applying
    /// pending migrations as needed.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the database cannot be opened or migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn open(db_path: String) -> Result<Self, DbError> {
        info!(path = %db_path, "Opening ScoreRepository");
        let repository = Self { db_path };

        let mut conn = repository.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("Migrations failed: {}", e)))?;
        debug!(count = applied.len(), "Migrations applied");

        Ok(repository)
    }

    /// Path of the backing database.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Gets the row stored under `key`. Returns `None` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn get_score(&self, key: &str) -> Result<Option<BestScore>, DbError> {
        debug!(key = %key, "Looking up score");
        let mut conn = self.connection()?;

        let row = schema::best_scores::table
            .filter(schema::best_scores::key.eq(key))
            .select(BestScore::as_select())
            .first(&mut conn)
            .optional()?;

        debug!(found = row.is_some(), "Score lookup finished");
        Ok(row)
    }

    /// Inserts the score stored under `key`, or raises an existing row to it.
    /// A stored score is never lowered.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn upsert_score(&self, key: &str, score: i32) -> Result<(), DbError> {
        debug!(key = %key, score, "Upserting score");
        let mut conn = self.connection()?;

        let new_score = NewBestScore::new(key.to_string(), score);
        diesel::insert_into(schema::best_scores::table)
            .values(&new_score)
            .on_conflict(schema::best_scores::key)
            .do_update()
            .set((
                schema::best_scores::score.eq(sql::<Integer>("MAX(score, excluded.score)")),
                schema::best_scores::updated_at.eq(diesel::dsl::now),
            ))
            .execute(&mut conn)?;

        info!(key = %key, score, "Score stored");
        Ok(())
    }
}
