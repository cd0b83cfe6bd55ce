//! Database models.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::db::schema;

/// A stored best score row.
#[derive(Debug, Clone, Queryable, Selectable, Getters)]
#[diesel(table_name = schema::best_scores)]
pub struct BestScore {
    key: String,
    score: i32,
    updated_at: NaiveDateTime,
}

/// Insertable best score for upserts.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::best_scores)]
pub struct NewBestScore {
    key: String,
    score: i32,
}
