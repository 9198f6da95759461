//! Entry store: the two queries the service performs against `mood_entries`.
//!
//! Entries are immutable once written, so there is no update or delete path
//! and concurrent writers never conflict.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::mood::{CreateMoodEntryRequest, MoodEntry};

/// Insert a new entry, assigning a fresh id and defaulting `date` to now
/// when the caller supplied none. Returns the persisted row.
pub async fn insert_entry(
    pool: &PgPool,
    body: CreateMoodEntryRequest,
) -> Result<MoodEntry, sqlx::Error> {
    let date = body.date.unwrap_or_else(Utc::now);

    sqlx::query_as::<_, MoodEntry>(
        r#"
        INSERT INTO mood_entries (id, mood, note, date)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&body.mood)
    .bind(&body.note)
    .bind(date)
    .fetch_one(pool)
    .await
}

/// Every entry, oldest first.
pub async fn list_entries(pool: &PgPool) -> Result<Vec<MoodEntry>, sqlx::Error> {
    sqlx::query_as::<_, MoodEntry>(
        r#"
        SELECT * FROM mood_entries
        ORDER BY date ASC
        "#,
    )
    .fetch_all(pool)
    .await
}
