use axum::{extract::State, http::StatusCode, Json};

use crate::db;
use crate::error::AppResult;
use crate::models::mood::{CreateMoodEntryRequest, MoodEntry};
use crate::AppState;

/// `POST /mood` — persist a new entry and echo it back with its assigned id
/// and resolved date. Malformed bodies never reach this point; the `Json`
/// extractor rejects them with a client error.
pub async fn create_mood(
    State(state): State<AppState>,
    Json(body): Json<CreateMoodEntryRequest>,
) -> AppResult<(StatusCode, Json<MoodEntry>)> {
    let entry = db::moods::insert_entry(&state.db, body).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// `GET /mood` — the full collection, ascending by date.
pub async fn list_moods(State(state): State<AppState>) -> AppResult<Json<Vec<MoodEntry>>> {
    let entries = db::moods::list_entries(&state.db).await?;
    Ok(Json(entries))
}
