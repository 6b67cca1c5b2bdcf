use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::AuthSubject;
use crate::model::NotePayload;

/// Parse a raw request body as a note payload. Empty or absent bodies are
/// treated as `{}`; a body that fails to parse is an unexpected failure and
/// surfaces as a generic 500.
fn parse_payload(body: &str) -> Result<NotePayload, ApiError> {
    if body.trim().is_empty() {
        return Ok(NotePayload::default());
    }
    serde_json::from_str(body).map_err(|e| {
        tracing::error!("Failed to parse request body: {}", e);
        ApiError::internal_server_error("An error occurred while processing your request")
    })
}

/// GET /notes - list the caller's notes, most recently updated first
pub async fn note_list(
    State(state): State<AppState>,
    subject: AuthSubject,
) -> Result<impl IntoResponse, ApiError> {
    let notes = state.notes.list(&subject.id).await?;
    Ok(Json(json!({ "notes": notes })))
}

/// POST /notes - create a note for the caller
pub async fn note_create(
    State(state): State<AppState>,
    subject: AuthSubject,
    body: String,
) -> Result<impl IntoResponse, ApiError> {
    let payload = parse_payload(&body)?;
    let note = state.notes.create(&subject.id, payload).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /notes/:id - fetch one note by id
pub async fn note_get(
    State(state): State<AppState>,
    subject: AuthSubject,
    Path(note_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let note = state.notes.get(&subject.id, &note_id).await?;
    Ok(Json(note))
}

/// PUT /notes/:id - partial update, returns the new image
pub async fn note_update(
    State(state): State<AppState>,
    subject: AuthSubject,
    Path(note_id): Path<String>,
    body: String,
) -> Result<impl IntoResponse, ApiError> {
    let payload = parse_payload(&body)?;
    let note = state.notes.update(&subject.id, &note_id, payload).await?;
    Ok(Json(note))
}

/// DELETE /notes/:id - hard delete, 204 on success
pub async fn note_delete(
    State(state): State<AppState>,
    subject: AuthSubject,
    Path(note_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.notes.delete(&subject.id, &note_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
