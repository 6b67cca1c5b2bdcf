use std::sync::Arc;

use chrono::Utc;

use crate::model::{Note, NotePatch, NotePayload};
use crate::store::{NoteStore, StoreError};

/// Expected per-operation outcomes. Validation and not-found are values, not
/// raised failures; only `Store` represents an unexpected condition.
#[derive(Debug, thiserror::Error)]
pub enum NotesError {
    #[error("{0}")]
    Validation(String),
    #[error("Not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Resource CRUD engine for the per-user notes collection.
///
/// Every operation is scoped to the `owner_id` resolved by the router; no
/// operation can see or touch another owner's partition. The store handle is
/// injected at construction and shared across requests.
#[derive(Clone)]
pub struct NotesService {
    store: Arc<dyn NoteStore>,
}

impl NotesService {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    /// All notes for one owner, most recently updated first. Ties keep
    /// store-native order.
    pub async fn list(&self, owner_id: &str) -> Result<Vec<Note>, NotesError> {
        let mut notes = self.store.query(owner_id).await?;
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(notes)
    }

    /// Create a note from a client payload. `title` must be present and
    /// non-empty; `content` defaults to the empty string. The id and both
    /// timestamps are assigned here, server-side.
    pub async fn create(&self, owner_id: &str, payload: NotePayload) -> Result<Note, NotesError> {
        let title = match payload.title {
            Some(t) if !t.is_empty() => t,
            _ => return Err(NotesError::Validation("Title is required".to_string())),
        };
        let note = Note::create(owner_id, title, payload.content.unwrap_or_default());
        self.store.put(note.clone()).await?;
        Ok(note)
    }

    pub async fn get(&self, owner_id: &str, note_id: &str) -> Result<Note, NotesError> {
        self.store
            .get(owner_id, note_id)
            .await?
            .ok_or(NotesError::NotFound)
    }

    /// Partial update: only fields supplied in the body are overwritten,
    /// `updated_at` is always refreshed. A body naming neither field is a
    /// validation error. Returns the post-update image.
    pub async fn update(
        &self,
        owner_id: &str,
        note_id: &str,
        payload: NotePayload,
    ) -> Result<Note, NotesError> {
        if payload.is_empty() {
            return Err(NotesError::Validation(
                "Title or content is required".to_string(),
            ));
        }
        if self.store.get(owner_id, note_id).await?.is_none() {
            return Err(NotesError::NotFound);
        }
        let patch = NotePatch {
            title: payload.title,
            content: payload.content,
            updated_at: Utc::now(),
        };
        // The key can vanish between the check and the write; treat that the
        // same as the failed existence check.
        self.store
            .update(owner_id, note_id, patch)
            .await?
            .ok_or(NotesError::NotFound)
    }

    /// Hard delete. Existence is confirmed first so a missing note surfaces
    /// as not-found rather than a silent no-op.
    pub async fn delete(&self, owner_id: &str, note_id: &str) -> Result<(), NotesError> {
        if self.store.get(owner_id, note_id).await?.is_none() {
            return Err(NotesError::NotFound);
        }
        self.store.delete(owner_id, note_id).await?;
        Ok(())
    }
}
