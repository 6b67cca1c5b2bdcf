use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single note owned by one authenticated subject.
///
/// `(owner_id, note_id)` is the store's composite key: `owner_id` is the
/// partition key and `note_id` the sort key. Wire format keeps the camelCase
/// field names the frontend already speaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Owning subject id. Derived from the auth context, never user-settable.
    #[serde(rename = "userId")]
    pub owner_id: String,
    pub note_id: String,
    pub title: String,
    pub content: String,
    /// Set once at creation, never modified afterwards.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update. Always >= `created_at`.
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Build a fresh note for `owner_id` with a server-generated id and
    /// `created_at == updated_at`.
    pub fn create(owner_id: &str, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            owner_id: owner_id.to_string(),
            note_id: Uuid::new_v4().to_string(),
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Client-supplied note fields, shared by create and update bodies.
/// Both fields are optional at the wire level; the service layer decides
/// what absence means per operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NotePayload {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NotePayload {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Partial update applied by the store: only `Some` fields are overwritten,
/// `updated_at` is always written.
#[derive(Debug, Clone)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub updated_at: DateTime<Utc>,
}
