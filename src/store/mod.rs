use async_trait::async_trait;

use crate::model::{Note, NotePatch};

pub mod memory;

pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("Store operation failed: {0}")]
    Backend(String),
}

/// Keyed store contract for notes, partitioned by owner.
///
/// Each call is atomic for a single `(owner_id, note_id)` key; there are no
/// multi-key transactions. `update` never upserts: callers check existence
/// first, and a concurrently deleted key surfaces as `None`.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Insert or replace the full item under its composite key.
    async fn put(&self, note: Note) -> Result<(), StoreError>;

    /// Fetch one item by composite key.
    async fn get(&self, owner_id: &str, note_id: &str) -> Result<Option<Note>, StoreError>;

    /// Fetch all items in one owner's partition, in store-native order.
    async fn query(&self, owner_id: &str) -> Result<Vec<Note>, StoreError>;

    /// Apply a partial update and return the new image, or `None` if the key
    /// is absent.
    async fn update(
        &self,
        owner_id: &str,
        note_id: &str,
        patch: NotePatch,
    ) -> Result<Option<Note>, StoreError>;

    /// Hard-delete one item. Deleting an absent key is a no-op.
    async fn delete(&self, owner_id: &str, note_id: &str) -> Result<(), StoreError>;
}
