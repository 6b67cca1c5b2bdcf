use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::model::{Note, NotePatch};

use super::{NoteStore, StoreError};

/// In-process store keyed by `(owner_id, note_id)`.
///
/// The lock gives the same per-key atomicity the production keyed store
/// offers; concurrent writers to the same key are last-write-wins.
#[derive(Debug, Default)]
pub struct MemoryStore {
    notes: RwLock<HashMap<(String, String), Note>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn put(&self, note: Note) -> Result<(), StoreError> {
        let key = (note.owner_id.clone(), note.note_id.clone());
        self.notes.write().await.insert(key, note);
        Ok(())
    }

    async fn get(&self, owner_id: &str, note_id: &str) -> Result<Option<Note>, StoreError> {
        let notes = self.notes.read().await;
        Ok(notes
            .get(&(owner_id.to_string(), note_id.to_string()))
            .cloned())
    }

    async fn query(&self, owner_id: &str) -> Result<Vec<Note>, StoreError> {
        let notes = self.notes.read().await;
        Ok(notes
            .values()
            .filter(|n| n.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        owner_id: &str,
        note_id: &str,
        patch: NotePatch,
    ) -> Result<Option<Note>, StoreError> {
        let mut notes = self.notes.write().await;
        let Some(note) = notes.get_mut(&(owner_id.to_string(), note_id.to_string())) else {
            return Ok(None);
        };
        if let Some(title) = patch.title {
            note.title = title;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }
        note.updated_at = patch.updated_at;
        Ok(Some(note.clone()))
    }

    async fn delete(&self, owner_id: &str, note_id: &str) -> Result<(), StoreError> {
        let mut notes = self.notes.write().await;
        notes.remove(&(owner_id.to_string(), note_id.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn note(owner: &str, title: &str) -> Note {
        Note::create(owner, title.to_string(), String::new())
    }

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let store = MemoryStore::new();
        let n = note("alice", "first");
        store.put(n.clone()).await.unwrap();

        let got = store.get("alice", &n.note_id).await.unwrap();
        assert_eq!(got, Some(n));
    }

    #[tokio::test]
    async fn get_missing_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("alice", "nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn query_is_scoped_to_partition() {
        let store = MemoryStore::new();
        store.put(note("alice", "a1")).await.unwrap();
        store.put(note("alice", "a2")).await.unwrap();
        store.put(note("bob", "b1")).await.unwrap();

        let mine = store.query("alice").await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|n| n.owner_id == "alice"));
        assert!(store.query("carol").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_only_supplied_fields() {
        let store = MemoryStore::new();
        let n = note("alice", "original");
        store.put(n.clone()).await.unwrap();

        let later = Utc::now();
        let updated = store
            .update(
                "alice",
                &n.note_id,
                NotePatch { title: None, content: Some("body".to_string()), updated_at: later },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "original");
        assert_eq!(updated.content, "body");
        assert_eq!(updated.updated_at, later);
        assert_eq!(updated.created_at, n.created_at);
    }

    #[tokio::test]
    async fn update_missing_key_is_none_and_creates_nothing() {
        let store = MemoryStore::new();
        let out = store
            .update(
                "alice",
                "nope",
                NotePatch { title: Some("x".to_string()), content: None, updated_at: Utc::now() },
            )
            .await
            .unwrap();
        assert!(out.is_none());
        assert!(store.query("alice").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_only_the_addressed_key() {
        let store = MemoryStore::new();
        let a = note("alice", "mine");
        let b = note("bob", "theirs");
        store.put(a.clone()).await.unwrap();
        store.put(b.clone()).await.unwrap();

        store.delete("alice", &a.note_id).await.unwrap();
        assert_eq!(store.get("alice", &a.note_id).await.unwrap(), None);
        assert!(store.get("bob", &b.note_id).await.unwrap().is_some());

        // absent key is a no-op
        store.delete("alice", &a.note_id).await.unwrap();
    }
}
