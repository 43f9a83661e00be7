use async_trait::async_trait;
use uuid::Uuid;

use super::domain::ContentEntry;
use crate::errors::ServiceError;

/// Persistence seam for page content.
///
/// Implementations must keep `(section, key)` unique and must resolve a
/// concurrent-insert conflict on `upsert` into an update rather than an error.
/// Input is validated by `ContentService` before it reaches a store.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Every entry, ordered by section then key.
    async fn get_all(&self) -> Result<Vec<ContentEntry>, ServiceError>;
    /// Entries of one section ordered by key; empty when the section is unknown.
    async fn get_by_section(&self, section: &str) -> Result<Vec<ContentEntry>, ServiceError>;
    async fn get_by_key(&self, section: &str, key: &str) -> Result<Option<ContentEntry>, ServiceError>;
    async fn upsert(&self, section: &str, key: &str, value: &str) -> Result<ContentEntry, ServiceError>;
    async fn update_by_id(&self, id: Uuid, section: &str, key: &str, value: &str) -> Result<ContentEntry, ServiceError>;
    /// Idempotent; returns whether a row was removed.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// Process-local store used by tests and by `database.url = "memory"`.
pub mod memory {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    type Key = (String, String);

    #[derive(Default)]
    pub struct MemoryContentStore {
        // byte order on (section, key), same as the COLLATE "C" columns in Postgres
        entries: Mutex<BTreeMap<Key, ContentEntry>>,
    }

    impl MemoryContentStore {
        pub fn new() -> Self { Self::default() }

        fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<Key, ContentEntry>>, ServiceError> {
            self.entries
                .lock()
                .map_err(|_| ServiceError::StorageUnavailable("content store lock poisoned".into()))
        }
    }

    #[async_trait]
    impl ContentStore for MemoryContentStore {
        async fn get_all(&self) -> Result<Vec<ContentEntry>, ServiceError> {
            Ok(self.lock()?.values().cloned().collect())
        }

        async fn get_by_section(&self, section: &str) -> Result<Vec<ContentEntry>, ServiceError> {
            let entries = self.lock()?;
            Ok(entries.values().filter(|e| e.section == section).cloned().collect())
        }

        async fn get_by_key(&self, section: &str, key: &str) -> Result<Option<ContentEntry>, ServiceError> {
            let entries = self.lock()?;
            Ok(entries.get(&(section.to_string(), key.to_string())).cloned())
        }

        async fn upsert(&self, section: &str, key: &str, value: &str) -> Result<ContentEntry, ServiceError> {
            let mut entries = self.lock()?;
            let now = Utc::now();
            let entry = entries
                .entry((section.to_string(), key.to_string()))
                .and_modify(|e| {
                    e.value = value.to_string();
                    e.updated_at = now;
                })
                .or_insert_with(|| ContentEntry {
                    id: Uuid::new_v4(),
                    section: section.to_string(),
                    key: key.to_string(),
                    value: value.to_string(),
                    created_at: now,
                    updated_at: now,
                });
            Ok(entry.clone())
        }

        async fn update_by_id(&self, id: Uuid, section: &str, key: &str, value: &str) -> Result<ContentEntry, ServiceError> {
            let mut entries = self.lock()?;
            let old_key = entries
                .iter()
                .find(|(_, e)| e.id == id)
                .map(|(k, _)| k.clone())
                .ok_or_else(|| ServiceError::not_found("page content"))?;
            let new_key = (section.to_string(), key.to_string());
            if new_key != old_key && entries.contains_key(&new_key) {
                return Err(ServiceError::InvalidInput(format!("already exists: {section}/{key}")));
            }
            let mut entry = entries
                .remove(&old_key)
                .ok_or_else(|| ServiceError::not_found("page content"))?;
            entry.section = new_key.0.clone();
            entry.key = new_key.1.clone();
            entry.value = value.to_string();
            entry.updated_at = Utc::now();
            entries.insert(new_key, entry.clone());
            Ok(entry)
        }

        async fn delete_by_id(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut entries = self.lock()?;
            let before = entries.len();
            entries.retain(|_, e| e.id != id);
            Ok(entries.len() < before)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryContentStore;
    use super::*;

    #[tokio::test]
    async fn upsert_updates_in_place() {
        let store = MemoryContentStore::new();
        let first = store.upsert("hero", "title", "Trade Smarter").await.unwrap();
        let second = store.upsert("hero", "title", "Trade Faster").await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.created_at, second.created_at);
        assert_eq!(second.value, "Trade Faster");
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(store.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn listing_is_ordered_by_section_then_key() {
        let store = MemoryContentStore::new();
        store.upsert("hero", "title", "a").await.unwrap();
        store.upsert("about", "title", "b").await.unwrap();
        store.upsert("features", "title", "c").await.unwrap();
        store.upsert("features", "feature_1_title", "d").await.unwrap();

        let pairs: Vec<_> = store
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|e| (e.section, e.key))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("about".to_string(), "title".to_string()),
                ("features".to_string(), "feature_1_title".to_string()),
                ("features".to_string(), "title".to_string()),
                ("hero".to_string(), "title".to_string()),
            ]
        );

        let features = store.get_by_section("features").await.unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].key, "feature_1_title");
        assert!(store.get_by_section("cta").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn keys_sort_by_bytes_not_locale() {
        let store = MemoryContentStore::new();
        for key in ["title", "subtitle", "Title", "_note", "title2"] {
            store.upsert("hero", key, "v").await.unwrap();
        }
        let keys: Vec<_> = store.get_by_section("hero").await.unwrap().into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["Title", "_note", "subtitle", "title", "title2"]);
    }

    #[tokio::test]
    async fn delete_twice_is_fine() {
        let store = MemoryContentStore::new();
        let e = store.upsert("about", "title", "About").await.unwrap();
        assert!(store.delete_by_id(e.id).await.unwrap());
        assert!(!store.delete_by_id(e.id).await.unwrap());
        assert!(store.get_by_key("about", "title").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_by_id_moves_and_guards_uniqueness() {
        let store = MemoryContentStore::new();
        let a = store.upsert("hero", "title", "A").await.unwrap();
        let b = store.upsert("hero", "subtitle", "B").await.unwrap();

        let clash = store.update_by_id(b.id, "hero", "title", "B2").await;
        assert!(matches!(clash, Err(ServiceError::InvalidInput(_))));

        let moved = store.update_by_id(b.id, "hero", "tagline", "B3").await.unwrap();
        assert_eq!(moved.id, b.id);
        assert_eq!(moved.created_at, b.created_at);
        assert!(store.get_by_key("hero", "subtitle").await.unwrap().is_none());
        assert_eq!(store.get_by_key("hero", "tagline").await.unwrap().unwrap().value, "B3");
        assert_eq!(store.get_by_key("hero", "title").await.unwrap().unwrap().id, a.id);

        let missing = store.update_by_id(Uuid::new_v4(), "hero", "x", "y").await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));
    }
}
