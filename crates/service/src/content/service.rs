use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use models::page_content;

use super::domain::{ContentEntry, ContentInput};
use super::repository::ContentStore;
use super::resolver::ContentSnapshot;
use crate::errors::ServiceError;

pub const DEFAULT_STORAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Content operations independent of the web framework.
///
/// Input is validated before the store is reached and every store call is
/// bounded by `timeout`; an elapsed call is reported as `StorageUnavailable`.
pub struct ContentService<S: ContentStore + ?Sized> {
    store: Arc<S>,
    timeout: Duration,
}

impl<S: ContentStore + ?Sized> Clone for ContentService<S> {
    fn clone(&self) -> Self { Self { store: self.store.clone(), timeout: self.timeout } }
}

impl<S: ContentStore + ?Sized> ContentService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store, timeout: DEFAULT_STORAGE_TIMEOUT } }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn bounded<T, F>(&self, op: &'static str, fut: F) -> Result<T, ServiceError>
    where
        F: Future<Output = Result<T, ServiceError>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(res) => {
                if let Err(e) = &res {
                    if e.is_retryable() {
                        warn!(op, error = %e, "content store call failed");
                    }
                }
                res
            }
            Err(_) => {
                warn!(op, timeout_ms = self.timeout.as_millis() as u64, "content store call timed out");
                Err(ServiceError::StorageUnavailable(format!("{op} timed out")))
            }
        }
    }

    /// Every entry, ordered by section then key.
    ///
    /// # Examples
    /// ```
    /// use service::content::{ContentService, repository::memory::MemoryContentStore};
    /// use std::sync::Arc;
    /// let svc = ContentService::new(Arc::new(MemoryContentStore::new()));
    /// let all = tokio_test::block_on(svc.get_all()).unwrap();
    /// assert!(all.is_empty());
    /// ```
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<ContentEntry>, ServiceError> {
        let rows = self.bounded("get_all", self.store.get_all()).await?;
        debug!(count = rows.len(), "content listed");
        Ok(rows)
    }

    #[instrument(skip(self))]
    pub async fn get_by_section(&self, section: &str) -> Result<Vec<ContentEntry>, ServiceError> {
        page_content::validate_section(section)?;
        self.bounded("get_by_section", self.store.get_by_section(section)).await
    }

    #[instrument(skip(self))]
    pub async fn get_by_key(&self, section: &str, key: &str) -> Result<Option<ContentEntry>, ServiceError> {
        page_content::validate_section(section)?;
        page_content::validate_key(key)?;
        self.bounded("get_by_key", self.store.get_by_key(section, key)).await
    }

    /// Insert or overwrite the value stored under `(section, key)`.
    ///
    /// # Examples
    /// ```
    /// use service::content::{ContentService, ContentInput, repository::memory::MemoryContentStore};
    /// use std::sync::Arc;
    /// let svc = ContentService::new(Arc::new(MemoryContentStore::new()));
    /// let a = tokio_test::block_on(svc.upsert(ContentInput::new("hero", "title", "Trade Smarter"))).unwrap();
    /// let b = tokio_test::block_on(svc.upsert(ContentInput::new("hero", "title", "Trade Faster"))).unwrap();
    /// assert_eq!(a.id, b.id);
    /// assert_eq!(b.value, "Trade Faster");
    /// ```
    #[instrument(skip(self, input), fields(section = %input.section, key = %input.key))]
    pub async fn upsert(&self, input: ContentInput) -> Result<ContentEntry, ServiceError> {
        page_content::validate_entry(&input.section, &input.key, &input.value)?;
        let entry = self
            .bounded("upsert", self.store.upsert(&input.section, &input.key, &input.value))
            .await?;
        info!(id = %entry.id, "content_upserted");
        Ok(entry)
    }

    #[instrument(skip(self, input), fields(section = %input.section, key = %input.key))]
    pub async fn update_by_id(&self, id: Uuid, input: ContentInput) -> Result<ContentEntry, ServiceError> {
        page_content::validate_entry(&input.section, &input.key, &input.value)?;
        let entry = self
            .bounded("update_by_id", self.store.update_by_id(id, &input.section, &input.key, &input.value))
            .await?;
        info!(id = %entry.id, "content_updated");
        Ok(entry)
    }

    /// Idempotent; `Ok(false)` when nothing matched `id`.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool, ServiceError> {
        let removed = self.bounded("delete_by_id", self.store.delete_by_id(id)).await?;
        info!(%id, removed, "content_deleted");
        Ok(removed)
    }

    /// Load everything for fallback-aware rendering. A failed load yields a
    /// pending snapshot so every lookup falls back to its default.
    pub async fn snapshot(&self) -> ContentSnapshot {
        match self.get_all().await {
            Ok(entries) => ContentSnapshot::loaded(entries),
            Err(e) => {
                warn!(error = %e, "content snapshot unavailable, using defaults");
                ContentSnapshot::pending()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::repository::memory::MemoryContentStore;
    use async_trait::async_trait;

    fn svc() -> ContentService<MemoryContentStore> { ContentService::new(Arc::new(MemoryContentStore::new())) }

    /// Store that never answers in time.
    struct StalledStore;

    #[async_trait]
    impl ContentStore for StalledStore {
        async fn get_all(&self) -> Result<Vec<ContentEntry>, ServiceError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(vec![])
        }
        async fn get_by_section(&self, _: &str) -> Result<Vec<ContentEntry>, ServiceError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(vec![])
        }
        async fn get_by_key(&self, _: &str, _: &str) -> Result<Option<ContentEntry>, ServiceError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(None)
        }
        async fn upsert(&self, _: &str, _: &str, _: &str) -> Result<ContentEntry, ServiceError> {
            Err(ServiceError::StorageUnavailable("down".into()))
        }
        async fn update_by_id(&self, _: Uuid, _: &str, _: &str, _: &str) -> Result<ContentEntry, ServiceError> {
            Err(ServiceError::StorageUnavailable("down".into()))
        }
        async fn delete_by_id(&self, _: Uuid) -> Result<bool, ServiceError> {
            Err(ServiceError::StorageUnavailable("down".into()))
        }
    }

    #[tokio::test]
    async fn empty_value_never_reaches_store() {
        let s = svc();
        let err = s.upsert(ContentInput::new("hero", "title", "")).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
        assert!(s.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_section_is_invalid_on_read() {
        let err = svc().get_by_section("  ").await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let err = svc()
            .update_by_id(Uuid::new_v4(), ContentInput::new("hero", "title", "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let s = svc();
        let e = s.upsert(ContentInput::new("about", "title", "About Our Platform")).await.unwrap();
        assert!(s.delete_by_id(e.id).await.unwrap());
        assert!(!s.delete_by_id(e.id).await.unwrap());
        assert!(!s.delete_by_id(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn concurrent_upserts_leave_one_row() {
        let s = svc();
        let mut handles = Vec::new();
        for i in 0..8 {
            let s = s.clone();
            handles.push(tokio::spawn(async move {
                s.upsert(ContentInput::new("hero", "title", format!("v{i}"))).await
            }));
        }
        for h in handles {
            h.await.unwrap().unwrap();
        }
        let all = s.get_by_section("hero").await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].value.starts_with('v'));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_store_times_out_as_unavailable() {
        let s = ContentService::new(Arc::new(StalledStore)).with_timeout(Duration::from_millis(50));
        let err = s.get_all().await.unwrap_err();
        assert!(matches!(err, ServiceError::StorageUnavailable(_)));
        assert!(err.is_retryable());
    }

    #[tokio::test(start_paused = true)]
    async fn snapshot_degrades_to_fallbacks() {
        let store: Arc<dyn ContentStore> = Arc::new(StalledStore);
        let s = ContentService::new(store).with_timeout(Duration::from_millis(50));
        let snap = s.snapshot().await;
        assert!(!snap.is_loaded());
        assert_eq!(snap.get("hero", "title", "Trade Smarter with Real-Time Data"), "Trade Smarter with Real-Time Data");
    }

    #[tokio::test]
    async fn snapshot_reflects_store() {
        let s = svc();
        s.upsert(ContentInput::new("hero", "title", "Custom")).await.unwrap();
        let snap = s.snapshot().await;
        assert_eq!(snap.get("hero", "title", "Default"), "Custom");
        assert_eq!(snap.get("hero", "subtitle", "Default"), "Default");
    }
}
