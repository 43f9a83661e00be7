use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;

use service::content::repo::seaorm::SeaOrmContentStore;
use service::content::repository::memory::MemoryContentStore;
use service::content::{ContentService, ContentStore};
use service::errors::ServiceError;

/// Shared handler state. `db` is `None` when page content runs in memory;
/// the domain endpoints then answer 503.
#[derive(Clone)]
pub struct ServerState {
    pub db: Option<DatabaseConnection>,
    pub content: ContentService<dyn ContentStore>,
}

impl ServerState {
    pub fn with_database(db: DatabaseConnection, storage_timeout: Duration) -> Self {
        let store: Arc<dyn ContentStore> = Arc::new(SeaOrmContentStore::new(db.clone()));
        Self { db: Some(db), content: ContentService::new(store).with_timeout(storage_timeout) }
    }

    pub fn in_memory(storage_timeout: Duration) -> Self {
        let store: Arc<dyn ContentStore> = Arc::new(MemoryContentStore::new());
        Self { db: None, content: ContentService::new(store).with_timeout(storage_timeout) }
    }

    pub fn db(&self) -> Result<&DatabaseConnection, ServiceError> {
        self.db
            .as_ref()
            .ok_or_else(|| ServiceError::StorageUnavailable("no database configured".into()))
    }
}
