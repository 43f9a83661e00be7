use sea_orm::DatabaseConnection;
use uuid::Uuid;

use models::page_content;

use crate::content::domain::ContentEntry;
use crate::content::repository::ContentStore;
use crate::errors::ServiceError;

/// Postgres-backed content store; uniqueness comes from
/// `uniq_page_content_section_key`.
pub struct SeaOrmContentStore {
    pub db: DatabaseConnection,
}

impl SeaOrmContentStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl ContentStore for SeaOrmContentStore {
    async fn get_all(&self) -> Result<Vec<ContentEntry>, ServiceError> {
        let rows = page_content::find_all(&self.db).await?;
        Ok(rows.into_iter().map(ContentEntry::from).collect())
    }

    async fn get_by_section(&self, section: &str) -> Result<Vec<ContentEntry>, ServiceError> {
        let rows = page_content::find_by_section(&self.db, section).await?;
        Ok(rows.into_iter().map(ContentEntry::from).collect())
    }

    async fn get_by_key(&self, section: &str, key: &str) -> Result<Option<ContentEntry>, ServiceError> {
        let row = page_content::find_by_key(&self.db, section, key).await?;
        Ok(row.map(ContentEntry::from))
    }

    async fn upsert(&self, section: &str, key: &str, value: &str) -> Result<ContentEntry, ServiceError> {
        let row = page_content::upsert(&self.db, section, key, value).await?;
        Ok(row.into())
    }

    async fn update_by_id(&self, id: Uuid, section: &str, key: &str, value: &str) -> Result<ContentEntry, ServiceError> {
        let row = page_content::update_by_id(&self.db, id, section, key, value).await?;
        Ok(row.into())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, ServiceError> {
        let removed = page_content::delete_by_id(&self.db, id).await?;
        Ok(removed > 0)
    }
}
