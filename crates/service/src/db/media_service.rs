use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder};
use tracing::info;
use uuid::Uuid;

use models::media::{self, Entity as MediaEntity, MediaChanges, NewMedia};
use crate::errors::ServiceError;

/// All media, newest first. Media has no visibility flag.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<media::Model>, ServiceError> {
    let rows = MediaEntity::find().order_by_desc(media::Column::CreatedAt).all(db).await?;
    Ok(rows)
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> Result<Option<media::Model>, ServiceError> {
    Ok(MediaEntity::find_by_id(id).one(db).await?)
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewMedia) -> Result<media::Model, ServiceError> {
    let created = media::create(db, input).await?;
    info!(id = %created.id, mime_type = %created.mime_type, size = created.size, "media_created");
    Ok(created)
}

pub async fn update(db: &DatabaseConnection, id: Uuid, changes: MediaChanges) -> Result<media::Model, ServiceError> {
    let Some(existing) = MediaEntity::find_by_id(id).one(db).await? else {
        return Err(ServiceError::not_found("media"));
    };
    let mut am: media::ActiveModel = existing.into();
    media::apply_changes(&mut am, changes)?;
    let updated = am.update(db).await?;
    info!(id = %updated.id, "media_updated");
    Ok(updated)
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = MediaEntity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
