use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use tracing::info;
use uuid::Uuid;

use models::stock::{self, Entity as StockEntity, NewStock, StockChanges};
use crate::errors::ServiceError;

/// All stocks, most recently updated first.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<stock::Model>, ServiceError> {
    let rows = StockEntity::find().order_by_desc(stock::Column::UpdatedAt).all(db).await?;
    Ok(rows)
}

/// Active stocks, most recently updated first; `limit` caps the count.
pub async fn list_visible(db: &DatabaseConnection, limit: Option<u64>) -> Result<Vec<stock::Model>, ServiceError> {
    let rows = StockEntity::find()
        .filter(stock::Column::IsActive.eq(true))
        .order_by_desc(stock::Column::UpdatedAt)
        .limit(limit)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> Result<Option<stock::Model>, ServiceError> {
    Ok(StockEntity::find_by_id(id).one(db).await?)
}

/// Create a stock; a taken symbol is reported as invalid input.
pub async fn create<C: ConnectionTrait>(db: &C, input: NewStock) -> Result<stock::Model, ServiceError> {
    let created = stock::create(db, input).await?;
    info!(id = %created.id, symbol = %created.symbol, "stock_created");
    Ok(created)
}

pub async fn update(db: &DatabaseConnection, id: Uuid, changes: StockChanges) -> Result<stock::Model, ServiceError> {
    let Some(existing) = StockEntity::find_by_id(id).one(db).await? else {
        return Err(ServiceError::not_found("stock"));
    };
    let mut am: stock::ActiveModel = existing.into();
    stock::apply_changes(&mut am, changes)?;
    let updated = am.update(db).await?;
    info!(id = %updated.id, "stock_updated");
    Ok(updated)
}

/// Delete a stock; returns true if a row was removed.
pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = StockEntity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
