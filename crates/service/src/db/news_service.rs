use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use tracing::info;
use uuid::Uuid;

use models::news_article::{self, ArticleChanges, Entity as ArticleEntity, NewArticle};
use crate::errors::ServiceError;

/// All articles, newest `published_at` first.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<news_article::Model>, ServiceError> {
    let rows = ArticleEntity::find().order_by_desc(news_article::Column::PublishedAt).all(db).await?;
    Ok(rows)
}

/// Published articles, newest first.
pub async fn list_visible(db: &DatabaseConnection, limit: Option<u64>) -> Result<Vec<news_article::Model>, ServiceError> {
    let rows = ArticleEntity::find()
        .filter(news_article::Column::IsPublished.eq(true))
        .order_by_desc(news_article::Column::PublishedAt)
        .limit(limit)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> Result<Option<news_article::Model>, ServiceError> {
    Ok(ArticleEntity::find_by_id(id).one(db).await?)
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewArticle) -> Result<news_article::Model, ServiceError> {
    let created = news_article::create(db, input).await?;
    info!(id = %created.id, category = %created.category, "article_created");
    Ok(created)
}

pub async fn update(db: &DatabaseConnection, id: Uuid, changes: ArticleChanges) -> Result<news_article::Model, ServiceError> {
    let Some(existing) = ArticleEntity::find_by_id(id).one(db).await? else {
        return Err(ServiceError::not_found("news article"));
    };
    let mut am: news_article::ActiveModel = existing.into();
    news_article::apply_changes(&mut am, changes)?;
    let updated = am.update(db).await?;
    info!(id = %updated.id, "article_updated");
    Ok(updated)
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = ArticleEntity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
