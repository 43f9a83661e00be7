use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use tracing::info;
use uuid::Uuid;

use models::testimonial::{self, Entity as TestimonialEntity, NewTestimonial, TestimonialChanges};
use crate::errors::ServiceError;

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<testimonial::Model>, ServiceError> {
    let rows = TestimonialEntity::find().order_by_desc(testimonial::Column::CreatedAt).all(db).await?;
    Ok(rows)
}

/// Active testimonials, newest first.
pub async fn list_visible(db: &DatabaseConnection, limit: Option<u64>) -> Result<Vec<testimonial::Model>, ServiceError> {
    let rows = TestimonialEntity::find()
        .filter(testimonial::Column::IsActive.eq(true))
        .order_by_desc(testimonial::Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn get(db: &DatabaseConnection, id: Uuid) -> Result<Option<testimonial::Model>, ServiceError> {
    Ok(TestimonialEntity::find_by_id(id).one(db).await?)
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewTestimonial) -> Result<testimonial::Model, ServiceError> {
    let created = testimonial::create(db, input).await?;
    info!(id = %created.id, rating = created.rating, "testimonial_created");
    Ok(created)
}

pub async fn update(db: &DatabaseConnection, id: Uuid, changes: TestimonialChanges) -> Result<testimonial::Model, ServiceError> {
    let Some(existing) = TestimonialEntity::find_by_id(id).one(db).await? else {
        return Err(ServiceError::not_found("testimonial"));
    };
    let mut am: testimonial::ActiveModel = existing.into();
    testimonial::apply_changes(&mut am, changes)?;
    let updated = am.update(db).await?;
    info!(id = %updated.id, "testimonial_updated");
    Ok(updated)
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = TestimonialEntity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
