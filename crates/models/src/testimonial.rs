use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "testimonials")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub role: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub company: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub rating: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub company: Option<String>,
    pub content: String,
    #[serde(default = "default_rating")]
    pub rating: i32,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialChanges {
    pub name: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i32>,
    pub avatar_url: Option<String>,
    pub is_active: Option<bool>,
}

fn default_rating() -> i32 { 5 }
fn default_active() -> bool { true }

pub fn validate_rating(r: i32) -> Result<(), ModelError> {
    if !(1..=5).contains(&r) {
        return Err(ModelError::Validation("rating must be between 1 and 5".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewTestimonial) -> Result<Model, ModelError> {
    errors::require("name", &input.name, usize::MAX)?;
    errors::require("role", &input.role, usize::MAX)?;
    errors::require("content", &input.content, usize::MAX)?;
    validate_rating(input.rating)?;

    let now: DateTimeWithTimeZone = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        role: Set(input.role),
        company: Set(input.company),
        content: Set(input.content),
        rating: Set(input.rating),
        avatar_url: Set(input.avatar_url),
        is_active: Set(input.is_active),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

pub fn apply_changes(am: &mut ActiveModel, changes: TestimonialChanges) -> Result<(), ModelError> {
    if let Some(n) = changes.name {
        errors::require("name", &n, usize::MAX)?;
        am.name = Set(n);
    }
    if let Some(r) = changes.role {
        errors::require("role", &r, usize::MAX)?;
        am.role = Set(r);
    }
    if let Some(c) = changes.company { am.company = Set(Some(c)); }
    if let Some(c) = changes.content {
        errors::require("content", &c, usize::MAX)?;
        am.content = Set(c);
    }
    if let Some(r) = changes.rating {
        validate_rating(r)?;
        am.rating = Set(r);
    }
    if let Some(u) = changes.avatar_url { am.avatar_url = Set(Some(u)); }
    if let Some(b) = changes.is_active { am.is_active = Set(b); }
    am.updated_at = Set(Utc::now().into());
    Ok(())
}
