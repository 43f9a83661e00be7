use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};

pub const CATEGORY_MAX_LEN: usize = 50;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "news_articles")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub excerpt: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub author: String,
    pub published_at: DateTimeWithTimeZone,
    pub is_published: bool,
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
pub struct NewArticle {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category: String,
    pub author: String,
    /// Defaults to now.
    #[serde(default)]
    pub published_at: Option<DateTimeWithTimeZone>,
    #[serde(default = "default_published")]
    pub is_published: bool,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleChanges {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<DateTimeWithTimeZone>,
    pub is_published: Option<bool>,
}

fn default_published() -> bool { true }

pub fn validate_category(c: &str) -> Result<(), ModelError> {
    errors::require("category", c, CATEGORY_MAX_LEN)
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewArticle) -> Result<Model, ModelError> {
    errors::require("title", &input.title, usize::MAX)?;
    errors::require("excerpt", &input.excerpt, usize::MAX)?;
    errors::require("content", &input.content, usize::MAX)?;
    errors::require("author", &input.author, usize::MAX)?;
    validate_category(&input.category)?;

    let now: DateTimeWithTimeZone = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        excerpt: Set(input.excerpt),
        content: Set(input.content),
        image_url: Set(input.image_url),
        category: Set(input.category),
        author: Set(input.author),
        published_at: Set(input.published_at.unwrap_or(now)),
        is_published: Set(input.is_published),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

pub fn apply_changes(am: &mut ActiveModel, changes: ArticleChanges) -> Result<(), ModelError> {
    if let Some(t) = changes.title {
        errors::require("title", &t, usize::MAX)?;
        am.title = Set(t);
    }
    if let Some(e) = changes.excerpt {
        errors::require("excerpt", &e, usize::MAX)?;
        am.excerpt = Set(e);
    }
    if let Some(c) = changes.content {
        errors::require("content", &c, usize::MAX)?;
        am.content = Set(c);
    }
    if let Some(u) = changes.image_url { am.image_url = Set(Some(u)); }
    if let Some(c) = changes.category {
        validate_category(&c)?;
        am.category = Set(c);
    }
    if let Some(a) = changes.author {
        errors::require("author", &a, usize::MAX)?;
        am.author = Set(a);
    }
    if let Some(p) = changes.published_at { am.published_at = Set(p); }
    if let Some(b) = changes.is_published { am.is_published = Set(b); }
    am.updated_at = Set(Utc::now().into());
    Ok(())
}
