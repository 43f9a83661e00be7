use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "media")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i32,
    #[sea_orm(column_type = "Text")]
    pub url: String,
    #[sea_orm(nullable)]
    pub alt_text: Option<String>,
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
pub struct NewMedia {
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i32,
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaChanges {
    pub filename: Option<String>,
    pub original_name: Option<String>,
    pub mime_type: Option<String>,
    pub size: Option<i32>,
    pub url: Option<String>,
    pub alt_text: Option<String>,
}

pub fn validate_mime_type(m: &str) -> Result<(), ModelError> {
    errors::require("mimeType", m, 100)?;
    match m.split_once('/') {
        Some((kind, sub)) if !kind.is_empty() && !sub.is_empty() => Ok(()),
        _ => Err(ModelError::Validation("mimeType must look like type/subtype".into())),
    }
}

pub fn validate_size(size: i32) -> Result<(), ModelError> {
    if size < 0 {
        return Err(ModelError::Validation("size must be >= 0".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewMedia) -> Result<Model, ModelError> {
    errors::require("filename", &input.filename, 255)?;
    errors::require("originalName", &input.original_name, 255)?;
    errors::require("url", &input.url, usize::MAX)?;
    validate_mime_type(&input.mime_type)?;
    validate_size(input.size)?;
    if let Some(alt) = &input.alt_text {
        if alt.chars().count() > 255 {
            return Err(ModelError::Validation("altText must be at most 255 characters".into()));
        }
    }

    let now: DateTimeWithTimeZone = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        filename: Set(input.filename),
        original_name: Set(input.original_name),
        mime_type: Set(input.mime_type),
        size: Set(input.size),
        url: Set(input.url),
        alt_text: Set(input.alt_text),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

pub fn apply_changes(am: &mut ActiveModel, changes: MediaChanges) -> Result<(), ModelError> {
    if let Some(f) = changes.filename {
        errors::require("filename", &f, 255)?;
        am.filename = Set(f);
    }
    if let Some(o) = changes.original_name {
        errors::require("originalName", &o, 255)?;
        am.original_name = Set(o);
    }
    if let Some(m) = changes.mime_type {
        validate_mime_type(&m)?;
        am.mime_type = Set(m);
    }
    if let Some(s) = changes.size {
        validate_size(s)?;
        am.size = Set(s);
    }
    if let Some(u) = changes.url {
        errors::require("url", &u, usize::MAX)?;
        am.url = Set(u);
    }
    if let Some(a) = changes.alt_text { am.alt_text = Set(Some(a)); }
    am.updated_at = Set(Utc::now().into());
    Ok(())
}
