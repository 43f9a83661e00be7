//! `page_content`: keyed copy overrides for landing-page sections.
//!
//! `(section, key)` is unique. Writes go through [`upsert`], which leans on the
//! unique index instead of a read-then-write so that concurrent writers of
//! the same pair converge on one row.

use chrono::Utc;
use sea_orm::{
    entity::prelude::*, sea_query::OnConflict, DatabaseConnection, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};

pub const SECTION_MAX_LEN: usize = 100;
pub const KEY_MAX_LEN: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "page_content")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub section: String,
    pub key: String,
    #[sea_orm(column_type = "Text")]
    pub value: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_section(section: &str) -> Result<(), ModelError> {
    errors::require("section", section, SECTION_MAX_LEN)
}

pub fn validate_key(key: &str) -> Result<(), ModelError> {
    errors::require("key", key, KEY_MAX_LEN)
}

pub fn validate_value(value: &str) -> Result<(), ModelError> {
    if value.is_empty() {
        return Err(ModelError::Validation("value required".into()));
    }
    Ok(())
}

pub fn validate_entry(section: &str, key: &str, value: &str) -> Result<(), ModelError> {
    validate_section(section)?;
    validate_key(key)?;
    validate_value(value)
}

/// All entries ordered by section, then key.
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find()
        .order_by_asc(Column::Section)
        .order_by_asc(Column::Key)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn find_by_section(db: &DatabaseConnection, section: &str) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find()
        .filter(Column::Section.eq(section))
        .order_by_asc(Column::Key)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn find_by_key(db: &DatabaseConnection, section: &str, key: &str) -> Result<Option<Model>, ModelError> {
    let row = Entity::find()
        .filter(Column::Section.eq(section))
        .filter(Column::Key.eq(key))
        .one(db)
        .await?;
    Ok(row)
}

/// Insert the pair or overwrite its value.
///
/// `INSERT .. ON CONFLICT (section, key) DO UPDATE` keeps `id` and
/// `created_at` of the surviving row. A unique violation can still surface if
/// the index is briefly missing or replaced; that case is retried as a plain
/// update by `(section, key)`.
pub async fn upsert(db: &DatabaseConnection, section: &str, key: &str, value: &str) -> Result<Model, ModelError> {
    validate_entry(section, key, value)?;
    let now: DateTimeWithTimeZone = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        section: Set(section.to_string()),
        key: Set(key.to_string()),
        value: Set(value.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let written = Entity::insert(am)
        .on_conflict(
            OnConflict::columns([Column::Section, Column::Key])
                .update_columns([Column::Value, Column::UpdatedAt])
                .to_owned(),
        )
        .exec_with_returning(db)
        .await
        .map_err(ModelError::from);

    match written {
        Err(ModelError::UniqueViolation(_)) => update_value(db, section, key, value).await,
        other => other,
    }
}

async fn update_value(db: &DatabaseConnection, section: &str, key: &str, value: &str) -> Result<Model, ModelError> {
    let mut am: ActiveModel = find_by_key(db, section, key)
        .await?
        .ok_or_else(|| ModelError::NotFound(format!("page_content {section}/{key}")))?
        .into();
    am.value = Set(value.to_string());
    am.updated_at = Set(Utc::now().into());
    Ok(am.update(db).await?)
}

/// Rewrite all three fields of the entry with `id`.
pub async fn update_by_id(
    db: &DatabaseConnection,
    id: Uuid,
    section: &str,
    key: &str,
    value: &str,
) -> Result<Model, ModelError> {
    validate_entry(section, key, value)?;
    let mut am: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ModelError::NotFound(format!("page_content {id}")))?
        .into();
    am.section = Set(section.to_string());
    am.key = Set(key.to_string());
    am.value = Set(value.to_string());
    am.updated_at = Set(Utc::now().into());
    Ok(am.update(db).await?)
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_is_rejected() {
        assert!(matches!(validate_entry("hero", "title", ""), Err(ModelError::Validation(_))));
    }

    #[test]
    fn whitespace_value_is_kept() {
        assert!(validate_entry("hero", "title", " ").is_ok());
    }

    #[test]
    fn blank_section_or_key_is_rejected() {
        assert!(validate_entry(" ", "title", "x").is_err());
        assert!(validate_entry("hero", "", "x").is_err());
    }

    #[test]
    fn overlong_key_is_rejected() {
        let key = "k".repeat(KEY_MAX_LEN + 1);
        assert!(validate_entry("hero", &key, "x").is_err());
        assert!(validate_entry("hero", &"k".repeat(KEY_MAX_LEN), "x").is_ok());
    }
}
