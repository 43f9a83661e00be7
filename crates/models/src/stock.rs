use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{self, ModelError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stocks")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub symbol: String,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub change: Decimal,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub change_percent: Decimal,
    pub volume: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub market_cap: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub sector: Option<String>,
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

/// Create payload; mirrors the admin form.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStock {
    pub symbol: String,
    pub name: String,
    pub price: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
    #[serde(default)]
    pub volume: i32,
    #[serde(default)]
    pub market_cap: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Partial update; absent fields are left untouched.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockChanges {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub change: Option<Decimal>,
    pub change_percent: Option<Decimal>,
    pub volume: Option<i32>,
    pub market_cap: Option<String>,
    pub sector: Option<String>,
    pub is_active: Option<bool>,
}

fn default_active() -> bool { true }

/// Upper-cases and checks a ticker symbol (`BRK.B`, `RDS-A` are fine).
pub fn normalize_symbol(s: &str) -> Result<String, ModelError> {
    let s = s.trim();
    errors::require("symbol", s, 10)?;
    if !s.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-') {
        return Err(ModelError::Validation("symbol may only contain letters, digits, '.' and '-'".into()));
    }
    Ok(s.to_ascii_uppercase())
}

pub fn validate_volume(v: i32) -> Result<(), ModelError> {
    if v < 0 {
        return Err(ModelError::Validation("volume must be >= 0".into()));
    }
    Ok(())
}

/// Checks `v` fits a `numeric(precision, scale)` column once rounded to
/// `scale` places, the way Postgres stores it.
pub fn validate_decimal(field: &str, v: Decimal, precision: u32, scale: u32) -> Result<(), ModelError> {
    let limit = Decimal::from(10u64.pow(precision - scale));
    if v.round_dp(scale).abs() >= limit {
        return Err(ModelError::Validation(format!(
            "{field} must be less than {limit} in absolute value"
        )));
    }
    Ok(())
}

fn validate_price(v: Decimal) -> Result<(), ModelError> { validate_decimal("price", v, 10, 2) }
fn validate_change(v: Decimal) -> Result<(), ModelError> { validate_decimal("change", v, 10, 2) }
fn validate_change_percent(v: Decimal) -> Result<(), ModelError> { validate_decimal("changePercent", v, 5, 2) }

pub async fn create<C: ConnectionTrait>(db: &C, input: NewStock) -> Result<Model, ModelError> {
    let symbol = normalize_symbol(&input.symbol)?;
    errors::require("name", &input.name, usize::MAX)?;
    validate_price(input.price)?;
    validate_change(input.change)?;
    validate_change_percent(input.change_percent)?;
    validate_volume(input.volume)?;

    let now: DateTimeWithTimeZone = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        symbol: Set(symbol),
        name: Set(input.name),
        price: Set(input.price),
        change: Set(input.change),
        change_percent: Set(input.change_percent),
        volume: Set(input.volume),
        market_cap: Set(input.market_cap),
        sector: Set(input.sector),
        is_active: Set(input.is_active),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

/// Validate `changes` and fold them into `am`. Touches `updated_at`.
pub fn apply_changes(am: &mut ActiveModel, changes: StockChanges) -> Result<(), ModelError> {
    if let Some(s) = changes.symbol { am.symbol = Set(normalize_symbol(&s)?); }
    if let Some(n) = changes.name {
        errors::require("name", &n, usize::MAX)?;
        am.name = Set(n);
    }
    if let Some(p) = changes.price {
        validate_price(p)?;
        am.price = Set(p);
    }
    if let Some(c) = changes.change {
        validate_change(c)?;
        am.change = Set(c);
    }
    if let Some(c) = changes.change_percent {
        validate_change_percent(c)?;
        am.change_percent = Set(c);
    }
    if let Some(v) = changes.volume {
        validate_volume(v)?;
        am.volume = Set(v);
    }
    if let Some(m) = changes.market_cap { am.market_cap = Set(Some(m)); }
    if let Some(s) = changes.sector { am.sector = Set(Some(s)); }
    if let Some(b) = changes.is_active { am.is_active = Set(b); }
    am.updated_at = Set(Utc::now().into());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_is_uppercased() {
        assert_eq!(normalize_symbol(" aapl ").unwrap(), "AAPL");
        assert_eq!(normalize_symbol("brk.b").unwrap(), "BRK.B");
    }

    #[test]
    fn bad_symbols_are_rejected() {
        assert!(normalize_symbol("").is_err());
        assert!(normalize_symbol("TOOLONGSYMBOL").is_err());
        assert!(normalize_symbol("A$PL").is_err());
    }

    #[test]
    fn negative_volume_is_rejected() {
        assert!(validate_volume(-1).is_err());
        assert!(validate_volume(0).is_ok());
    }

    #[test]
    fn decimals_must_fit_their_columns() {
        assert!(validate_change_percent(Decimal::new(99999, 2)).is_ok());
        assert!(validate_change_percent(Decimal::new(-99999, 2)).is_ok());
        assert!(validate_change_percent(Decimal::from(1000)).is_err());
        assert!(validate_price(Decimal::new(9999999999, 2)).is_ok());
        assert!(validate_price(Decimal::from(100_000_000)).is_err());
        // rounds up past the limit once stored at two places
        assert!(validate_price(Decimal::new(99999999999, 3)).is_err());
    }

    #[test]
    fn out_of_range_changes_are_rejected() {
        let mut am = <ActiveModel as std::default::Default>::default();
        let changes = StockChanges { change_percent: Some(Decimal::from(1000)), ..Default::default() };
        let err = apply_changes(&mut am, changes).unwrap_err();
        assert!(matches!(err, ModelError::Validation(ref m) if m.starts_with("changePercent")));

        let changes = StockChanges { price: Some(Decimal::new(48509, 2)), ..Default::default() };
        assert!(apply_changes(&mut am, changes).is_ok());
    }

    #[test]
    fn new_stock_defaults_from_json() {
        let s: NewStock = serde_json::from_str(
            r#"{"symbol":"NVDA","name":"NVIDIA Corporation","price":"485.09","change":"12.45","changePercent":"2.63"}"#,
        )
        .unwrap();
        assert!(s.is_active);
        assert_eq!(s.volume, 0);
        assert_eq!(s.price, Decimal::new(48509, 2));
    }
}
