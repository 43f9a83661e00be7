//! Create `stocks` table.
//!
//! Ticker cards on the landing page; `symbol` is unique.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stocks::Table)
                    .if_not_exists()
                    .col(uuid(Stocks::Id).primary_key())
                    .col(string_len(Stocks::Symbol, 10).unique_key().not_null())
                    .col(text(Stocks::Name).not_null())
                    .col(decimal_len(Stocks::Price, 10, 2).not_null())
                    .col(decimal_len(Stocks::Change, 10, 2).not_null())
                    .col(decimal_len(Stocks::ChangePercent, 5, 2).not_null())
                    .col(integer(Stocks::Volume).not_null().default(0))
                    .col(text_null(Stocks::MarketCap))
                    .col(text_null(Stocks::Sector))
                    .col(boolean(Stocks::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(Stocks::CreatedAt).not_null().default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Stocks::UpdatedAt).not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Stocks::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Stocks {
    Table,
    Id,
    Symbol,
    Name,
    Price,
    Change,
    ChangePercent,
    Volume,
    MarketCap,
    Sector,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
