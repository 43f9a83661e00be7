//! Create `media` table.
//!
//! Image library entries; `url` may be a remote URL or an inline data URL.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(uuid(Media::Id).primary_key())
                    .col(string_len(Media::Filename, 255).not_null())
                    .col(string_len(Media::OriginalName, 255).not_null())
                    .col(string_len(Media::MimeType, 100).not_null())
                    .col(integer(Media::Size).not_null())
                    .col(text(Media::Url).not_null())
                    .col(string_len_null(Media::AltText, 255))
                    .col(timestamp_with_time_zone(Media::CreatedAt).not_null().default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Media::UpdatedAt).not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Media::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Media {
    Table,
    Id,
    Filename,
    OriginalName,
    MimeType,
    Size,
    Url,
    AltText,
    CreatedAt,
    UpdatedAt,
}
