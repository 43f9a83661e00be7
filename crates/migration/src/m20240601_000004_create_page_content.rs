//! Create `page_content` table.
//!
//! Keyed copy overrides for the landing page. At most one row per
//! `(section, key)`; the unique index is what upserts conflict on.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PageContent::Table)
                    .if_not_exists()
                    .col(uuid(PageContent::Id).primary_key())
                    .col(string_len(PageContent::Section, 100).not_null().extra("COLLATE \"C\""))
                    .col(string_len(PageContent::Key, 100).not_null().extra("COLLATE \"C\""))
                    .col(text(PageContent::Value).not_null())
                    .col(timestamp_with_time_zone(PageContent::CreatedAt).not_null().default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(PageContent::UpdatedAt).not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uniq_page_content_section_key")
                    .table(PageContent::Table)
                    .col(PageContent::Section)
                    .col(PageContent::Key)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PageContent::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PageContent {
    Table,
    Id,
    Section,
    Key,
    Value,
    CreatedAt,
    UpdatedAt,
}
