//! Create `news_articles` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsArticles::Table)
                    .if_not_exists()
                    .col(uuid(NewsArticles::Id).primary_key())
                    .col(text(NewsArticles::Title).not_null())
                    .col(text(NewsArticles::Excerpt).not_null())
                    .col(text(NewsArticles::Content).not_null())
                    .col(text_null(NewsArticles::ImageUrl))
                    .col(string_len(NewsArticles::Category, 50).not_null())
                    .col(text(NewsArticles::Author).not_null())
                    .col(timestamp_with_time_zone(NewsArticles::PublishedAt).not_null())
                    .col(boolean(NewsArticles::IsPublished).not_null().default(true))
                    .col(timestamp_with_time_zone(NewsArticles::CreatedAt).not_null().default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(NewsArticles::UpdatedAt).not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(NewsArticles::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum NewsArticles {
    Table,
    Id,
    Title,
    Excerpt,
    Content,
    ImageUrl,
    Category,
    Author,
    PublishedAt,
    IsPublished,
    CreatedAt,
    UpdatedAt,
}
