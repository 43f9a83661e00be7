use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Public stock list: filter on is_active, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_stocks_active_updated")
                    .table(Stocks::Table)
                    .col(Stocks::IsActive)
                    .col(Stocks::UpdatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Public news feed: filter on is_published, ordered by published_at
        manager
            .create_index(
                Index::create()
                    .name("idx_news_published_at")
                    .table(NewsArticles::Table)
                    .col(NewsArticles::IsPublished)
                    .col(NewsArticles::PublishedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_testimonials_active_created")
                    .table(Testimonials::Table)
                    .col(Testimonials::IsActive)
                    .col(Testimonials::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_testimonials_active_created").table(Testimonials::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_news_published_at").table(NewsArticles::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_stocks_active_updated").table(Stocks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Stocks { Table, IsActive, UpdatedAt }

#[derive(DeriveIden)]
enum NewsArticles { Table, IsPublished, PublishedAt }

#[derive(DeriveIden)]
enum Testimonials { Table, IsActive, CreatedAt }
