//! Create `testimonials` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(uuid(Testimonials::Id).primary_key())
                    .col(text(Testimonials::Name).not_null())
                    .col(text(Testimonials::Role).not_null())
                    .col(text_null(Testimonials::Company))
                    .col(text(Testimonials::Content).not_null())
                    .col(integer(Testimonials::Rating).not_null().default(5))
                    .col(text_null(Testimonials::AvatarUrl))
                    .col(boolean(Testimonials::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(Testimonials::CreatedAt).not_null().default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Testimonials::UpdatedAt).not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Testimonials::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Testimonials {
    Table,
    Id,
    Name,
    Role,
    Company,
    Content,
    Rating,
    AvatarUrl,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
