use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(pk_auto(Posts::Id))
                    .col(string_len(Posts::Title, 255))
                    .col(text(Posts::Content))
                    .col(string_len_null(Posts::Author, 100))
                    .col(integer_null(Posts::AuthorId))
                    .col(integer(Posts::Views).default(0))
                    .col(timestamp_with_time_zone(Posts::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Posts::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    Title,
    Content,
    Author,
    AuthorId,
    Views,
    CreatedAt,
    UpdatedAt,
}
