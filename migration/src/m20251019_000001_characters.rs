use sea_orm_migration::{prelude::*, schema::*};

static IDX_CHARACTERS_NAME: &str = "idx_characters_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(string(Characters::Id).primary_key())
                    .col(string(Characters::Name))
                    .col(string(Characters::Ki))
                    .col(string(Characters::Race))
                    .col(timestamp(Characters::CreatedAt))
                    .col(timestamp(Characters::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Names are looked up case-insensitively but are not unique
        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTERS_NAME)
                    .table(Characters::Table)
                    .col(Characters::Name)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTERS_NAME)
                    .table(Characters::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Characters {
    Table,
    Id,
    Name,
    Ki,
    Race,
    CreatedAt,
    UpdatedAt,
}
