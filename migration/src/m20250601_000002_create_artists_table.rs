use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `artists` table and its columns.
#[derive(DeriveIden)]
enum Artists {
    Table,
    Id,
    Name,
    City,
    State,
    Phone,
    WebsiteLink,
    FacebookLink,
    ImageLink,
    SeekingVenue,
    SeekingDescription,
    Genres,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Artists::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Artists::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Artists::Name).string().not_null())
                    .col(ColumnDef::new(Artists::City).string().not_null())
                    .col(ColumnDef::new(Artists::State).string().not_null())
                    .col(ColumnDef::new(Artists::Phone).string())
                    .col(ColumnDef::new(Artists::WebsiteLink).string())
                    .col(ColumnDef::new(Artists::FacebookLink).string())
                    .col(ColumnDef::new(Artists::ImageLink).string())
                    .col(
                        ColumnDef::new(Artists::SeekingVenue)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Artists::SeekingDescription)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Artists::Genres)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Artists::Table).to_owned())
            .await
    }
}
