use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `venues` table and its columns.
#[derive(DeriveIden)]
enum Venues {
    Table,
    Id,
    Name,
    City,
    State,
    Address,
    Phone,
    WebsiteLink,
    FacebookLink,
    ImageLink,
    SeekingTalent,
    SeekingDescription,
    Genres,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Venues::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Venues::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Venues::Name).string().not_null())
                    .col(ColumnDef::new(Venues::City).string().not_null())
                    .col(ColumnDef::new(Venues::State).string().not_null())
                    .col(ColumnDef::new(Venues::Address).string().not_null())
                    .col(ColumnDef::new(Venues::Phone).string().not_null())
                    .col(ColumnDef::new(Venues::WebsiteLink).string())
                    .col(ColumnDef::new(Venues::FacebookLink).string())
                    .col(ColumnDef::new(Venues::ImageLink).string())
                    .col(
                        ColumnDef::new(Venues::SeekingTalent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Venues::SeekingDescription)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Venues::Genres)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Venues::Table).to_owned())
            .await
    }
}
