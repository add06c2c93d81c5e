pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_venues_table;
mod m20250601_000002_create_artists_table;
mod m20250601_000003_create_shows_table;
mod m20250612_000001_add_show_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_venues_table::Migration),
            Box::new(m20250601_000002_create_artists_table::Migration),
            Box::new(m20250601_000003_create_shows_table::Migration),
            Box::new(m20250612_000001_add_show_indexes::Migration),
        ]
    }
}
