use sea_orm::FromQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `shows` table. A show links exactly one artist to
/// exactly one venue at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shows")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub start_time: DateTimeUtc,
    pub artist_id: Uuid,
    pub venue_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::artists::Entity",
        from = "Column::ArtistId",
        to = "super::artists::Column::Id"
    )]
    Artist,
    #[sea_orm(
        belongs_to = "super::venues::Entity",
        from = "Column::VenueId",
        to = "super::venues::Column::Id"
    )]
    Venue,
}

impl Related<super::artists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artist.def()
    }
}

impl Related<super::venues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Venue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Submission payload for scheduling a show. Shows are never edited or
/// deleted directly; they only go away when a parent row cascades.
#[derive(Debug, Clone, Deserialize)]
pub struct ShowInput {
    pub artist_id: Uuid,
    pub venue_id: Uuid,
    pub start_time: DateTimeUtc,
}

/// One row of the show listing, joined against both parent tables.
#[derive(Debug, Clone, FromQueryResult)]
pub struct ShowRecord {
    pub venue_id: Uuid,
    pub venue_name: String,
    pub artist_id: Uuid,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTimeUtc,
}
