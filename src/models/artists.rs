use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// SeaORM entity for the `artists` table. Same shape as a venue minus the
/// street address; phone is optional for artists.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "artists")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: String,
    pub genres: Vec<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::shows::Entity")]
    Shows,
}

impl Related<super::shows::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shows.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Submission payload for creating an artist or overwriting an existing one.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    #[serde(default)]
    pub seeking_description: String,
}

impl ArtistInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.city.trim().is_empty() {
            return Err(ValidationError::MissingField("city"));
        }
        if self.state.trim().is_empty() {
            return Err(ValidationError::MissingField("state"));
        }
        if self.genres.is_empty() {
            return Err(ValidationError::NoGenres);
        }
        Ok(())
    }
}
