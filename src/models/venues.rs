use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// SeaORM entity for the `venues` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "venues")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_talent: bool,
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

/// Submission payload for creating a venue or overwriting an existing one.
/// Edits replace every attribute, so the same shape serves both.
#[derive(Debug, Clone, Deserialize)]
pub struct VenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    #[serde(default)]
    pub seeking_description: String,
}

impl VenueInput {
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
        if self.address.trim().is_empty() {
            return Err(ValidationError::MissingField("address"));
        }
        if self.phone.trim().is_empty() {
            return Err(ValidationError::MissingField("phone"));
        }
        if self.genres.is_empty() {
            return Err(ValidationError::NoGenres);
        }
        Ok(())
    }
}
