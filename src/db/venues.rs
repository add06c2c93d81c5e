use sea_orm::sea_query::{Expr, Func};
use sea_orm::*;
use uuid::Uuid;

use crate::models::venues::{self, VenueInput};

/// Insert a new venue. The write runs inside its own transaction so a failed
/// insert leaves no partial row behind.
pub async fn insert_venue(
    db: &DatabaseConnection,
    input: VenueInput,
) -> Result<venues::Model, DbErr> {
    let txn = db.begin().await?;

    let new_venue = venues::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        city: Set(input.city),
        state: Set(input.state),
        address: Set(input.address),
        phone: Set(input.phone),
        website_link: Set(input.website_link),
        facebook_link: Set(input.facebook_link),
        image_link: Set(input.image_link),
        seeking_talent: Set(input.seeking_talent),
        seeking_description: Set(input.seeking_description),
        genres: Set(input.genres),
    };

    let venue = new_venue.insert(&txn).await?;
    txn.commit().await?;
    Ok(venue)
}

/// Fetch all venues.
pub async fn get_all_venues(db: &DatabaseConnection) -> Result<Vec<venues::Model>, DbErr> {
    venues::Entity::find().all(db).await
}

/// Fetch a single venue by ID.
pub async fn get_venue_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<venues::Model>, DbErr> {
    venues::Entity::find_by_id(id).one(db).await
}

/// Case-insensitive substring search on venue name.
pub async fn search_venues(
    db: &DatabaseConnection,
    term: &str,
) -> Result<Vec<venues::Model>, DbErr> {
    let pattern = format!("%{}%", term.to_lowercase());
    venues::Entity::find()
        .filter(Expr::expr(Func::lower(Expr::col(venues::Column::Name))).like(pattern))
        .all(db)
        .await
}

/// Overwrite an existing venue with the submitted attributes. Edits replace
/// every field, they never merge.
pub async fn update_venue(
    db: &DatabaseConnection,
    id: Uuid,
    input: VenueInput,
) -> Result<venues::Model, DbErr> {
    let txn = db.begin().await?;

    let venue = venues::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(DbErr::RecordNotFound("Venue not found".to_string()))?;

    let mut active: venues::ActiveModel = venue.into();
    active.name = Set(input.name);
    active.city = Set(input.city);
    active.state = Set(input.state);
    active.address = Set(input.address);
    active.phone = Set(input.phone);
    active.website_link = Set(input.website_link);
    active.facebook_link = Set(input.facebook_link);
    active.image_link = Set(input.image_link);
    active.seeking_talent = Set(input.seeking_talent);
    active.seeking_description = Set(input.seeking_description);
    active.genres = Set(input.genres);

    let updated = active.update(&txn).await?;
    txn.commit().await?;
    Ok(updated)
}

/// Delete a venue by ID. The schema cascades the delete to every show that
/// references the venue.
pub async fn delete_venue(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    let txn = db.begin().await?;
    let result = venues::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    Ok(result)
}
