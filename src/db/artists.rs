use sea_orm::sea_query::{Expr, Func};
use sea_orm::*;
use uuid::Uuid;

use crate::models::artists::{self, ArtistInput};

/// Insert a new artist inside its own transaction.
pub async fn insert_artist(
    db: &DatabaseConnection,
    input: ArtistInput,
) -> Result<artists::Model, DbErr> {
    let txn = db.begin().await?;

    let new_artist = artists::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        city: Set(input.city),
        state: Set(input.state),
        phone: Set(input.phone),
        website_link: Set(input.website_link),
        facebook_link: Set(input.facebook_link),
        image_link: Set(input.image_link),
        seeking_venue: Set(input.seeking_venue),
        seeking_description: Set(input.seeking_description),
        genres: Set(input.genres),
    };

    let artist = new_artist.insert(&txn).await?;
    txn.commit().await?;
    Ok(artist)
}

/// Fetch all artists.
pub async fn get_all_artists(db: &DatabaseConnection) -> Result<Vec<artists::Model>, DbErr> {
    artists::Entity::find().all(db).await
}

/// Fetch a single artist by ID.
pub async fn get_artist_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<artists::Model>, DbErr> {
    artists::Entity::find_by_id(id).one(db).await
}

/// Case-insensitive substring search on artist name.
pub async fn search_artists(
    db: &DatabaseConnection,
    term: &str,
) -> Result<Vec<artists::Model>, DbErr> {
    let pattern = format!("%{}%", term.to_lowercase());
    artists::Entity::find()
        .filter(Expr::expr(Func::lower(Expr::col(artists::Column::Name))).like(pattern))
        .all(db)
        .await
}

/// Overwrite an existing artist with the submitted attributes.
pub async fn update_artist(
    db: &DatabaseConnection,
    id: Uuid,
    input: ArtistInput,
) -> Result<artists::Model, DbErr> {
    let txn = db.begin().await?;

    let artist = artists::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(DbErr::RecordNotFound("Artist not found".to_string()))?;

    let mut active: artists::ActiveModel = artist.into();
    active.name = Set(input.name);
    active.city = Set(input.city);
    active.state = Set(input.state);
    active.phone = Set(input.phone);
    active.website_link = Set(input.website_link);
    active.facebook_link = Set(input.facebook_link);
    active.image_link = Set(input.image_link);
    active.seeking_venue = Set(input.seeking_venue);
    active.seeking_description = Set(input.seeking_description);
    active.genres = Set(input.genres);

    let updated = active.update(&txn).await?;
    txn.commit().await?;
    Ok(updated)
}

/// Delete an artist by ID. Cascades to the artist's shows.
pub async fn delete_artist(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    let txn = db.begin().await?;
    let result = artists::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    Ok(result)
}
