use sea_orm::*;
use uuid::Uuid;

use crate::models::shows::{self, ShowInput, ShowRecord};
use crate::models::{artists, venues};

/// Insert a new show. Runs inside its own transaction: if either foreign key
/// points at a missing row the constraint fires, the transaction is dropped
/// and nothing is written.
pub async fn insert_show(db: &DatabaseConnection, input: ShowInput) -> Result<shows::Model, DbErr> {
    let txn = db.begin().await?;

    let new_show = shows::ActiveModel {
        id: Set(Uuid::new_v4()),
        start_time: Set(input.start_time),
        artist_id: Set(input.artist_id),
        venue_id: Set(input.venue_id),
    };

    let show = new_show.insert(&txn).await?;
    txn.commit().await?;
    Ok(show)
}

/// Fetch all shows as bare rows.
pub async fn get_all_shows(db: &DatabaseConnection) -> Result<Vec<shows::Model>, DbErr> {
    shows::Entity::find().all(db).await
}

/// Fetch every show joined against both parents, for the show listing.
pub async fn get_show_records(db: &DatabaseConnection) -> Result<Vec<ShowRecord>, DbErr> {
    shows::Entity::find()
        .select_only()
        .column(shows::Column::VenueId)
        .column_as(venues::Column::Name, "venue_name")
        .column(shows::Column::ArtistId)
        .column_as(artists::Column::Name, "artist_name")
        .column_as(artists::Column::ImageLink, "artist_image_link")
        .column(shows::Column::StartTime)
        .join(JoinType::InnerJoin, shows::Relation::Venue.def())
        .join(JoinType::InnerJoin, shows::Relation::Artist.def())
        .into_model::<ShowRecord>()
        .all(db)
        .await
}

/// A venue's shows paired with the performing artist.
pub async fn for_venue(
    db: &DatabaseConnection,
    venue_id: Uuid,
) -> Result<Vec<(shows::Model, artists::Model)>, DbErr> {
    let rows = shows::Entity::find()
        .filter(shows::Column::VenueId.eq(venue_id))
        .find_also_related(artists::Entity)
        .all(db)
        .await?;

    // The FK guarantees the artist row exists; drop the Option wrapper.
    Ok(rows
        .into_iter()
        .filter_map(|(show, artist)| artist.map(|artist| (show, artist)))
        .collect())
}

/// An artist's shows paired with that artist.
pub async fn for_artist(
    db: &DatabaseConnection,
    artist_id: Uuid,
) -> Result<Vec<(shows::Model, artists::Model)>, DbErr> {
    let rows = shows::Entity::find()
        .filter(shows::Column::ArtistId.eq(artist_id))
        .find_also_related(artists::Entity)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(show, artist)| artist.map(|artist| (show, artist)))
        .collect())
}

/// Bare show rows for a set of venues, used to recompute upcoming counts in
/// search responses.
pub async fn for_venues(
    db: &DatabaseConnection,
    venue_ids: &[Uuid],
) -> Result<Vec<shows::Model>, DbErr> {
    if venue_ids.is_empty() {
        return Ok(Vec::new());
    }
    shows::Entity::find()
        .filter(shows::Column::VenueId.is_in(venue_ids.iter().copied()))
        .all(db)
        .await
}

/// Bare show rows for a set of artists.
pub async fn for_artists(
    db: &DatabaseConnection,
    artist_ids: &[Uuid],
) -> Result<Vec<shows::Model>, DbErr> {
    if artist_ids.is_empty() {
        return Ok(Vec::new());
    }
    shows::Entity::find()
        .filter(shows::Column::ArtistId.is_in(artist_ids.iter().copied()))
        .all(db)
        .await
}
