//! Derived views computed on read from an entity and its shows. Nothing in
//! here is persisted; every view is rebuilt against a `now` captured once per
//! request and threaded through all construction for that request.

use sea_orm::entity::prelude::DateTimeUtc;
use serde::Serialize;
use uuid::Uuid;

use crate::models::shows::ShowRecord;
use crate::models::{artists, shows, venues};

/// One show on an entity's page. Both the venue page and the artist page
/// report the performing artist's identity here.
#[derive(Debug, Clone, Serialize)]
pub struct ShowSummary {
    pub artist_id: Uuid,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// Full venue page: the venue's own fields plus its shows split into past and
/// upcoming. `website_link` is surfaced as `website`.
#[derive(Debug, Serialize)]
pub struct VenueDetail {
    pub id: Uuid,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
    pub image_link: Option<String>,
    pub past_shows: Vec<ShowSummary>,
    pub upcoming_shows: Vec<ShowSummary>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Full artist page, same shape as [`VenueDetail`] minus the address.
#[derive(Debug, Serialize)]
pub struct ArtistDetail {
    pub id: Uuid,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: String,
    pub image_link: Option<String>,
    pub past_shows: Vec<ShowSummary>,
    pub upcoming_shows: Vec<ShowSummary>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// One hit in a search response. The upcoming count is recomputed at call
/// time, never cached.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub id: Uuid,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub count: usize,
    pub data: Vec<SearchResult>,
}

/// Venues of one (city, state) area in the grouped venue listing.
#[derive(Debug, Serialize)]
pub struct AreaVenues {
    pub city: String,
    pub state: String,
    pub venues: Vec<SearchResult>,
}

/// One row of the flat show listing.
#[derive(Debug, Serialize)]
pub struct ShowListing {
    pub venue_id: Uuid,
    pub venue_name: String,
    pub artist_id: Uuid,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

fn is_upcoming(show: &shows::Model, now: DateTimeUtc) -> bool {
    show.start_time > now
}

/// Split an entity's shows into (past, upcoming) against a single `now`.
/// A show starting exactly at `now` counts as past. Both buckets come back
/// ordered by start time, and every input show lands in exactly one of them.
pub fn partition_shows(
    shows: &[(shows::Model, artists::Model)],
    now: DateTimeUtc,
) -> (Vec<ShowSummary>, Vec<ShowSummary>) {
    let mut ordered: Vec<&(shows::Model, artists::Model)> = shows.iter().collect();
    ordered.sort_by_key(|(show, _)| show.start_time);

    let mut past = Vec::new();
    let mut upcoming = Vec::new();
    for (show, artist) in ordered {
        let summary = ShowSummary {
            artist_id: show.artist_id,
            artist_name: artist.name.clone(),
            artist_image_link: artist.image_link.clone(),
            start_time: show.start_time.to_rfc3339(),
        };
        if is_upcoming(show, now) {
            upcoming.push(summary);
        } else {
            past.push(summary);
        }
    }
    (past, upcoming)
}

pub fn venue_detail(
    venue: venues::Model,
    shows: &[(shows::Model, artists::Model)],
    now: DateTimeUtc,
) -> VenueDetail {
    let (past_shows, upcoming_shows) = partition_shows(shows, now);
    VenueDetail {
        id: venue.id,
        name: venue.name,
        genres: venue.genres,
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: venue.phone,
        website: venue.website_link,
        facebook_link: venue.facebook_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        image_link: venue.image_link,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }
}

pub fn artist_detail(
    artist: artists::Model,
    shows: &[(shows::Model, artists::Model)],
    now: DateTimeUtc,
) -> ArtistDetail {
    let (past_shows, upcoming_shows) = partition_shows(shows, now);
    ArtistDetail {
        id: artist.id,
        name: artist.name,
        genres: artist.genres,
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        website: artist.website_link,
        facebook_link: artist.facebook_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        image_link: artist.image_link,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }
}

pub fn venue_search_response(
    venues: &[venues::Model],
    shows: &[shows::Model],
    now: DateTimeUtc,
) -> SearchResponse {
    let data: Vec<SearchResult> = venues
        .iter()
        .map(|venue| SearchResult {
            id: venue.id,
            name: venue.name.clone(),
            num_upcoming_shows: shows
                .iter()
                .filter(|show| show.venue_id == venue.id && is_upcoming(show, now))
                .count(),
        })
        .collect();
    SearchResponse {
        count: data.len(),
        data,
    }
}

pub fn artist_search_response(
    artists: &[artists::Model],
    shows: &[shows::Model],
    now: DateTimeUtc,
) -> SearchResponse {
    let data: Vec<SearchResult> = artists
        .iter()
        .map(|artist| SearchResult {
            id: artist.id,
            name: artist.name.clone(),
            num_upcoming_shows: shows
                .iter()
                .filter(|show| show.artist_id == artist.id && is_upcoming(show, now))
                .count(),
        })
        .collect();
    SearchResponse {
        count: data.len(),
        data,
    }
}

/// Group venues by distinct (city, state) in first-seen order, each venue
/// carrying its recomputed upcoming count.
pub fn area_listing(
    venues: &[venues::Model],
    shows: &[shows::Model],
    now: DateTimeUtc,
) -> Vec<AreaVenues> {
    let mut areas: Vec<AreaVenues> = Vec::new();
    for venue in venues {
        let entry = SearchResult {
            id: venue.id,
            name: venue.name.clone(),
            num_upcoming_shows: shows
                .iter()
                .filter(|show| show.venue_id == venue.id && is_upcoming(show, now))
                .count(),
        };
        match areas
            .iter_mut()
            .find(|area| area.city == venue.city && area.state == venue.state)
        {
            Some(area) => area.venues.push(entry),
            None => areas.push(AreaVenues {
                city: venue.city.clone(),
                state: venue.state.clone(),
                venues: vec![entry],
            }),
        }
    }
    areas
}

pub fn show_listing(records: Vec<ShowRecord>) -> Vec<ShowListing> {
    records
        .into_iter()
        .map(|record| ShowListing {
            venue_id: record.venue_id,
            venue_name: record.venue_name,
            artist_id: record.artist_id,
            artist_name: record.artist_name,
            artist_image_link: record.artist_image_link,
            start_time: record.start_time.to_rfc3339(),
        })
        .collect()
}
