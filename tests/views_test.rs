//! Tests for the derived-view logic: past/upcoming partitioning, detail
//! pages, search responses and the grouped venue listing.
//!
//! Views are pure functions over already-loaded rows, so no running server or
//! database is needed. `now` is always pinned to a fixed instant.
//!
//! Run with: `cargo test --test views_test`
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use showbill_backend::models::{artists, shows, venues};
use showbill_backend::views;

/// Fixed reference instant: 2025-01-01 00:00:00 UTC.
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

fn at(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
}

fn venue(name: &str, city: &str, state: &str) -> venues::Model {
    venues::Model {
        id: Uuid::new_v4(),
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1 Main St".to_string(),
        phone: "555-0100".to_string(),
        website_link: None,
        facebook_link: None,
        image_link: Some("https://example.com/venue.png".to_string()),
        seeking_talent: false,
        seeking_description: String::new(),
        genres: vec!["Jazz".to_string()],
    }
}

fn artist(name: &str) -> artists::Model {
    artists::Model {
        id: Uuid::new_v4(),
        name: name.to_string(),
        city: "Seattle".to_string(),
        state: "WA".to_string(),
        phone: None,
        website_link: None,
        facebook_link: None,
        image_link: Some("https://example.com/artist.png".to_string()),
        seeking_venue: false,
        seeking_description: String::new(),
        genres: vec!["Rock".to_string()],
    }
}

fn show(venue_id: Uuid, artist_id: Uuid, start_time: DateTime<Utc>) -> shows::Model {
    shows::Model {
        id: Uuid::new_v4(),
        start_time,
        artist_id,
        venue_id,
    }
}

fn booked(venue: &venues::Model, artist: &artists::Model, years: &[i32]) -> Vec<(shows::Model, artists::Model)> {
    years
        .iter()
        .map(|&year| (show(venue.id, artist.id, at(year)), artist.clone()))
        .collect()
}

#[test]
fn test_partition_covers_every_show_exactly_once() {
    let v = venue("The Spot", "Seattle", "WA");
    let a = artist("The Quartet");
    let shows = booked(&v, &a, &[2019, 2021, 2024, 2027, 2030]);

    let (past, upcoming) = views::partition_shows(&shows, now());

    assert_eq!(past.len() + upcoming.len(), shows.len());
    assert_eq!(past.len(), 3);
    assert_eq!(upcoming.len(), 2);
}

#[test]
fn test_show_starting_exactly_at_now_is_past() {
    let v = venue("The Spot", "Seattle", "WA");
    let a = artist("The Quartet");
    let shows = vec![(show(v.id, a.id, now()), a.clone())];

    let (past, upcoming) = views::partition_shows(&shows, now());

    assert_eq!(past.len(), 1);
    assert!(upcoming.is_empty());
}

#[test]
fn test_partitions_are_ordered_by_start_time() {
    let v = venue("The Spot", "Seattle", "WA");
    let a = artist("The Quartet");
    // Deliberately out of order.
    let shows = booked(&v, &a, &[2024, 2019, 2030, 2021, 2027]);

    let (past, upcoming) = views::partition_shows(&shows, now());

    let past_times: Vec<&str> = past.iter().map(|s| s.start_time.as_str()).collect();
    let mut sorted = past_times.clone();
    sorted.sort();
    assert_eq!(past_times, sorted);

    let upcoming_times: Vec<&str> = upcoming.iter().map(|s| s.start_time.as_str()).collect();
    let mut sorted = upcoming_times.clone();
    sorted.sort();
    assert_eq!(upcoming_times, sorted);
}

#[test]
fn test_summaries_carry_the_artist_identity() {
    let v = venue("The Spot", "Seattle", "WA");
    let a = artist("The Quartet");
    let shows = booked(&v, &a, &[2020, 2030]);

    let (past, upcoming) = views::partition_shows(&shows, now());

    assert_eq!(past[0].artist_id, a.id);
    assert_eq!(past[0].artist_name, "The Quartet");
    assert_eq!(past[0].artist_image_link, a.image_link);
    assert_eq!(upcoming[0].artist_id, a.id);
}

#[test]
fn test_venue_with_one_past_and_one_upcoming_show() {
    let v = venue("The Spot", "Seattle", "WA");
    let a = artist("The Quartet");
    let shows = booked(&v, &a, &[2020, 2030]);

    let detail = views::venue_detail(v, &shows, now());

    assert_eq!(detail.past_shows_count, 1);
    assert_eq!(detail.upcoming_shows_count, 1);
}

#[test]
fn test_detail_counts_match_list_lengths() {
    let v = venue("The Spot", "Seattle", "WA");
    let a = artist("The Quartet");
    let shows = booked(&v, &a, &[2018, 2022, 2026, 2029]);

    let detail = views::venue_detail(v, &shows, now());
    assert_eq!(detail.past_shows_count, detail.past_shows.len());
    assert_eq!(detail.upcoming_shows_count, detail.upcoming_shows.len());

    let a2 = artist("Solo Act");
    let v2 = venue("Other Spot", "Portland", "OR");
    let shows = booked(&v2, &a2, &[2023, 2028]);
    let detail = views::artist_detail(a2, &shows, now());
    assert_eq!(detail.past_shows_count, detail.past_shows.len());
    assert_eq!(detail.upcoming_shows_count, detail.upcoming_shows.len());
}

#[test]
fn test_entity_with_no_shows_yields_empty_lists() {
    let v = venue("Quiet Room", "Boise", "ID");

    let detail = views::venue_detail(v, &[], now());

    assert!(detail.past_shows.is_empty());
    assert!(detail.upcoming_shows.is_empty());
    assert_eq!(detail.past_shows_count, 0);
    assert_eq!(detail.upcoming_shows_count, 0);
}

#[test]
fn test_detail_surfaces_website_link_as_website() {
    let mut v = venue("The Spot", "Seattle", "WA");
    v.website_link = Some("https://thespot.example.com".to_string());

    let detail = views::venue_detail(v, &[], now());
    let value = serde_json::to_value(&detail).unwrap();

    assert_eq!(value["website"], "https://thespot.example.com");
    assert!(value.get("website_link").is_none());
}

#[test]
fn test_search_counts_only_strictly_upcoming_shows() {
    let v = venue("The Spot", "Seattle", "WA");
    let a = artist("The Quartet");
    // One past, one exactly at now (counts as past), one upcoming.
    let shows = vec![
        show(v.id, a.id, at(2020)),
        show(v.id, a.id, now()),
        show(v.id, a.id, at(2030)),
    ];

    let response = views::venue_search_response(std::slice::from_ref(&v), &shows, now());

    assert_eq!(response.count, 1);
    assert_eq!(response.data[0].num_upcoming_shows, 1);
}

#[test]
fn test_search_response_scopes_counts_to_each_entity() {
    let a1 = artist("The Quartet");
    let a2 = artist("Solo Act");
    let v = venue("The Spot", "Seattle", "WA");
    let shows = vec![
        show(v.id, a1.id, at(2030)),
        show(v.id, a1.id, at(2031)),
        show(v.id, a2.id, at(2030)),
    ];

    let response = views::artist_search_response(&[a1.clone(), a2.clone()], &shows, now());

    assert_eq!(response.count, 2);
    assert_eq!(response.data[0].id, a1.id);
    assert_eq!(response.data[0].num_upcoming_shows, 2);
    assert_eq!(response.data[1].id, a2.id);
    assert_eq!(response.data[1].num_upcoming_shows, 1);
}

#[test]
fn test_area_listing_groups_by_city_and_state() {
    let v1 = venue("The Spot", "Seattle", "WA");
    let v2 = venue("The Attic", "Seattle", "WA");
    let v3 = venue("Riverside", "Portland", "OR");
    let a = artist("The Quartet");
    let shows = vec![show(v2.id, a.id, at(2030))];

    let areas = views::area_listing(&[v1.clone(), v2.clone(), v3.clone()], &shows, now());

    assert_eq!(areas.len(), 2);
    assert_eq!(areas[0].city, "Seattle");
    assert_eq!(areas[0].state, "WA");
    assert_eq!(areas[0].venues.len(), 2);
    assert_eq!(areas[1].city, "Portland");
    assert_eq!(areas[1].venues.len(), 1);

    let attic = areas[0]
        .venues
        .iter()
        .find(|entry| entry.id == v2.id)
        .unwrap();
    assert_eq!(attic.num_upcoming_shows, 1);
}

#[test]
fn test_show_listing_carries_both_parents() {
    let record = shows::ShowRecord {
        venue_id: Uuid::new_v4(),
        venue_name: "The Spot".to_string(),
        artist_id: Uuid::new_v4(),
        artist_name: "The Quartet".to_string(),
        artist_image_link: Some("https://example.com/artist.png".to_string()),
        start_time: at(2030),
    };

    let listing = views::show_listing(vec![record.clone()]);

    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].venue_id, record.venue_id);
    assert_eq!(listing[0].venue_name, "The Spot");
    assert_eq!(listing[0].artist_name, "The Quartet");
    assert_eq!(listing[0].start_time, at(2030).to_rfc3339());
}
