//! Tests for submission validation. A submission that fails validation is
//! rejected before any database write happens, so these run without a server
//! or database.
//!
//! Run with: `cargo test --test validation_test`
use showbill_backend::models::ValidationError;
use showbill_backend::models::artists::ArtistInput;
use showbill_backend::models::venues::VenueInput;

fn valid_venue() -> VenueInput {
    VenueInput {
        name: "The Spot".to_string(),
        city: "Seattle".to_string(),
        state: "WA".to_string(),
        address: "1 Main St".to_string(),
        phone: "555-0100".to_string(),
        genres: vec!["Jazz".to_string(), "Blues".to_string()],
        website_link: None,
        facebook_link: None,
        image_link: None,
        seeking_talent: false,
        seeking_description: String::new(),
    }
}

fn valid_artist() -> ArtistInput {
    ArtistInput {
        name: "The Quartet".to_string(),
        city: "Seattle".to_string(),
        state: "WA".to_string(),
        phone: None,
        genres: vec!["Rock".to_string()],
        website_link: None,
        facebook_link: None,
        image_link: None,
        seeking_venue: false,
        seeking_description: String::new(),
    }
}

#[test]
fn test_valid_venue_passes() {
    assert!(valid_venue().validate().is_ok());
}

#[test]
fn test_venue_with_no_genres_is_rejected() {
    let mut input = valid_venue();
    input.genres.clear();
    assert_eq!(input.validate(), Err(ValidationError::NoGenres));
}

#[test]
fn test_venue_with_blank_name_is_rejected() {
    let mut input = valid_venue();
    input.name = "   ".to_string();
    assert_eq!(input.validate(), Err(ValidationError::MissingField("name")));
}

#[test]
fn test_venue_requires_address_and_phone() {
    let mut input = valid_venue();
    input.address = String::new();
    assert_eq!(
        input.validate(),
        Err(ValidationError::MissingField("address"))
    );

    let mut input = valid_venue();
    input.phone = String::new();
    assert_eq!(input.validate(), Err(ValidationError::MissingField("phone")));
}

#[test]
fn test_artist_without_phone_passes() {
    let mut input = valid_artist();
    input.phone = None;
    assert!(input.validate().is_ok());
}

#[test]
fn test_artist_with_no_genres_is_rejected() {
    let mut input = valid_artist();
    input.genres.clear();
    assert_eq!(input.validate(), Err(ValidationError::NoGenres));
}

#[test]
fn test_artist_with_blank_city_is_rejected() {
    let mut input = valid_artist();
    input.city = String::new();
    assert_eq!(input.validate(), Err(ValidationError::MissingField("city")));
}

#[test]
fn test_validation_messages_name_the_field() {
    assert_eq!(
        ValidationError::MissingField("state").to_string(),
        "state is required"
    );
    assert_eq!(
        ValidationError::NoGenres.to_string(),
        "at least one genre must be provided"
    );
}
