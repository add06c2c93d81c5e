use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::shows as show_db;
use crate::db::venues as venue_db;
use crate::models::SearchQuery;
use crate::models::venues::VenueInput;
use crate::views;

/// GET /api/venues — venues grouped by (city, state) with upcoming counts.
pub async fn get_venues(db: web::Data<DatabaseConnection>) -> impl Responder {
    let now = Utc::now();
    let venues = match venue_db::get_all_venues(db.get_ref()).await {
        Ok(venues) => venues,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to fetch venues: {e}"),
            }));
        }
    };
    match show_db::get_all_shows(db.get_ref()).await {
        Ok(shows) => HttpResponse::Ok().json(views::area_listing(&venues, &shows, now)),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch shows: {e}"),
        })),
    }
}

/// GET /api/venues/search?term= — substring match on name, case-insensitive.
pub async fn search_venues(
    db: web::Data<DatabaseConnection>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let now = Utc::now();
    let matches = match venue_db::search_venues(db.get_ref(), query.term()).await {
        Ok(matches) => matches,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Search failed: {e}"),
            }));
        }
    };
    let ids: Vec<Uuid> = matches.iter().map(|venue| venue.id).collect();
    match show_db::for_venues(db.get_ref(), &ids).await {
        Ok(shows) => HttpResponse::Ok().json(views::venue_search_response(&matches, &shows, now)),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch shows: {e}"),
        })),
    }
}

/// GET /api/venues/{id} — full venue page with past/upcoming shows.
pub async fn get_venue(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    let now = Utc::now();
    let venue = match venue_db::get_venue_by_id(db.get_ref(), id).await {
        Ok(Some(venue)) => venue,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Venue {id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };
    match show_db::for_venue(db.get_ref(), id).await {
        Ok(shows) => HttpResponse::Ok().json(views::venue_detail(venue, &shows, now)),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch shows: {e}"),
        })),
    }
}

/// POST /api/venues — create a new venue.
pub async fn create_venue(
    db: web::Data<DatabaseConnection>,
    body: web::Json<VenueInput>,
) -> impl Responder {
    let input = body.into_inner();
    if let Err(e) = input.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string(),
        }));
    }
    match venue_db::insert_venue(db.get_ref(), input).await {
        Ok(venue) => HttpResponse::Created().json(venue),
        Err(e) => {
            tracing::warn!("Venue insert failed: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to create venue: {e}"),
            }))
        }
    }
}

/// PUT /api/venues/{id} — overwrite a venue's attributes.
pub async fn update_venue(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<VenueInput>,
) -> impl Responder {
    let id = path.into_inner();
    let input = body.into_inner();
    if let Err(e) = input.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string(),
        }));
    }
    match venue_db::update_venue(db.get_ref(), id, input).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => {
            let mut status = if e.to_string().contains("not found") {
                HttpResponse::NotFound()
            } else {
                HttpResponse::InternalServerError()
            };
            status.json(serde_json::json!({
                "error": format!("Failed to update venue: {e}"),
            }))
        }
    }
}

/// DELETE /api/venues/{id} — delete a venue and, by cascade, its shows.
pub async fn delete_venue(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match venue_db::delete_venue(db.get_ref(), id).await {
        Ok(result) => {
            if result.rows_affected > 0 {
                HttpResponse::Ok().json(serde_json::json!({
                    "message": format!("Venue {id} deleted"),
                }))
            } else {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": format!("Venue {id} not found"),
                }))
            }
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete venue: {e}"),
        })),
    }
}
