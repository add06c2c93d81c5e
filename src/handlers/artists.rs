use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::artists as artist_db;
use crate::db::shows as show_db;
use crate::models::SearchQuery;
use crate::models::artists::ArtistInput;
use crate::views;

/// GET /api/artists — flat list of all artists.
pub async fn get_artists(db: web::Data<DatabaseConnection>) -> impl Responder {
    match artist_db::get_all_artists(db.get_ref()).await {
        Ok(artists) => HttpResponse::Ok().json(artists),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch artists: {e}"),
        })),
    }
}

/// GET /api/artists/search?term= — substring match on name, case-insensitive.
pub async fn search_artists(
    db: web::Data<DatabaseConnection>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let now = Utc::now();
    let matches = match artist_db::search_artists(db.get_ref(), query.term()).await {
        Ok(matches) => matches,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Search failed: {e}"),
            }));
        }
    };
    let ids: Vec<Uuid> = matches.iter().map(|artist| artist.id).collect();
    match show_db::for_artists(db.get_ref(), &ids).await {
        Ok(shows) => HttpResponse::Ok().json(views::artist_search_response(&matches, &shows, now)),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch shows: {e}"),
        })),
    }
}

/// GET /api/artists/{id} — full artist page with past/upcoming shows.
pub async fn get_artist(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    let now = Utc::now();
    let artist = match artist_db::get_artist_by_id(db.get_ref(), id).await {
        Ok(Some(artist)) => artist,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Artist {id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };
    match show_db::for_artist(db.get_ref(), id).await {
        Ok(shows) => HttpResponse::Ok().json(views::artist_detail(artist, &shows, now)),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch shows: {e}"),
        })),
    }
}

/// POST /api/artists — create a new artist.
pub async fn create_artist(
    db: web::Data<DatabaseConnection>,
    body: web::Json<ArtistInput>,
) -> impl Responder {
    let input = body.into_inner();
    if let Err(e) = input.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string(),
        }));
    }
    match artist_db::insert_artist(db.get_ref(), input).await {
        Ok(artist) => HttpResponse::Created().json(artist),
        Err(e) => {
            tracing::warn!("Artist insert failed: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to create artist: {e}"),
            }))
        }
    }
}

/// PUT /api/artists/{id} — overwrite an artist's attributes.
pub async fn update_artist(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<ArtistInput>,
) -> impl Responder {
    let id = path.into_inner();
    let input = body.into_inner();
    if let Err(e) = input.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string(),
        }));
    }
    match artist_db::update_artist(db.get_ref(), id, input).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => {
            let mut status = if e.to_string().contains("not found") {
                HttpResponse::NotFound()
            } else {
                HttpResponse::InternalServerError()
            };
            status.json(serde_json::json!({
                "error": format!("Failed to update artist: {e}"),
            }))
        }
    }
}

/// DELETE /api/artists/{id} — delete an artist and, by cascade, their shows.
pub async fn delete_artist(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match artist_db::delete_artist(db.get_ref(), id).await {
        Ok(result) => {
            if result.rows_affected > 0 {
                HttpResponse::Ok().json(serde_json::json!({
                    "message": format!("Artist {id} deleted"),
                }))
            } else {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": format!("Artist {id} not found"),
                }))
            }
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete artist: {e}"),
        })),
    }
}
