use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

use crate::db::shows as show_db;
use crate::models::shows::ShowInput;
use crate::views;

/// GET /api/shows — every show with its venue and artist names.
pub async fn get_shows(db: web::Data<DatabaseConnection>) -> impl Responder {
    match show_db::get_show_records(db.get_ref()).await {
        Ok(records) => HttpResponse::Ok().json(views::show_listing(records)),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch shows: {e}"),
        })),
    }
}

/// POST /api/shows — schedule a show. A reference to a missing artist or
/// venue trips the foreign key and the write rolls back.
pub async fn create_show(
    db: web::Data<DatabaseConnection>,
    body: web::Json<ShowInput>,
) -> impl Responder {
    match show_db::insert_show(db.get_ref(), body.into_inner()).await {
        Ok(show) => HttpResponse::Created().json(show),
        Err(e) => {
            tracing::warn!("Show insert failed: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to create show: {e}"),
            }))
        }
    }
}
