pub mod artists;
pub mod shows;
pub mod venues;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Venue routes ──
    // `/search` is registered before `/{id}` so it wins the match.
    cfg.service(
        web::scope("/venues")
            .route("", web::get().to(venues::get_venues))
            .route("", web::post().to(venues::create_venue))
            .route("/search", web::get().to(venues::search_venues))
            .route("/{id}", web::get().to(venues::get_venue))
            .route("/{id}", web::put().to(venues::update_venue))
            .route("/{id}", web::delete().to(venues::delete_venue)),
    );

    // ── Artist routes ──
    cfg.service(
        web::scope("/artists")
            .route("", web::get().to(artists::get_artists))
            .route("", web::post().to(artists::create_artist))
            .route("/search", web::get().to(artists::search_artists))
            .route("/{id}", web::get().to(artists::get_artist))
            .route("/{id}", web::put().to(artists::update_artist))
            .route("/{id}", web::delete().to(artists::delete_artist)),
    );

    // ── Show routes (no update or delete; shows only go away by cascade) ──
    cfg.service(
        web::scope("/shows")
            .route("", web::get().to(shows::get_shows))
            .route("", web::post().to(shows::create_show)),
    );
}
