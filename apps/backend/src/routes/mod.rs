use actix_web::web;

pub mod games;
pub mod health;

/// Configure application routes.
///
/// Shared by `main.rs` and the test app builder; middleware is wrapped by
/// the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));

    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Catalog: /api/games, /api/games/random
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
}
