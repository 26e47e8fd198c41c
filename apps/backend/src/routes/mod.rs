use actix_web::web;

pub mod health;
pub mod host;
pub mod play;

/// Configure application routes for the server and for tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Host control routes: /api/host/** (require the host key)
    cfg.service(web::scope("/api/host").configure(host::configure_routes));

    // Player-facing routes: /api/**
    cfg.service(web::scope("/api").configure(play::configure_routes));
}
