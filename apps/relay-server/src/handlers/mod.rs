//! HTTP handlers and route configuration.

mod alerts;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/alerts", web::post().to(alerts::relay_alert)),
    );
}
