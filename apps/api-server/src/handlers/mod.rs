//! HTTP handlers and route configuration.

mod docs;
mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::{json_error_handler, path_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        // Public routes
        .route("/health", web::get().to(health::health_check))
        // Posts
        .service(
            web::resource("/posts")
                .route(web::post().to(posts::create_post))
                .route(web::get().to(posts::list_posts)),
        )
        .service(
            web::resource("/posts/{id}")
                .route(web::get().to(posts::get_post))
                .route(web::patch().to(posts::update_post))
                .route(web::delete().to(posts::delete_post)),
        )
        // API documentation
        .configure(docs::configure);
}
