//! Route configuration
//!
//! Centralized route setup; each domain (auth, profile, posts) manages its
//! own routes. Registration and login are the only unauthenticated API
//! endpoints besides the health probes.

use crate::handlers;
use crate::middleware::JwtAuthMiddleware;
use actix_web::web;

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(handlers::health_check))
            .route("/health/live", web::get().to(handlers::liveness_check))
            .route("/health/ready", web::get().to(handlers::readiness_check))
            .configure(routes::auth::configure)
            .configure(routes::profile::configure)
            .configure(routes::posts::configure),
    );
}

// Sub-modules for each domain
mod routes {
    use super::*;

    pub mod auth {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/auth")
                    .route("/register", web::post().to(handlers::register))
                    .route("/login", web::post().to(handlers::login))
                    .service(
                        web::scope("")
                            .wrap(JwtAuthMiddleware)
                            .route("/change-password", web::post().to(handlers::change_password)),
                    ),
            );
        }
    }

    pub mod profile {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/profile")
                    .wrap(JwtAuthMiddleware)
                    .route("", web::get().to(handlers::get_profile))
                    .route("", web::put().to(handlers::update_profile)),
            );
        }
    }

    pub mod posts {
        use super::*;
        pub fn configure(cfg: &mut web::ServiceConfig) {
            cfg.service(
                web::scope("/posts")
                    .wrap(JwtAuthMiddleware)
                    .route("", web::get().to(handlers::list_posts))
                    .route("", web::post().to(handlers::create_post))
                    .route("/{id}", web::get().to(handlers::get_post))
                    .route("/{id}", web::put().to(handlers::update_post))
                    .route("/{id}", web::delete().to(handlers::delete_post)),
            )
            .service(
                web::scope("/my-posts")
                    .wrap(JwtAuthMiddleware)
                    .route("", web::get().to(handlers::my_posts)),
            );
        }
    }
}
