//! # Members backend: axum routes
//!
//! Mounted by the web binary next to the Dioxus application:
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /api/members` | [`members::list_members`] |
//! | `POST /api/members` | [`members::create_member`] (multipart) |
//! | `DELETE /api/members/{id}` | [`members::delete_member`] |
//! | `GET /api/debug/db` | [`members::debug_db`] |
//! | `GET /profile/*` | uploaded images, served from [`UploadDir`] |
//!
//! Every failure is answered with a status code and a `{ "message": ... }` body
//! (see [`ServerError`]).

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get};
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

mod config;
mod error;
pub mod members;
pub mod uploads;

pub use config::ServerConfig;
pub use error::ServerError;
pub use uploads::{UploadDir, PUBLIC_PREFIX};

/// Largest accepted request body (profile images included).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Shared state of the members routes.
#[derive(Clone, Debug)]
pub struct AppState {
    pub pool: PgPool,
    pub uploads: UploadDir,
}

impl AppState {
    pub fn new(pool: PgPool, config: &ServerConfig) -> Self {
        Self {
            pool,
            uploads: UploadDir::new(config.upload_dir.clone()),
        }
    }
}

/// Build the members API router.
pub fn router(state: AppState) -> Router {
    let images = ServeDir::new(state.uploads.root());

    Router::new()
        .route(
            "/api/members",
            get(members::list_members).post(members::create_member),
        )
        .route("/api/members/{id}", delete(members::delete_member))
        .route("/api/debug/db", get(members::debug_db))
        .nest_service(&format!("/{PUBLIC_PREFIX}"), images)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
