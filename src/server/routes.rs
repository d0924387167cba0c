//! Router configuration for the web server.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        // Analysis pipeline
        .route("/summarize", post(handlers::summarize))
        .route("/upload", post(handlers::upload))
        .route("/risks", post(handlers::risks))
        .route("/qa", post(handlers::qa))
        .route("/compare", post(handlers::compare))
        // Contact form and report download
        .route("/contact", post(handlers::contact))
        .route("/download", post(handlers::download))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
