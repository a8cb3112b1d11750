//! HTTP API server

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

pub mod handlers;

/// Build the API router; every response may be read from any origin.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/message", get(handlers::message))
        .layer(CorsLayer::permissive())
}
