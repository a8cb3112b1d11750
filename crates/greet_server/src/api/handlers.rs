//! API handlers

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello World!",
    })
}

/// GET /message
pub async fn message() -> Json<MessageResponse> {
    tracing::info!("GET /message contacted");
    Json(MessageResponse {
        message: "Hello from the server!",
    })
}
