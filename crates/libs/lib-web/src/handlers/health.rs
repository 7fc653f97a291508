//! # Health Handler

use axum::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = "foodgram-backend";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// **Route**: `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
    })
}
