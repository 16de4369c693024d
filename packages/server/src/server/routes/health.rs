use axum::{http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const SERVICE_NAME: &str = "Airbnb Search API";

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    service: String,
    timestamp: DateTime<Utc>,
}

/// Health check endpoint
///
/// The service holds no connections of its own; if it can answer, it is up.
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "OK".to_string(),
            service: SERVICE_NAME.to_string(),
            timestamp: Utc::now(),
        }),
    )
}
