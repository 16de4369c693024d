use axum::Json;
use serde_json::{json, Value};

use super::health::SERVICE_NAME;

/// API information endpoint
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /api/search": "Search Airbnb listings with full options",
            "POST /api/search/simple": "Search Airbnb listings (simplified)",
            "GET /api/health": "Health check"
        }
    }))
}
