use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Plain acknowledgement that the service is up.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "API is working!"
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": "0.1.0",
        "service": "ats-api"
    }))
}
