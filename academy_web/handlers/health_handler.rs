use axum::Json;
use serde_json::{Value, json};

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "Academy of Elements server is running" }))
}

pub async fn test_endpoint() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "API is reachable" }))
}
