use axum::Json;
use serde_json::{json, Value};

/// GET /
///
/// Static service descriptor; performs no work and has no failure modes.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "running",
        "message": "AI Chat Backend with Groq API",
        "endpoints": {
            "chat": "POST /api/chat",
            "health": "GET /",
        },
    }))
}
