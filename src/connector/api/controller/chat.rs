use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::connector::api::Container;
use crate::domain::{ChatPrompt, DomainError};

/// POST /api/chat
///
/// The body is read as a string and parsed leniently: a body that is not a
/// JSON object with a usable `prompt` field fails validation the same way an
/// empty prompt does, so callers always see one of the two documented 400
/// messages rather than a framework-generated parse error.
pub async fn chat(
    State(container): State<Arc<Container>>,
    body: String,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let request =
        serde_json::from_str::<ChatPrompt>(&body).unwrap_or_else(|_| ChatPrompt::new(""));

    match container.generate_reply_use_case().execute(request).await {
        Ok(reply) => Ok(Json(
            serde_json::to_value(&reply).unwrap_or_else(|_| json!({})),
        )),
        Err(e) => Err(error_response(&e)),
    }
}

/// Map a domain failure to the wire contract: validation failures are 400
/// with the specific message; every other failure kind collapses to a
/// uniform 500 with the detail preserved for diagnostics.
fn error_response(err: &DomainError) -> (StatusCode, Json<Value>) {
    match err {
        DomainError::InvalidInput(msg) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": msg })))
        }
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Failed to generate response",
                "details": err.to_string(),
            })),
        ),
    }
}
