use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::connector::api::Container;

/// `GET /health`: liveness plus whether the completion API key is present.
pub async fn health(State(container): State<Arc<Container>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "model": container.completion_model(),
        "assistantConfigured": container.assistant_configured(),
    }))
}
