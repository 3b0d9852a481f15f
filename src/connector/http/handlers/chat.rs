use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::info;

use crate::connector::api::Container;
use crate::connector::http::ApiError;
use crate::domain::{ChatReply, ChatRequest};

/// `POST /api/chat`: `{ message }` in, `{ content, relatedProducts }` out.
pub async fn chat(
    State(container): State<Arc<Container>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    info!("Chat request ({} chars)", request.message.chars().count());

    let reply = container.chat_use_case().execute(&request.message).await?;
    Ok(Json(reply))
}
