// src/presentation/http/controllers/chat.rs
use crate::application::dto::ChatReplyDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub system_prompt: Option<String>,
}

/// The xAI route takes the message only; no system prompt is forwarded.
#[derive(Debug, Deserialize, ToSchema)]
pub struct XaiChatRequest {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/chat/completions",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "First completion choice from the OpenAI-compatible upstream.", body = ChatReplyDto),
        (status = 400, description = "Blank message.", body = crate::presentation::http::error::ErrorBody),
        (status = 500, description = "Upstream failure.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Chat"
)]
pub async fn openai_completion(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ChatRequest>,
) -> HttpResult<Json<ChatReplyDto>> {
    state
        .services
        .openai_chat
        .complete(payload.message, payload.system_prompt)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/xai/completions",
    request_body = XaiChatRequest,
    responses(
        (status = 200, description = "First completion choice from the xAI upstream.", body = ChatReplyDto),
        (status = 400, description = "Blank message.", body = crate::presentation::http::error::ErrorBody),
        (status = 500, description = "Upstream failure.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Chat"
)]
pub async fn xai_completion(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<XaiChatRequest>,
) -> HttpResult<Json<ChatReplyDto>> {
    state
        .services
        .xai_chat
        .complete(payload.message, None)
        .await
        .into_http()
        .map(Json)
}
