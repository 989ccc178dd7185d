use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Provider-independent chat-completion request passed to a gateway. The
/// gateway translates it into the provider's wire format.
#[derive(Debug, Clone)]
pub struct ChatPrompt {
    pub message: String,
    pub system_prompt: Option<String>,
}

/// Provider-independent view of a chat-completion response: the first
/// choice's content plus enough metadata to identify the exchange.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatReplyDto {
    pub id: String,
    pub model: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u32>,
}
