// src/application/ports/chat.rs
use crate::application::{
    ApplicationResult,
    dto::{ChatPrompt, ChatReplyDto},
};
use async_trait::async_trait;

/// Outbound boundary to a chat-completion provider. Implementations are
/// stateless request/response translators over HTTP.
#[async_trait]
pub trait ChatCompletionGateway: Send + Sync {
    async fn complete(&self, prompt: ChatPrompt) -> ApplicationResult<ChatReplyDto>;
}
