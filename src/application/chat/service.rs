use std::sync::Arc;

use crate::application::{
    dto::{ChatPrompt, ChatReplyDto},
    error::{ApplicationError, ApplicationResult},
    ports::chat::ChatCompletionGateway,
};

/// Thin forwarder in front of one chat-completion provider. Holds no state
/// beyond the gateway; each call is an independent request/response
/// translation.
pub struct ChatProxyService {
    gateway: Arc<dyn ChatCompletionGateway>,
}

impl ChatProxyService {
    pub fn new(gateway: Arc<dyn ChatCompletionGateway>) -> Self {
        Self { gateway }
    }

    pub async fn complete(
        &self,
        message: String,
        system_prompt: Option<String>,
    ) -> ApplicationResult<ChatReplyDto> {
        if message.trim().is_empty() {
            return Err(ApplicationError::validation("message is required"));
        }

        self.gateway
            .complete(ChatPrompt {
                message,
                system_prompt,
            })
            .await
    }
}
