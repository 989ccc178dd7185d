use super::wire::{ChatCompletionRequest, ChatCompletionResponse};
use crate::application::{
    dto::{ChatPrompt, ChatReplyDto},
    error::{ApplicationError, ApplicationResult},
    ports::chat::ChatCompletionGateway,
};
use async_trait::async_trait;

/// Chat-completions client for the xAI endpoint. Speaks the same wire format
/// as the OpenAI gateway but authenticates with an `x-api-key` header.
#[derive(Clone)]
pub struct XaiChatGateway {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl XaiChatGateway {
    pub fn new(http: reqwest::Client, base_url: String, api_key: String, model: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
            model,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatCompletionGateway for XaiChatGateway {
    async fn complete(&self, prompt: ChatPrompt) -> ApplicationResult<ChatReplyDto> {
        let request = ChatCompletionRequest::from_prompt(&self.model, prompt);

        let response = self
            .http
            .post(self.completions_url())
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "xai upstream rejected chat completion");
            return Err(ApplicationError::infrastructure(format!(
                "chat provider responded with status {status}"
            )));
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .into_reply()
    }
}
