use super::wire::{ChatCompletionRequest, ChatCompletionResponse};
use crate::application::{
    dto::{ChatPrompt, ChatReplyDto},
    error::{ApplicationError, ApplicationResult},
    ports::chat::ChatCompletionGateway,
};
use async_trait::async_trait;

/// Chat-completions client for an OpenAI-compatible endpoint. Authenticates
/// with a bearer token.
#[derive(Clone)]
pub struct OpenAiChatGateway {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiChatGateway {
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
impl ChatCompletionGateway for OpenAiChatGateway {
    async fn complete(&self, prompt: ChatPrompt) -> ApplicationResult<ChatReplyDto> {
        let request = ChatCompletionRequest::from_prompt(&self.model, prompt);

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "openai upstream rejected chat completion");
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
