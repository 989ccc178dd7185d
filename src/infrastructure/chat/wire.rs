//! Wire format of the chat-completions protocol shared by both upstream
//! providers. Only the fields the proxy actually reads are modelled.

use crate::application::{
    dto::{ChatPrompt, ChatReplyDto},
    error::{ApplicationError, ApplicationResult},
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ChatCompletionRequest {
    pub fn from_prompt(model: &str, prompt: ChatPrompt) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = prompt.system_prompt {
            messages.push(Message {
                role: "system".into(),
                content: system,
            });
        }
        messages.push(Message {
            role: "user".into(),
            content: prompt.message,
        });

        Self {
            model: model.to_owned(),
            messages,
            temperature: Some(DEFAULT_TEMPERATURE),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub model: String,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Message,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub total_tokens: u32,
}

impl ChatCompletionResponse {
    /// First-choice extraction; the proxy never requests more than one.
    pub fn into_reply(self) -> ApplicationResult<ChatReplyDto> {
        let choice = self.choices.into_iter().next().ok_or_else(|| {
            ApplicationError::infrastructure("chat completion returned no choices")
        })?;

        Ok(ChatReplyDto {
            id: self.id,
            model: self.model,
            content: choice.message.content,
            total_tokens: self.usage.map(|usage| usage.total_tokens),
        })
    }
}
