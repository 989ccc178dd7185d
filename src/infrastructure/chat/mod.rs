// src/infrastructure/chat/mod.rs
mod openai;
mod wire;
mod xai;

pub use openai::OpenAiChatGateway;
pub use xai::XaiChatGateway;
