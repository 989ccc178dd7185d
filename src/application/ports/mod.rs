// src/application/ports/mod.rs
pub mod chat;
pub mod security;
pub mod time;

pub use chat::ChatCompletionGateway;
pub use security::PasswordHasher;
pub use time::Clock;
