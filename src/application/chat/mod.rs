// src/application/chat/mod.rs
mod service;

pub use service::ChatProxyService;
