// src/presentation/http/controllers/mod.rs
pub mod chat;
pub mod users;
