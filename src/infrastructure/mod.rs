// src/infrastructure/mod.rs
pub mod chat;
pub mod database;
pub mod repositories;
pub mod security;
pub mod time;
