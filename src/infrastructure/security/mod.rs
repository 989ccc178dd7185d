// src/infrastructure/security/mod.rs
mod password;

pub use password::Argon2PasswordHasher;
