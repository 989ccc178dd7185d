#![allow(dead_code)]

pub mod mocks;

use chrono::{DateTime, Utc};
use userhub::domain::user::{Email, PasswordHash, User, UserId, UserName, UserStatus};

pub fn make_user(id: i64, email: &str, name: &str, created_at: DateTime<Utc>) -> User {
    User {
        id: UserId::new(id).unwrap(),
        email: Email::new(email).unwrap(),
        name: UserName::new(name).unwrap(),
        password_hash: PasswordHash::new("hashed::password1").unwrap(),
        status: UserStatus::Active,
        last_login_at: None,
        created_at,
        updated_at: created_at,
    }
}
