// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, UserId, UserName, UserStatus};
use chrono::{DateTime, Utc};

/// Persisted user record. `created_at` and `updated_at` are owned by the
/// persistence layer; application code never assigns them.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub name: UserName,
    pub password_hash: PasswordHash,
    pub status: UserStatus,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for inserting a user. The identity and timestamps are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub name: UserName,
    pub password_hash: PasswordHash,
    pub status: UserStatus,
}

impl NewUser {
    pub fn new(email: Email, name: UserName, password_hash: PasswordHash) -> Self {
        Self {
            email,
            name,
            password_hash,
            status: UserStatus::default(),
        }
    }
}

/// Partial update applied through a named mutating operation. At least one
/// field must be set before the store accepts it.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub name: Option<UserName>,
    pub password_hash: Option<PasswordHash>,
    pub status: Option<UserStatus>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            name: None,
            password_hash: None,
            status: None,
            last_login_at: None,
        }
    }

    pub fn with_name(mut self, name: UserName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }

    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_last_login_at(mut self, at: DateTime<Utc>) -> Self {
        self.last_login_at = Some(at);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.password_hash.is_none()
            && self.status.is_none()
            && self.last_login_at.is_none()
    }
}
