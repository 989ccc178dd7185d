use std::sync::Arc;

use crate::application::ports::{security::PasswordHasher, time::Clock};
use crate::application::{
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{User, UserId, UserRepository};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            clock,
        }
    }

    /// Resolve the mutation target, propagating NotFound when absent. Every
    /// command goes through here before touching the store.
    pub(super) async fn load_user(&self, id: UserId) -> ApplicationResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("user {id} not found")))
    }
}
