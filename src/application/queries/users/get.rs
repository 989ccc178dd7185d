use super::UserQueryService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, UserId},
};

impl UserQueryService {
    /// Lookup where presence is required; absence is a NotFound error.
    pub async fn get_user(&self, user_id: i64) -> ApplicationResult<UserDto> {
        let user_id = UserId::new(user_id)?;

        self.user_repo
            .find_by_id(user_id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(format!("user {user_id} not found")))
    }

    /// Lookup where absence is an ordinary outcome, not an error.
    pub async fn find_by_email(&self, email: &str) -> ApplicationResult<Option<UserDto>> {
        let email = Email::new(email)?;

        Ok(self
            .user_repo
            .find_by_email(&email)
            .await?
            .map(Into::into))
    }

    pub async fn exists_by_email(&self, email: &str) -> ApplicationResult<bool> {
        let email = Email::new(email)?;
        Ok(self.user_repo.exists_by_email(&email).await?)
    }
}
