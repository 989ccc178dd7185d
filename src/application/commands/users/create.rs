use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, UserName},
};

pub struct CreateUserCommand {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl UserCommandService {
    /// Validates the input, rejects duplicate emails with a conflict, hashes
    /// the password and persists the record. Concurrent creates racing past
    /// the existence check are caught by the store's uniqueness constraint,
    /// which surfaces as the same conflict.
    pub async fn create_user(&self, command: CreateUserCommand) -> ApplicationResult<UserDto> {
        let email = Email::new(command.email)?;
        let name = UserName::new(command.name)?;
        validate_password(&command.password)?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(ApplicationError::conflict(format!(
                "email already in use: {email}"
            )));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let user = self
            .user_repo
            .insert(NewUser::new(email, name, password_hash))
            .await?;

        tracing::info!(user_id = %user.id, "user created");
        Ok(user.into())
    }
}
