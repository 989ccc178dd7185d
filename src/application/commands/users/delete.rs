use super::UserCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::user::{Email, UserId},
};

impl UserCommandService {
    /// Deletion is unconditional: no soft-delete and no dependent records.
    pub async fn delete_user(&self, user_id: i64) -> ApplicationResult<()> {
        let user_id = UserId::new(user_id)?;

        let user = self.load_user(user_id).await?;
        self.user_repo.delete(user.id).await?;

        tracing::info!(user_id = %user.id, "user deleted");
        Ok(())
    }

    /// Email variant: resolve the record first, then delete by its identity.
    pub async fn delete_user_by_email(&self, email: &str) -> ApplicationResult<()> {
        let email = Email::new(email)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("user {email} not found")))?;

        self.user_repo.delete(user.id).await?;
        Ok(())
    }
}
