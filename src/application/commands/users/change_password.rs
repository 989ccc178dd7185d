use super::{UserCommandService, password::validate_password};
use crate::{
    application::error::ApplicationResult,
    domain::user::{PasswordHash, UserId, UserUpdate},
};

pub struct ChangePasswordCommand {
    pub user_id: i64,
    pub new_password: String,
}

impl UserCommandService {
    pub async fn change_password(&self, command: ChangePasswordCommand) -> ApplicationResult<()> {
        let user_id = UserId::new(command.user_id)?;
        validate_password(&command.new_password)?;

        let user = self.load_user(user_id).await?;

        let hashed = self.password_hasher.hash(&command.new_password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let update = UserUpdate::new(user.id).with_password_hash(password_hash);
        self.user_repo.update(update).await?;

        Ok(())
    }
}
