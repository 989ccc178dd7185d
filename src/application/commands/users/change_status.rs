use super::UserCommandService;
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{UserId, UserStatus, UserUpdate},
};

pub struct ChangeStatusCommand {
    pub user_id: i64,
    pub status: UserStatus,
}

impl UserCommandService {
    /// Transitions are deliberately unconstrained: any status may be set
    /// from any other status.
    pub async fn change_status(&self, command: ChangeStatusCommand) -> ApplicationResult<UserDto> {
        let user_id = UserId::new(command.user_id)?;

        let user = self.load_user(user_id).await?;

        let update = UserUpdate::new(user.id).with_status(command.status);
        let updated = self.user_repo.update(update).await?;

        Ok(updated.into())
    }
}
