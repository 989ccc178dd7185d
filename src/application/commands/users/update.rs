use super::UserCommandService;
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{UserId, UserName, UserUpdate},
};

pub struct UpdateUserInfoCommand {
    pub user_id: i64,
    pub name: String,
}

impl UserCommandService {
    pub async fn update_user_info(
        &self,
        command: UpdateUserInfoCommand,
    ) -> ApplicationResult<UserDto> {
        let user_id = UserId::new(command.user_id)?;
        let name = UserName::new(command.name)?;

        let user = self.load_user(user_id).await?;

        let update = UserUpdate::new(user.id).with_name(name);
        let updated = self.user_repo.update(update).await?;

        Ok(updated.into())
    }
}
