use super::UserCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::user::{UserId, UserUpdate},
};

impl UserCommandService {
    /// Stamps the user's last login time with the current clock reading.
    pub async fn record_login(&self, user_id: i64) -> ApplicationResult<()> {
        let user_id = UserId::new(user_id)?;

        let user = self.load_user(user_id).await?;

        let update = UserUpdate::new(user.id).with_last_login_at(self.clock.now());
        self.user_repo.update(update).await?;

        Ok(())
    }
}
