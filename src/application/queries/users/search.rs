use super::UserQueryService;
use crate::{
    application::{
        dto::{PageDto, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{PageRequest, UserSearchCondition},
};
use chrono::{DateTime, Utc};

pub struct SearchUsersQuery {
    pub email: Option<String>,
    pub name: Option<String>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
    pub page: PageRequest,
}

impl UserQueryService {
    /// Name-only convenience lookup. Unlike the composite search, a blank
    /// name here is a caller error rather than an absent filter.
    pub async fn find_by_name_containing(
        &self,
        name: &str,
        page: PageRequest,
    ) -> ApplicationResult<PageDto<UserDto>> {
        if name.trim().is_empty() {
            return Err(ApplicationError::validation("search name is required"));
        }

        let result = self.user_repo.find_by_name_containing(name, page).await?;
        Ok(result.into())
    }

    /// Composite conjunctive search; an empty condition lists everything.
    pub async fn search_users(&self, query: SearchUsersQuery) -> ApplicationResult<PageDto<UserDto>> {
        let condition = UserSearchCondition::with_bounds(
            query.email,
            query.name,
            query.created_from,
            query.created_to,
        )?;

        let result = self
            .user_repo
            .search_by_condition(&condition, query.page)
            .await?;

        Ok(result.into())
    }
}
