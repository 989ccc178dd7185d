// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, User, UserUpdate};
use crate::domain::user::search::{Page, PageRequest, UserSearchCondition};
use crate::domain::user::value_objects::{Email, UserId};
use async_trait::async_trait;

/// Store boundary for user records. Email uniqueness is enforced here: a
/// duplicate insert surfaces as `DomainError::Conflict`, never as a generic
/// persistence failure.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    async fn exists_by_email(&self, email: &Email) -> DomainResult<bool>;

    async fn update(&self, update: UserUpdate) -> DomainResult<User>;

    async fn delete(&self, id: UserId) -> DomainResult<()>;

    async fn count(&self) -> DomainResult<u64>;

    /// Case-sensitive substring search on the name, paginated.
    async fn find_by_name_containing(
        &self,
        name: &str,
        page: PageRequest,
    ) -> DomainResult<Page<User>>;

    /// Conjunctive search over the optional condition fields. An empty
    /// condition lists all records; the total count always reflects the same
    /// predicate set as the returned slice.
    async fn search_by_condition(
        &self,
        condition: &UserSearchCondition,
        page: PageRequest,
    ) -> DomainResult<Page<User>>;
}
