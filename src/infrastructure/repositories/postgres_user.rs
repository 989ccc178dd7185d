// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Email, NewUser, Page, PageRequest, PasswordHash, User, UserId, UserName, UserRepository,
    UserSearchCondition, UserStatus, UserUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const USER_COLUMNS: &str =
    "id, email, name, password_hash, status, last_login_at, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Appends the conjunctive WHERE clause for a search condition. Both the
    /// content query and the count query go through here so they always run
    /// the identical predicate set.
    fn apply_condition(builder: &mut QueryBuilder<Postgres>, condition: &UserSearchCondition) {
        let mut prefix = " WHERE ";

        if let Some(email) = condition.email_filter() {
            builder.push(prefix);
            prefix = " AND ";
            builder.push("email = ");
            builder.push_bind(email.to_owned());
        }

        if let Some(name) = condition.name_filter() {
            builder.push(prefix);
            prefix = " AND ";
            builder.push("name LIKE ");
            builder.push_bind(format!("%{name}%"));
        }

        match (condition.date_range.from(), condition.date_range.to()) {
            (Some(from), Some(to)) => {
                builder.push(prefix);
                builder.push("created_at >= ");
                builder.push_bind(from);
                builder.push(" AND created_at <= ");
                builder.push_bind(to);
            }
            (Some(from), None) => {
                builder.push(prefix);
                builder.push("created_at >= ");
                builder.push_bind(from);
            }
            (None, Some(to)) => {
                builder.push(prefix);
                builder.push("created_at <= ");
                builder.push_bind(to);
            }
            (None, None) => {}
        }
    }

    async fn fetch_page(
        &self,
        condition: Option<&UserSearchCondition>,
        page: PageRequest,
    ) -> DomainResult<Page<User>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {USER_COLUMNS} FROM users"));
        if let Some(condition) = condition {
            Self::apply_condition(&mut builder, condition);
        }
        builder.push(" ORDER BY id LIMIT ");
        builder.push_bind(page.limit());
        builder.push(" OFFSET ");
        builder.push_bind(page.offset());

        let rows = builder
            .build_query_as::<UserRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let users = rows
            .into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(1) FROM users");
        if let Some(condition) = condition {
            Self::apply_condition(&mut count_builder, condition);
        }

        let total = count_builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(Page::new(users, total as u64, page))
    }

    fn build_update_query(update: &UserUpdate) -> QueryBuilder<Postgres> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET ");

        if let Some(name) = &update.name {
            builder.push("name = ");
            builder.push_bind(name.as_str().to_owned());
            builder.push(", ");
        }

        if let Some(password_hash) = &update.password_hash {
            builder.push("password_hash = ");
            builder.push_bind(password_hash.as_str().to_owned());
            builder.push(", ");
        }

        if let Some(status) = update.status {
            builder.push("status = ");
            builder.push_bind(status.as_str());
            builder.push(", ");
        }

        if let Some(last_login_at) = update.last_login_at {
            builder.push("last_login_at = ");
            builder.push_bind(last_login_at);
            builder.push(", ");
        }

        builder.push("updated_at = now() WHERE id = ");
        builder.push_bind(i64::from(update.id));
        builder.push(format!(" RETURNING {USER_COLUMNS}"));

        builder
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    email: String,
    name: String,
    password_hash: String,
    status: String,
    last_login_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            email: Email::new(row.email)?,
            name: UserName::new(row.name)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            status: row.status.parse::<UserStatus>()?,
            last_login_at: row.last_login_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            email,
            name,
            password_hash,
            status,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (email, name, password_hash, status)
             VALUES ($1, $2, $3, $4)
             RETURNING id, email, name, password_hash, status, last_login_at, created_at, updated_at",
        )
        .bind(email.as_str())
        .bind(name.as_str())
        .bind(password_hash.as_str())
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, name, password_hash, status, last_login_at, created_at, updated_at
             FROM users WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, name, password_hash, status, last_login_at, created_at, updated_at
             FROM users WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        if update.is_empty() {
            return Err(DomainError::Validation(
                "no fields provided for update".into(),
            ));
        }

        let mut builder = Self::build_update_query(&update);

        let row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }

        Ok(())
    }

    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM users")
            .fetch_one(&self.pool)
            .await
            .map(|count| count as u64)
            .map_err(map_sqlx)
    }

    async fn find_by_name_containing(
        &self,
        name: &str,
        page: PageRequest,
    ) -> DomainResult<Page<User>> {
        // single-predicate special case of the composite search
        let condition =
            UserSearchCondition::new(None, Some(name.to_owned()), Default::default());
        self.fetch_page(Some(&condition), page).await
    }

    async fn search_by_condition(
        &self,
        condition: &UserSearchCondition,
        page: PageRequest,
    ) -> DomainResult<Page<User>> {
        if condition.is_empty() {
            return self.fetch_page(None, page).await;
        }
        self.fetch_page(Some(condition), page).await
    }
}
