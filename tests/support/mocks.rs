use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use userhub::application::dto::{ChatPrompt, ChatReplyDto};
use userhub::application::error::ApplicationResult;
use userhub::application::ports::{
    chat::ChatCompletionGateway, security::PasswordHasher, time::Clock,
};
use userhub::domain::errors::{DomainError, DomainResult};
use userhub::domain::user::{
    Email, NewUser, Page, PageRequest, User, UserId, UserRepository, UserSearchCondition,
    UserUpdate,
};

/// Hash-map backed repository implementing the same predicate and pagination
/// semantics as the Postgres implementation.
pub struct InMemoryUserRepo {
    inner: Mutex<HashMap<i64, User>>,
}

impl InMemoryUserRepo {
    pub fn new(users: HashMap<i64, User>) -> Self {
        Self {
            inner: Mutex::new(users),
        }
    }

    pub fn empty() -> Self {
        Self::new(HashMap::new())
    }

    pub fn user(&self, id: i64) -> Option<User> {
        self.inner.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    fn paginate(mut users: Vec<User>, page: PageRequest) -> Page<User> {
        users.sort_by_key(|user| i64::from(user.id));
        let total = users.len() as u64;
        let items = users
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Page::new(items, total, page)
    }

    fn matches(user: &User, condition: &UserSearchCondition) -> bool {
        if let Some(email) = condition.email_filter() {
            if user.email.as_str() != email {
                return false;
            }
        }
        if let Some(name) = condition.name_filter() {
            if !user.name.as_str().contains(name) {
                return false;
            }
        }
        condition.date_range.contains(Some(user.created_at))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut guard = self.inner.lock().unwrap();

        if guard.values().any(|user| user.email == new_user.email) {
            return Err(DomainError::Conflict("email already in use".into()));
        }

        let id = guard.keys().max().copied().unwrap_or(0) + 1;
        let now = Utc::now();
        let user = User {
            id: UserId::new(id)?,
            email: new_user.email,
            name: new_user.name,
            password_hash: new_user.password_hash,
            status: new_user.status,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        };
        guard.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .values()
            .find(|user| user.email == *email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> DomainResult<bool> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .values()
            .any(|user| user.email == *email))
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        if update.is_empty() {
            return Err(DomainError::Validation(
                "no fields provided for update".into(),
            ));
        }

        let mut guard = self.inner.lock().unwrap();
        let user = guard
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(status) = update.status {
            user.status = status;
        }
        if let Some(last_login_at) = update.last_login_at {
            user.last_login_at = Some(last_login_at);
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        self.inner
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.inner.lock().unwrap().len() as u64)
    }

    async fn find_by_name_containing(
        &self,
        name: &str,
        page: PageRequest,
    ) -> DomainResult<Page<User>> {
        let users: Vec<User> = self
            .inner
            .lock()
            .unwrap()
            .values()
            .filter(|user| user.name.as_str().contains(name))
            .cloned()
            .collect();
        Ok(Self::paginate(users, page))
    }

    async fn search_by_condition(
        &self,
        condition: &UserSearchCondition,
        page: PageRequest,
    ) -> DomainResult<Page<User>> {
        let users: Vec<User> = self
            .inner
            .lock()
            .unwrap()
            .values()
            .filter(|user| Self::matches(user, condition))
            .cloned()
            .collect();
        Ok(Self::paginate(users, page))
    }
}

/// Deterministic stand-in for argon2: prefixes instead of hashing.
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed::{password}"))
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Gateway double that records every prompt and always answers with the
/// configured reply.
pub struct ScriptedChatGateway {
    reply: ChatReplyDto,
    pub seen: Mutex<Vec<ChatPrompt>>,
}

impl ScriptedChatGateway {
    pub fn new(reply: ChatReplyDto) -> Self {
        Self {
            reply,
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ChatCompletionGateway for ScriptedChatGateway {
    async fn complete(&self, prompt: ChatPrompt) -> ApplicationResult<ChatReplyDto> {
        self.seen.lock().unwrap().push(prompt);
        Ok(self.reply.clone())
    }
}
