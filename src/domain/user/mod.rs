// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod search;
pub mod value_objects;

pub use entity::{NewUser, User, UserUpdate};
pub use repository::UserRepository;
pub use search::{DEFAULT_PAGE_SIZE, DateRange, MAX_PAGE_SIZE, Page, PageRequest, UserSearchCondition};
pub use value_objects::{Email, PasswordHash, UserId, UserName, UserStatus};
