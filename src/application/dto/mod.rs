pub mod chat;
pub mod pagination;
pub mod users;

pub use chat::{ChatPrompt, ChatReplyDto};
pub use pagination::PageDto;
pub use users::UserDto;
