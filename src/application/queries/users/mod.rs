mod get;
mod search;
mod service;

pub use search::SearchUsersQuery;
pub use service::UserQueryService;
