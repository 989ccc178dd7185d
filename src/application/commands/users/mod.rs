mod change_password;
mod change_status;
mod create;
mod delete;
mod password;
mod record_login;
mod service;
mod update;

pub use change_password::ChangePasswordCommand;
pub use change_status::ChangeStatusCommand;
pub use create::CreateUserCommand;
pub use service::UserCommandService;
pub use update::UpdateUserInfoCommand;
