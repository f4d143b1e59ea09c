mod change_password;
mod login;
mod logout;
mod password;
mod refresh;
mod register;
mod reset;
mod service;
mod update;

pub use change_password::ChangePasswordCommand;
pub use login::{LoginResult, LoginUserCommand};
pub use logout::LogoutCommand;
pub use refresh::RefreshTokenCommand;
pub use register::RegisterUserCommand;
pub use reset::RequestPasswordResetCommand;
pub use service::UserCommandService;
pub use update::UpdateProfileCommand;
