mod create;
mod delete;
mod policy;
mod publish;
mod service;
mod update;

pub use create::CreatePostCommand;
pub use delete::DeletePostCommand;
pub use publish::TogglePublishCommand;
pub use service::PostCommandService;
pub use update::UpdatePostCommand;
