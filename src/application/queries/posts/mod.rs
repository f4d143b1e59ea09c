mod get_by_slug;
mod list;
mod mine;
mod recent;
mod service;

pub use get_by_slug::GetPostBySlugQuery;
pub use list::ListPostsQuery;
pub use mine::MyPostsQuery;
pub use service::PostQueryService;
