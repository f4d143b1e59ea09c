// src/domain/post/mod.rs
pub mod entity;
pub mod repository;
pub mod slug;
pub mod value_objects;

pub use entity::{NewPost, Post, PostUpdate};
pub use repository::{PostReadRepository, PostWithAuthor, PostWriteRepository};
pub use slug::SlugAssigner;
pub use value_objects::{PostBody, PostId, PostSlug, PostTitle};
