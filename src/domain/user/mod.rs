// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{BIO_MAX_LENGTH, NAME_MAX_LENGTH, NewUser, User, UserUpdate};
pub use repository::{UserRepository, UserWithPostCount};
pub use value_objects::{EmailAddress, PasswordHash, UserId, Username};
