use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub bio: String,
    pub avatar_url: String,
    pub posts_count: u64,
    pub date_joined: DateTime<Utc>,
    pub is_active: bool,
}

impl UserDto {
    pub fn from_parts(user: User, posts_count: u64) -> Self {
        let full_name = user.full_name();
        Self {
            id: user.id.into(),
            full_name,
            username: user.username.into(),
            email: user.email.into(),
            first_name: user.first_name,
            last_name: user.last_name,
            bio: user.bio,
            avatar_url: user.avatar_url,
            posts_count,
            date_joined: user.date_joined,
            is_active: user.is_active,
        }
    }
}
