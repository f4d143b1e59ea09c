// tests/support/builders.rs
use chrono::{DateTime, Utc};

use inkpress::domain::post::entity::derive_excerpt;
use inkpress::domain::post::{Post, PostBody, PostId, PostSlug, PostTitle};
use inkpress::domain::user::{EmailAddress, PasswordHash, User, UserId, Username};

use super::mocks::fixed_now;

/// `DummyPasswordHasher` と同じ擬似ハッシュ形式でユーザーを組み立てる。
pub struct UserBuilder {
    id: i64,
    username: String,
    email: String,
    password: String,
    active: bool,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "sup3r-secret".into(),
            active: true,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn build(self) -> User {
        let now = fixed_now();
        User {
            id: UserId::new(self.id).unwrap(),
            username: Username::new(self.username).unwrap(),
            email: EmailAddress::new(self.email).unwrap(),
            password_hash: PasswordHash::new(format!("hashed::{}", self.password)).unwrap(),
            first_name: String::new(),
            last_name: String::new(),
            bio: String::new(),
            avatar_url: String::new(),
            is_active: self.active,
            is_staff: false,
            date_joined: now,
            last_login: None,
            updated_at: now,
        }
    }
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct PostBuilder {
    id: i64,
    title: String,
    slug: String,
    body: String,
    published: bool,
    author_id: i64,
    created_at: DateTime<Utc>,
}

impl PostBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Post".into(),
            slug: "test-post".into(),
            body: "Test body".into(),
            published: false,
            author_id: 1,
            created_at: fixed_now(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> Post {
        let excerpt = derive_excerpt(&self.body);
        Post {
            id: PostId::new(self.id).unwrap(),
            title: PostTitle::new(self.title).unwrap(),
            slug: PostSlug::new(self.slug).unwrap(),
            author_id: UserId::new(self.author_id).unwrap(),
            body: PostBody::new(self.body).unwrap(),
            excerpt,
            featured_image: String::new(),
            is_published: self.published,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

impl Default for PostBuilder {
    fn default() -> Self {
        Self::new()
    }
}
