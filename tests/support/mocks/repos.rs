// tests/support/mocks/repos.rs
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use inkpress::domain::errors::{DomainError, DomainResult};
use inkpress::domain::post::{NewPost, Post, PostId, PostSlug, PostUpdate, PostWithAuthor};
use inkpress::domain::user::{
    EmailAddress, NewUser, User, UserId, UserUpdate, UserWithPostCount, Username,
};

/// ユーザーと投稿を同じ可変ストアに持つインメモリリポジトリ。三つの
/// リポジトリトレイトを全部この一つの型で実装しているので、一覧の
/// 投稿数や作者結合が Postgres 実装と同じように整合する。
///
/// ソート順も本物に合わせる: 投稿は (created_at, id) 降順、ユーザーは
/// (date_joined, id) 降順。
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<Vec<User>>,
    posts: Mutex<Vec<Post>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// テスト準備用: ユーザーを検証なしでそのまま格納する。
    pub fn seed_user(&self, user: User) -> User {
        self.users.lock().unwrap().push(user.clone());
        user
    }

    /// テスト準備用: 投稿を検証なしでそのまま格納する。
    pub fn seed_post(&self, post: Post) -> Post {
        self.posts.lock().unwrap().push(post.clone());
        post
    }

    pub fn deactivate_user(&self, id: i64) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| i64::from(u.id) == id) {
            user.is_active = false;
        }
    }

    pub fn last_login_of(&self, id: i64) -> Option<DateTime<Utc>> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| i64::from(u.id) == id)
            .and_then(|u| u.last_login)
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn next_user_id(users: &[User]) -> i64 {
        users.iter().map(|u| i64::from(u.id)).max().unwrap_or(0) + 1
    }

    fn next_post_id(posts: &[Post]) -> i64 {
        posts.iter().map(|p| i64::from(p.id)).max().unwrap_or(0) + 1
    }

    /// 作者のユーザー名を結合する。呼び出し側は posts のロックを手放して
    /// から呼ぶこと。
    fn join_author(&self, post: Post) -> DomainResult<PostWithAuthor> {
        let users = self.users.lock().unwrap();
        let author = users
            .iter()
            .find(|u| u.id == post.author_id)
            .ok_or_else(|| DomainError::Persistence("post author missing".into()))?;
        Ok(PostWithAuthor {
            author_username: author.username.clone(),
            post,
        })
    }

    fn join_all(&self, posts: Vec<Post>) -> DomainResult<Vec<PostWithAuthor>> {
        posts.into_iter().map(|p| self.join_author(p)).collect()
    }
}

/// (created_at, id) 降順。同時刻なら id の大きい方が先。
fn newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then(i64::from(b.id).cmp(&i64::from(a.id)))
    });
}

fn page<T>(items: Vec<T>, limit: u64, offset: u64) -> Vec<T> {
    items
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect()
}

/* -------------------------------- UserRepository -------------------------------- */

#[async_trait]
impl inkpress::domain::user::UserRepository for InMemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email already exists".into()));
        }

        let id = UserId::new(Self::next_user_id(&users)).map_err(|_| {
            DomainError::Persistence("in-memory store produced an invalid id".into())
        })?;
        let user = User {
            id,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            bio: new_user.bio,
            avatar_url: new_user.avatar_url,
            is_active: true,
            is_staff: false,
            date_joined: new_user.date_joined,
            last_login: None,
            updated_at: new_user.date_joined,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        if let Some(first_name) = update.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            user.last_name = last_name;
        }
        if let Some(bio) = update.bio {
            user.bio = bio;
        }
        if let Some(avatar_url) = update.avatar_url {
            user.avatar_url = avatar_url;
        }
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        user.updated_at = update.updated_at;
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == *username)
            .cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn record_login(&self, id: UserId, at: DateTime<Utc>) -> DomainResult<()> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.record_login(at);
        Ok(())
    }

    async fn list_active(&self, limit: u64, offset: u64) -> DomainResult<Vec<UserWithPostCount>> {
        let mut active: Vec<User> = self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.is_active)
            .cloned()
            .collect();
        active.sort_by(|a, b| {
            b.date_joined
                .cmp(&a.date_joined)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });

        let posts = self.posts.lock().unwrap();
        let listed = page(active, limit, offset)
            .into_iter()
            .map(|user| {
                let published_posts = posts
                    .iter()
                    .filter(|p| p.author_id == user.id && p.is_published)
                    .count() as u64;
                UserWithPostCount {
                    user,
                    published_posts,
                }
            })
            .collect();
        Ok(listed)
    }
}

/* -------------------------------- PostWriteRepository -------------------------------- */

#[async_trait]
impl inkpress::domain::post::PostWriteRepository for InMemoryStore {
    async fn insert(&self, new_post: NewPost) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        if posts.iter().any(|p| p.slug == new_post.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let id = PostId::new(Self::next_post_id(&posts)).map_err(|_| {
            DomainError::Persistence("in-memory store produced an invalid id".into())
        })?;
        let post = Post {
            id,
            title: new_post.title,
            slug: new_post.slug,
            author_id: new_post.author_id,
            body: new_post.body,
            excerpt: new_post.excerpt,
            featured_image: new_post.featured_image,
            is_published: new_post.is_published,
            created_at: new_post.created_at,
            updated_at: new_post.created_at,
        };
        posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(body) = update.body {
            post.body = body;
        }
        if let Some(excerpt) = update.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(featured_image) = update.featured_image {
            post.featured_image = featured_image;
        }
        if let Some(is_published) = update.is_published {
            post.is_published = is_published;
        }
        post.updated_at = update.updated_at;
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

/* -------------------------------- PostReadRepository -------------------------------- */

#[async_trait]
impl inkpress::domain::post::PostReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.slug == *slug)
            .cloned())
    }

    async fn slug_exists(&self, slug: &PostSlug) -> DomainResult<bool> {
        Ok(self.posts.lock().unwrap().iter().any(|p| p.slug == *slug))
    }

    async fn list_visible(
        &self,
        viewer: Option<UserId>,
        limit: u64,
        offset: u64,
    ) -> DomainResult<Vec<PostWithAuthor>> {
        let mut visible: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.visible_to(viewer))
            .cloned()
            .collect();
        newest_first(&mut visible);
        self.join_all(page(visible, limit, offset))
    }

    async fn list_recent(&self, limit: u64) -> DomainResult<Vec<PostWithAuthor>> {
        let mut published: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_published)
            .cloned()
            .collect();
        newest_first(&mut published);
        published.truncate(limit as usize);
        self.join_all(published)
    }

    async fn list_by_author(
        &self,
        author: UserId,
        limit: u64,
        offset: u64,
    ) -> DomainResult<Vec<PostWithAuthor>> {
        let mut own: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.author_id == author)
            .cloned()
            .collect();
        newest_first(&mut own);
        self.join_all(page(own, limit, offset))
    }

    async fn count_published_by_author(&self, author: UserId) -> DomainResult<u64> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.author_id == author && p.is_published)
            .count() as u64)
    }
}
