// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    EmailAddress, NewUser, PasswordHash, User, UserId, UserRepository, UserUpdate,
    UserWithPostCount, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    bio: String,
    avatar_url: String,
    is_active: bool,
    is_staff: bool,
    date_joined: DateTime<Utc>,
    last_login: Option<DateTime<Utc>>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            email: EmailAddress::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            first_name: row.first_name,
            last_name: row.last_name,
            bio: row.bio,
            avatar_url: row.avatar_url,
            is_active: row.is_active,
            is_staff: row.is_staff,
            date_joined: row.date_joined,
            last_login: row.last_login,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct UserWithCountRow {
    #[sqlx(flatten)]
    user: UserRow,
    published_posts: i64,
}

impl TryFrom<UserWithCountRow> for UserWithPostCount {
    type Error = DomainError;

    fn try_from(row: UserWithCountRow) -> Result<Self, Self::Error> {
        Ok(UserWithPostCount {
            user: User::try_from(row.user)?,
            published_posts: row.published_posts.max(0) as u64,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            username,
            email,
            password_hash,
            first_name,
            last_name,
            bio,
            avatar_url,
            date_joined,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (username, email, password_hash, first_name, last_name, bio, avatar_url, date_joined, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
             RETURNING id, username, email, password_hash, first_name, last_name, bio, avatar_url,
                       is_active, is_staff, date_joined, last_login, updated_at",
        )
        .bind(username.as_str())
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .bind(first_name)
        .bind(last_name)
        .bind(bio)
        .bind(avatar_url)
        .bind(date_joined)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let UserUpdate {
            id,
            first_name,
            last_name,
            bio,
            avatar_url,
            password_hash,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE users SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(first_name) = first_name {
            builder.push(", first_name = ");
            builder.push_bind(first_name);
        }

        if let Some(last_name) = last_name {
            builder.push(", last_name = ");
            builder.push_bind(last_name);
        }

        if let Some(bio) = bio {
            builder.push(", bio = ");
            builder.push_bind(bio);
        }

        if let Some(avatar_url) = avatar_url {
            builder.push(", avatar_url = ");
            builder.push_bind(avatar_url);
        }

        if let Some(password_hash) = password_hash {
            let hash: String = password_hash.into();
            builder.push(", password_hash = ");
            builder.push_bind(hash);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(
            " RETURNING id, username, email, password_hash, first_name, last_name, bio, avatar_url,
                        is_active, is_staff, date_joined, last_login, updated_at",
        );

        let row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, password_hash, first_name, last_name, bio, avatar_url,
                    is_active, is_staff, date_joined, last_login, updated_at
             FROM users WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, password_hash, first_name, last_name, bio, avatar_url,
                    is_active, is_staff, date_joined, last_login, updated_at
             FROM users WHERE username = $1",
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, password_hash, first_name, last_name, bio, avatar_url,
                    is_active, is_staff, date_joined, last_login, updated_at
             FROM users WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn record_login(&self, id: UserId, at: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query("UPDATE users SET last_login = $1 WHERE id = $2")
            .bind(at)
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }
        Ok(())
    }

    async fn list_active(&self, limit: u64, offset: u64) -> DomainResult<Vec<UserWithPostCount>> {
        let rows = sqlx::query_as::<_, UserWithCountRow>(
            "SELECT u.id, u.username, u.email, u.password_hash, u.first_name, u.last_name, u.bio,
                    u.avatar_url, u.is_active, u.is_staff, u.date_joined, u.last_login, u.updated_at,
                    COUNT(p.id) FILTER (WHERE p.is_published) AS published_posts
             FROM users u
             LEFT JOIN posts p ON p.author_id = u.id
             WHERE u.is_active = TRUE
             GROUP BY u.id
             ORDER BY u.date_joined DESC, u.id DESC
             LIMIT $1 OFFSET $2",
        )
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(UserWithPostCount::try_from)
            .collect()
    }
}
