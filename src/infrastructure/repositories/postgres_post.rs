// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostBody, PostId, PostReadRepository, PostSlug, PostTitle, PostUpdate,
    PostWithAuthor, PostWriteRepository,
};
use crate::domain::user::{UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    author_id: i64,
    body: String,
    excerpt: String,
    featured_image: String,
    is_published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: PostSlug::new(row.slug)?,
            author_id: UserId::new(row.author_id)?,
            body: PostBody::new(row.body)?,
            excerpt: row.excerpt,
            featured_image: row.featured_image,
            is_published: row.is_published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct PostWithAuthorRow {
    #[sqlx(flatten)]
    post: PostRow,
    author_username: String,
}

impl TryFrom<PostWithAuthorRow> for PostWithAuthor {
    type Error = DomainError;

    fn try_from(row: PostWithAuthorRow) -> Result<Self, Self::Error> {
        Ok(PostWithAuthor {
            post: Post::try_from(row.post)?,
            author_username: Username::new(row.author_username)?,
        })
    }
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            author_id,
            body,
            excerpt,
            featured_image,
            is_published,
            created_at,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (title, slug, author_id, body, excerpt, featured_image, is_published, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
             RETURNING id, title, slug, author_id, body, excerpt, featured_image, is_published, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(i64::from(author_id))
        .bind(body.as_str())
        .bind(excerpt)
        .bind(featured_image)
        .bind(is_published)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            body,
            excerpt,
            featured_image,
            is_published,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            let title_str: String = title.into();
            builder.push(", title = ");
            builder.push_bind(title_str);
        }

        if let Some(body) = body {
            let body_str: String = body.into();
            builder.push(", body = ");
            builder.push_bind(body_str);
        }

        if let Some(excerpt) = excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt);
        }

        if let Some(featured_image) = featured_image {
            builder.push(", featured_image = ");
            builder.push_bind(featured_image);
        }

        if let Some(is_published) = is_published {
            builder.push(", is_published = ");
            builder.push_bind(is_published);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(
            " RETURNING id, title, slug, author_id, body, excerpt, featured_image, is_published, created_at, updated_at",
        );

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, slug, author_id, body, excerpt, featured_image, is_published, created_at, updated_at
             FROM posts WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, slug, author_id, body, excerpt, featured_image, is_published, created_at, updated_at
             FROM posts WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn slug_exists(&self, slug: &PostSlug) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM posts WHERE slug = $1)")
            .bind(slug.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn list_visible(
        &self,
        viewer: Option<UserId>,
        limit: u64,
        offset: u64,
    ) -> DomainResult<Vec<PostWithAuthor>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT p.id, p.title, p.slug, p.author_id, p.body, p.excerpt, p.featured_image,
                    p.is_published, p.created_at, p.updated_at, u.username AS author_username
             FROM posts p JOIN users u ON u.id = p.author_id",
        );

        match viewer {
            Some(viewer) => {
                builder.push(" WHERE (p.is_published = TRUE OR p.author_id = ");
                builder.push_bind(i64::from(viewer));
                builder.push(")");
            }
            None => {
                builder.push(" WHERE p.is_published = TRUE");
            }
        }

        builder.push(" ORDER BY p.created_at DESC, p.id DESC LIMIT ");
        builder.push_bind(limit as i64);
        builder.push(" OFFSET ");
        builder.push_bind(offset as i64);

        let rows = builder
            .build_query_as::<PostWithAuthorRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(PostWithAuthor::try_from).collect()
    }

    async fn list_recent(&self, limit: u64) -> DomainResult<Vec<PostWithAuthor>> {
        let rows = sqlx::query_as::<_, PostWithAuthorRow>(
            "SELECT p.id, p.title, p.slug, p.author_id, p.body, p.excerpt, p.featured_image,
                    p.is_published, p.created_at, p.updated_at, u.username AS author_username
             FROM posts p JOIN users u ON u.id = p.author_id
             WHERE p.is_published = TRUE
             ORDER BY p.created_at DESC, p.id DESC
             LIMIT $1",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(PostWithAuthor::try_from).collect()
    }

    async fn list_by_author(
        &self,
        author: UserId,
        limit: u64,
        offset: u64,
    ) -> DomainResult<Vec<PostWithAuthor>> {
        let rows = sqlx::query_as::<_, PostWithAuthorRow>(
            "SELECT p.id, p.title, p.slug, p.author_id, p.body, p.excerpt, p.featured_image,
                    p.is_published, p.created_at, p.updated_at, u.username AS author_username
             FROM posts p JOIN users u ON u.id = p.author_id
             WHERE p.author_id = $1
             ORDER BY p.created_at DESC, p.id DESC
             LIMIT $2 OFFSET $3",
        )
        .bind(i64::from(author))
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(PostWithAuthor::try_from).collect()
    }

    async fn count_published_by_author(&self, author: UserId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM posts WHERE author_id = $1 AND is_published = TRUE",
        )
        .bind(i64::from(author))
        .fetch_one(&self.pool)
        .await
        .map(|count| count.max(0) as u64)
        .map_err(map_sqlx)
    }
}
