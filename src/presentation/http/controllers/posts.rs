// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{
        CreatePostCommand, DeletePostCommand, TogglePublishCommand, UpdatePostCommand,
    },
    dto::{PostDto, PostSummaryDto},
    queries::posts::{GetPostBySlugQuery, ListPostsQuery, MyPostsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::json;

fn default_limit() -> u32 {
    20
}

#[derive(Debug, Deserialize)]
pub struct PostListParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub is_published: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub is_published: Option<bool>,
}

pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<PostListParams>,
) -> HttpResult<Json<Vec<PostSummaryDto>>> {
    state
        .services
        .post_queries
        .list_posts(
            actor.0.as_ref(),
            ListPostsQuery {
                limit: params.limit,
                offset: params.offset,
            },
        )
        .await
        .into_http()
        .map(Json)
}

pub async fn recent_posts(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<PostSummaryDto>>> {
    state
        .services
        .post_queries
        .recent_posts()
        .await
        .into_http()
        .map(Json)
}

pub async fn my_posts(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<PostListParams>,
) -> HttpResult<Json<Vec<PostSummaryDto>>> {
    state
        .services
        .post_queries
        .my_posts(
            &user,
            MyPostsQuery {
                limit: params.limit,
                offset: params.offset,
            },
        )
        .await
        .into_http()
        .map(Json)
}

pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_by_slug(actor.0.as_ref(), GetPostBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        title: payload.title,
        body: payload.body,
        excerpt: payload.excerpt,
        featured_image: payload.featured_image,
        is_published: payload.is_published,
    };

    let post = state
        .services
        .post_commands
        .create(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        slug,
        title: payload.title,
        body: payload.body,
        excerpt: payload.excerpt,
        featured_image: payload.featured_image,
        is_published: payload.is_published,
    };

    state
        .services
        .post_commands
        .update(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .post_commands
        .delete(&user, DeletePostCommand { slug })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

pub async fn toggle_publish(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_commands
        .toggle_publish(&user, TogglePublishCommand { slug })
        .await
        .into_http()
        .map(Json)
}
