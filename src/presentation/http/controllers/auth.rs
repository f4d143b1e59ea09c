// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{
        LoginUserCommand, LogoutCommand, RefreshTokenCommand, RegisterUserCommand,
        RequestPasswordResetCommand,
    },
    dto::{TokenPairDto, UserDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::{HeaderMap, StatusCode},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub bio: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username or email address.
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserDto,
    pub tokens: TokenPairDto,
}

/// Body shared by logout and refresh. The token is optional at the wire
/// level so a missing field reports 400, not a deserialisation error.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    #[serde(default)]
    pub refresh: String,
}

#[derive(Debug, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<LoginResponse>)> {
    let command = RegisterUserCommand {
        username: payload.username,
        email: payload.email,
        password: payload.password,
        password_confirm: payload.password_confirm,
        first_name: payload.first_name,
        last_name: payload.last_name,
        bio: payload.bio,
    };

    let result = state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(LoginResponse {
            user: result.user,
            tokens: result.tokens,
        }),
    ))
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let command = LoginUserCommand {
        username: payload.username,
        password: payload.password,
    };

    let result = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        user: result.user,
        tokens: result.tokens,
    }))
}

pub async fn logout(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<TokenRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .user_commands
        .logout(LogoutCommand {
            refresh: payload.refresh,
        })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "logged_out" })))
}

pub async fn refresh(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<TokenRequest>,
) -> HttpResult<Json<TokenPairDto>> {
    state
        .services
        .user_commands
        .refresh(RefreshTokenCommand {
            refresh: payload.refresh,
        })
        .await
        .into_http()
        .map(Json)
}

/// Report whether the presented access token is currently good for
/// requests. Never an error status: bad, revoked or absent tokens all get
/// a 200 with `valid: false`.
pub async fn verify(
    Extension(state): Extension<HttpState>,
    headers: HeaderMap,
) -> Json<VerifyResponse> {
    let Some(header) = headers.typed_get::<Authorization<Bearer>>() else {
        return Json(VerifyResponse {
            valid: false,
            user: None,
        });
    };

    let user = match state.services.authenticate_access(header.token()).await {
        Ok(authenticated) => state
            .services
            .user_queries
            .profile(&authenticated)
            .await
            .ok(),
        Err(_) => None,
    };

    Json(VerifyResponse {
        valid: user.is_some(),
        user,
    })
}

pub async fn request_password_reset(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<PasswordResetRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .user_commands
        .request_password_reset(RequestPasswordResetCommand {
            email: payload.email,
        })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "password_reset_requested" })))
}
