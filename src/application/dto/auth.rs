use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access and refresh tokens as handed out by login, register and refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPairDto {
    pub access: String,
    pub refresh: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl TokenPairDto {
    pub fn new(access: String, refresh: String, expires_in: i64) -> Self {
        Self {
            access,
            refresh,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

impl From<IssuedTokenPair> for TokenPairDto {
    fn from(pair: IssuedTokenPair) -> Self {
        Self::new(pair.access, pair.refresh, pair.access_expires_in)
    }
}

/// A freshly minted token pair, before it is shaped for the wire.
#[derive(Debug, Clone)]
pub struct IssuedTokenPair {
    pub access: String,
    pub refresh: String,
    pub refresh_token_id: String,
    pub access_expires_in: i64,
}

#[derive(Debug, Clone)]
pub struct IssuedAccess {
    pub token: String,
    pub expires_in: i64,
}

/// Verified contents of an access token.
#[derive(Debug, Clone)]
pub struct AccessTokenData {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub session_id: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Verified contents of a refresh token.
#[derive(Debug, Clone)]
pub struct RefreshTokenData {
    pub user_id: UserId,
    pub token_id: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// The caller behind a valid, unrevoked access token, checked against the
/// current account state.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub session_id: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
