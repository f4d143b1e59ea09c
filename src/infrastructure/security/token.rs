// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AccessTokenData, IssuedAccess, IssuedTokenPair, RefreshTokenData},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenService,
};
use crate::domain::user::{User, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const ACCESS_TOKEN_TYPE: &str = "access";
const REFRESH_TOKEN_TYPE: &str = "refresh";
const RESET_TOKEN_TYPE: &str = "password_reset";

/// Claims carried by an access token. `sid` is the id of the refresh token
/// that opened the session, so revoking that id kills both halves of the
/// pair at once.
#[derive(Debug, Serialize, Deserialize)]
struct AccessClaims {
    sub: String,
    user_id: i64,
    username: String,
    email: String,
    staff: bool,
    sid: String,
    token_type: String,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Serialize, Deserialize)]
struct RefreshClaims {
    sub: String,
    user_id: i64,
    jti: String,
    token_type: String,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Serialize, Deserialize)]
struct ResetClaims {
    sub: String,
    user_id: i64,
    token_type: String,
    iat: i64,
    exp: i64,
}

/// HS256 token service. All three token kinds are signed with the same
/// secret and told apart by their `token_type` claim.
#[derive(Clone)]
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
    reset_ttl: Duration,
}

impl JwtTokenService {
    pub fn new(
        secret: &str,
        access_ttl_secs: i64,
        refresh_ttl_secs: i64,
        reset_ttl_secs: i64,
    ) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl: Duration::seconds(access_ttl_secs),
            refresh_ttl: Duration::seconds(refresh_ttl_secs),
            reset_ttl: Duration::seconds(reset_ttl_secs),
        }
    }

    fn sign<C: Serialize>(&self, claims: &C) -> ApplicationResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation
    }

    fn access_claims(&self, user: &User, session_id: &str, now: DateTime<Utc>) -> AccessClaims {
        AccessClaims {
            sub: i64::from(user.id).to_string(),
            user_id: i64::from(user.id),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            staff: user.is_staff,
            sid: session_id.to_string(),
            token_type: ACCESS_TOKEN_TYPE.to_string(),
            iat: now.timestamp(),
            exp: (now + self.access_ttl).timestamp(),
        }
    }
}

fn datetime_claim(secs: i64, reason: &'static str) -> ApplicationResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| ApplicationError::unauthorized(reason))
}

#[async_trait]
impl TokenService for JwtTokenService {
    async fn issue_pair(&self, user: &User) -> ApplicationResult<IssuedTokenPair> {
        let now = Utc::now();
        let token_id = Uuid::new_v4().to_string();

        let access = self.sign(&self.access_claims(user, &token_id, now))?;
        let refresh = self.sign(&RefreshClaims {
            sub: i64::from(user.id).to_string(),
            user_id: i64::from(user.id),
            jti: token_id.clone(),
            token_type: REFRESH_TOKEN_TYPE.to_string(),
            iat: now.timestamp(),
            exp: (now + self.refresh_ttl).timestamp(),
        })?;

        Ok(IssuedTokenPair {
            access,
            refresh,
            refresh_token_id: token_id,
            access_expires_in: self.access_ttl.num_seconds(),
        })
    }

    async fn issue_access(&self, user: &User, session_id: &str) -> ApplicationResult<IssuedAccess> {
        let token = self.sign(&self.access_claims(user, session_id, Utc::now()))?;
        Ok(IssuedAccess {
            token,
            expires_in: self.access_ttl.num_seconds(),
        })
    }

    async fn issue_reset(&self, user: &User) -> ApplicationResult<String> {
        let now = Utc::now();
        self.sign(&ResetClaims {
            sub: i64::from(user.id).to_string(),
            user_id: i64::from(user.id),
            token_type: RESET_TOKEN_TYPE.to_string(),
            iat: now.timestamp(),
            exp: (now + self.reset_ttl).timestamp(),
        })
    }

    async fn parse_access(&self, token: &str) -> ApplicationResult<AccessTokenData> {
        let data = decode::<AccessClaims>(token, &self.decoding_key, &Self::validation())
            .map_err(|_| ApplicationError::unauthorized("invalid token"))?;
        let claims = data.claims;
        if claims.token_type != ACCESS_TOKEN_TYPE {
            return Err(ApplicationError::unauthorized("invalid token"));
        }

        Ok(AccessTokenData {
            user_id: UserId::new(claims.user_id)
                .map_err(|_| ApplicationError::unauthorized("invalid token"))?,
            username: claims.username,
            email: claims.email,
            is_staff: claims.staff,
            session_id: claims.sid,
            issued_at: datetime_claim(claims.iat, "invalid token")?,
            expires_at: datetime_claim(claims.exp, "invalid token")?,
        })
    }

    async fn parse_refresh(&self, token: &str) -> ApplicationResult<RefreshTokenData> {
        let data = decode::<RefreshClaims>(token, &self.decoding_key, &Self::validation())
            .map_err(|_| ApplicationError::unauthorized("invalid refresh token"))?;
        let claims = data.claims;
        if claims.token_type != REFRESH_TOKEN_TYPE {
            return Err(ApplicationError::unauthorized("invalid refresh token"));
        }

        Ok(RefreshTokenData {
            user_id: UserId::new(claims.user_id)
                .map_err(|_| ApplicationError::unauthorized("invalid refresh token"))?,
            token_id: claims.jti,
            issued_at: datetime_claim(claims.iat, "invalid refresh token")?,
            expires_at: datetime_claim(claims.exp, "invalid refresh token")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{EmailAddress, PasswordHash, Username};

    const TEST_SECRET: &str = "unit-test-secret-with-enough-length-0123456789";

    fn service() -> JwtTokenService {
        JwtTokenService::new(TEST_SECRET, 900, 604_800, 3600)
    }

    fn test_user() -> User {
        let now = Utc::now();
        User {
            id: UserId::new(42).unwrap(),
            username: Username::new("ada").unwrap(),
            email: EmailAddress::new("ada@example.com").unwrap(),
            password_hash: PasswordHash::new("hash").unwrap(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            bio: String::new(),
            avatar_url: String::new(),
            is_active: true,
            is_staff: false,
            date_joined: now,
            last_login: None,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn access_token_round_trips() {
        let service = service();
        let pair = service.issue_pair(&test_user()).await.unwrap();

        let parsed = service.parse_access(&pair.access).await.unwrap();
        assert_eq!(i64::from(parsed.user_id), 42);
        assert_eq!(parsed.username, "ada");
        assert_eq!(parsed.email, "ada@example.com");
        assert!(!parsed.is_staff);
        assert_eq!(parsed.session_id, pair.refresh_token_id);
        assert!(parsed.expires_at > parsed.issued_at);
    }

    #[tokio::test]
    async fn refresh_token_round_trips() {
        let service = service();
        let pair = service.issue_pair(&test_user()).await.unwrap();

        let parsed = service.parse_refresh(&pair.refresh).await.unwrap();
        assert_eq!(i64::from(parsed.user_id), 42);
        assert_eq!(parsed.token_id, pair.refresh_token_id);
    }

    #[tokio::test]
    async fn tampered_signature_is_rejected() {
        let service = service();
        let pair = service.issue_pair(&test_user()).await.unwrap();

        let mut tampered = pair.access;
        let last = if tampered.ends_with('A') { 'B' } else { 'A' };
        tampered.pop();
        tampered.push(last);

        let err = service.parse_access(&tampered).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn wrong_secret_is_rejected() {
        let pair = service().issue_pair(&test_user()).await.unwrap();
        let other = JwtTokenService::new("a-completely-different-signing-secret!!", 900, 900, 900);

        assert!(other.parse_access(&pair.access).await.is_err());
        assert!(other.parse_refresh(&pair.refresh).await.is_err());
    }

    #[tokio::test]
    async fn expired_access_token_is_rejected() {
        let service = service();
        let past = Utc::now() - Duration::seconds(120);
        let mut claims = service.access_claims(&test_user(), "sid", past - Duration::seconds(900));
        claims.exp = past.timestamp();
        let token = service.sign(&claims).unwrap();

        let err = service.parse_access(&token).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn refresh_token_is_not_an_access_token() {
        let service = service();
        let pair = service.issue_pair(&test_user()).await.unwrap();

        let err = service.parse_access(&pair.refresh).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn access_token_is_not_a_refresh_token() {
        let service = service();
        let pair = service.issue_pair(&test_user()).await.unwrap();

        let err = service.parse_refresh(&pair.access).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn reset_token_is_single_purpose() {
        let service = service();
        let token = service.issue_reset(&test_user()).await.unwrap();

        assert!(service.parse_access(&token).await.is_err());
        assert!(service.parse_refresh(&token).await.is_err());
    }
}
