// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{posts::PostCommandService, users::UserCommandService},
        dto::AuthenticatedUser,
        error::ApplicationError,
        ports::{
            revocation::RevocationStore,
            security::{PasswordHasher, TokenService},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{posts::PostQueryService, users::UserQueryService},
    },
    domain::{
        post::{PostReadRepository, PostWriteRepository, SlugAssigner},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub user_queries: Arc<UserQueryService>,
    user_repo: Arc<dyn UserRepository>,
    token_service: Arc<dyn TokenService>,
    revocation_store: Arc<dyn RevocationStore>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<dyn TokenService>,
        revocation_store: Arc<dyn RevocationStore>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_service),
            Arc::clone(&revocation_store),
            Arc::clone(&clock),
        ));

        let slug_assigner = Arc::new(SlugAssigner::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&slugger),
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&user_repo),
            slug_assigner,
            Arc::clone(&clock),
        ));

        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&user_repo),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&user_repo),
            Arc::clone(&post_read_repo),
        ));

        Self {
            user_commands,
            post_commands,
            post_queries,
            user_queries,
            user_repo,
            token_service,
            revocation_store,
        }
    }

    /// Authenticate a raw bearer token: signature, expiry and token type,
    /// then the revocation check on the parent refresh session, then the
    /// current account state. Revoking a refresh token therefore kills its
    /// access tokens too.
    pub async fn authenticate_access(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let data = self.token_service.parse_access(token).await?;

        if self.revocation_store.is_revoked(&data.session_id).await? {
            return Err(ApplicationError::unauthorized("token revoked"));
        }

        let user = self
            .user_repo
            .find_by_id(data.user_id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("account no longer exists"))?;
        if !user.is_active {
            return Err(ApplicationError::unauthorized("account is inactive"));
        }

        Ok(AuthenticatedUser {
            id: user.id,
            username: user.username.into(),
            email: user.email.into(),
            is_staff: user.is_staff,
            session_id: data.session_id,
            issued_at: data.issued_at,
            expires_at: data.expires_at,
        })
    }
}
