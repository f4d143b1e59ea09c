// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{auth, health, posts, users};
use crate::presentation::http::middleware::rate_limit;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    http::Method,
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

/// Router used by both the binary and the tests. Tests switch the rate
/// limiter off because the IP key extractor has no peer address to work
/// with under `oneshot`.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limiting: bool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    // Credential-guessing endpoints carry their own tighter budget.
    let mut credential_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/password-reset", post(auth::request_password_reset));
    if rate_limiting {
        credential_routes = credential_routes.route_layer(rate_limit::auth_rate_limit_layer());
    }

    let session_routes = Router::new()
        .route("/logout", post(auth::logout))
        .route("/refresh", post(auth::refresh))
        .route("/verify", get(auth::verify));

    let mut api = Router::new()
        .nest("/auth", credential_routes.merge(session_routes))
        .route("/users", get(users::list_users))
        .route("/users/me", get(users::me))
        .route("/users/change-password", post(users::change_password))
        .route(
            "/users/{id}",
            get(users::get_user)
                .patch(users::update_profile)
                .put(users::update_profile),
        )
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route("/posts/recent", get(posts::recent_posts))
        .route("/posts/mine", get(posts::my_posts))
        .route(
            "/posts/{slug}",
            get(posts::get_post_by_slug)
                .patch(posts::update_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/posts/{slug}/toggle-publish", post(posts::toggle_publish));
    if rate_limiting {
        api = api.layer(rate_limit::global_rate_limit_layer());
    }

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state))
}
