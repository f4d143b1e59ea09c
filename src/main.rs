use anyhow::Result;
use inkpress::application::{
    ports::{
        revocation::RevocationStore,
        security::{PasswordHasher, TokenService},
        time::Clock,
        util::SlugGenerator,
    },
    services::ApplicationServices,
};
use inkpress::config::AppConfig;
use inkpress::domain::{
    post::{PostReadRepository, PostWriteRepository},
    user::UserRepository,
};
use inkpress::infrastructure::{
    database,
    repositories::{
        PostgresPostReadRepository, PostgresPostWriteRepository, PostgresRevocationStore,
        PostgresUserRepository,
    },
    security::{Argon2PasswordHasher, JwtTokenService, RedisRevocationStore},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use inkpress::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let post_write_repo: Arc<dyn PostWriteRepository> =
        Arc::new(PostgresPostWriteRepository::new(pool.clone()));
    let post_read_repo: Arc<dyn PostReadRepository> =
        Arc::new(PostgresPostReadRepository::new(pool.clone()));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(
        config.jwt_secret(),
        config.access_token_ttl_secs(),
        config.refresh_token_ttl_secs(),
        config.reset_token_ttl_secs(),
    ));
    let revocation_store: Arc<dyn RevocationStore> = match config.redis_url() {
        Some(url) => {
            tracing::info!("revocation store backed by redis");
            Arc::new(RedisRevocationStore::from_url(url)?)
        }
        None => {
            let store = PostgresRevocationStore::new(pool.clone());
            let _ = store.clone().spawn_expiry_sweeper();
            Arc::new(store)
        }
    };
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        post_write_repo,
        post_read_repo,
        password_hasher,
        token_service,
        revocation_store,
        clock,
        slugger,
    ));

    let state = HttpState { services };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
