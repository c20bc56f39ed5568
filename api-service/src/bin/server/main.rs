use std::sync::Arc;

use api_service::config::Config;
use api_service::domain::user::service::UserService;
use api_service::inbound::http::router::create_router;
use api_service::outbound::repositories::SqliteUserRepository;
use auth::Authenticator;
use auth::PasswordHasher;
use auth::TokenService;
use chrono::Duration;
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "api-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        token_validity_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(database = "sqlite", "Database connection pool created");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!(database = "sqlite", "Database migrations completed");

    // Construct the auth components once; everything downstream receives
    // them by reference.
    let password_hasher =
        PasswordHasher::with_cost(config.password.memory_cost_kib, config.password.time_cost)?;
    let token_service = TokenService::new(
        config.jwt.secret.as_bytes(),
        Duration::hours(config.jwt.expiration_hours),
    )?;
    let authenticator = Arc::new(Authenticator::new(password_hasher.clone(), token_service));

    let user_repository = Arc::new(SqliteUserRepository::new(pool));
    let user_service = Arc::new(UserService::new(user_repository, password_hasher));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, authenticator);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
