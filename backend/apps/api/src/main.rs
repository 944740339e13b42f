//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use api::config::ServerConfig;
use api::{build_router, cors_layer};
use auth::{AuthConfig, InMemoryUserRepository, PgUserRepository};
use forum::{InMemoryForumRepository, PgForumRepository};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,forum=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().context("invalid server configuration")?;

    // A random token secret is only acceptable in debug builds
    let auth_config =
        AuthConfig::from_env(cfg!(debug_assertions)).context("invalid auth configuration")?;

    let app = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(database_url)
                .await
                .context("failed to connect to database")?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            build_router(
                PgUserRepository::new(pool.clone()),
                PgForumRepository::new(pool),
                auth_config,
            )
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory stores; data is lost on exit");
            build_router(
                InMemoryUserRepository::new(),
                InMemoryForumRepository::new(),
                auth_config,
            )
        }
    };

    let app = app.layer(cors_layer(&config.frontend_origins));

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
