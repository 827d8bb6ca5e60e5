// Main entry point for the HU approval server

use std::sync::Arc;

use anyhow::{Context, Result};
use approval_core::domains::stories::{STORY_COLUMNS, VOTE_COLUMNS};
use approval_core::kernel::{BaseRowStore, MemoryRowStore, PostgresRowStore, ServerDeps};
use approval_core::{server::build_app, Config, RowStoreBackend};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,approval_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting HU approval server");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(row_store = ?config.row_store, "Configuration loaded");

    let deps = match config.row_store {
        RowStoreBackend::Postgres => connect_postgres(&config).await?,
        RowStoreBackend::Memory => {
            tracing::warn!("Using in-memory row store - data is lost on restart");
            ServerDeps::new(
                Arc::new(MemoryRowStore::new(config.story_sheet.clone(), &STORY_COLUMNS)),
                Arc::new(MemoryRowStore::new(config.vote_sheet.clone(), &VOTE_COLUMNS)),
            )
        }
    };

    // Build application
    let app = build_app(deps);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Backoffice: http://localhost:{}/backoffice", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

async fn connect_postgres(config: &Config) -> Result<ServerDeps> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    let stories = PostgresRowStore::new(pool.clone(), config.story_sheet.clone());
    stories.ensure_worksheet(&STORY_COLUMNS).await?;
    let votes = PostgresRowStore::new(pool, config.vote_sheet.clone());
    votes.ensure_worksheet(&VOTE_COLUMNS).await?;

    tracing::info!(
        stories = stories.worksheet(),
        votes = votes.worksheet(),
        "Worksheets ready"
    );

    Ok(ServerDeps::new(Arc::new(stories), Arc::new(votes)))
}
