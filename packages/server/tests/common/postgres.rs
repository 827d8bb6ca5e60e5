//! Shared Postgres container for row store tests.
//!
//! The container and migrations are initialized once on first use, then reused.

use anyhow::{Context, Result};
use sqlx::PgPool;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

struct SharedPostgres {
    db_url: String,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

static SHARED_POSTGRES: OnceCell<SharedPostgres> = OnceCell::const_new();

impl SharedPostgres {
    async fn init() -> Result<Self> {
        let postgres = Postgres::default()
            .with_tag("16")
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let host = postgres.get_host().await?;
        let port = postgres.get_host_port_ipv4(5432).await?;
        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let pool = PgPool::connect(&db_url)
            .await
            .context("Failed to connect to Postgres for migrations")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self {
            db_url,
            _postgres: postgres,
        })
    }
}

/// Fresh pool on the shared, migrated database
#[allow(dead_code)]
pub async fn postgres_pool() -> PgPool {
    let shared = SHARED_POSTGRES
        .get_or_init(|| async {
            SharedPostgres::init()
                .await
                .expect("Failed to initialize shared Postgres container")
        })
        .await;

    PgPool::connect(&shared.db_url)
        .await
        .expect("Failed to connect to test database")
}
