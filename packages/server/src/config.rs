use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;

/// Which row store backend serves the worksheets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStoreBackend {
    Postgres,
    Memory,
}

impl std::str::FromStr for RowStoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(RowStoreBackend::Postgres),
            "memory" => Ok(RowStoreBackend::Memory),
            other => Err(anyhow::anyhow!("Invalid ROW_STORE backend: {}", other)),
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub row_store: RowStoreBackend,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub story_sheet: String,
    pub vote_sheet: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let row_store = env::var("ROW_STORE")
            .unwrap_or_else(|_| "postgres".to_string())
            .parse()?;

        let database_url = env::var("DATABASE_URL").ok();
        if row_store == RowStoreBackend::Postgres && database_url.is_none() {
            bail!("DATABASE_URL must be set when ROW_STORE=postgres");
        }

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            row_store,
            database_url,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a valid number")?,
            story_sheet: env::var("STORY_SHEET").unwrap_or_else(|_| "stories".to_string()),
            vote_sheet: env::var("VOTE_SHEET").unwrap_or_else(|_| "votes".to_string()),
        })
    }
}
