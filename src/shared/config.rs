use std::env;
use std::net::SocketAddr;

use crate::log_info;
use crate::shared::errors::{AppError, AppResult};

const DEFAULT_DATABASE_URL: &str = "shows.db";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
const MAX_POOL_SIZE: u32 = 16;

/// Where the SQLite database lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(String),
    InMemory,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub location: DatabaseLocation,
    pub pool_size: u32,
}

impl DatabaseConfig {
    pub fn in_memory() -> Self {
        Self {
            location: DatabaseLocation::InMemory,
            pool_size: 1,
        }
    }
}

/// Process configuration, read from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub bind_address: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        let pool_size = env::var("DATABASE_POOL_SIZE").ok();

        Self::from_values(&database_url, &bind_address, pool_size.as_deref())
    }

    /// Build a config from raw values; split out of `from_env` so it can be tested
    pub fn from_values(
        database_url: &str,
        bind_address: &str,
        pool_size: Option<&str>,
    ) -> AppResult<Self> {
        let location = parse_database_url(database_url)?;

        let bind_address = bind_address.parse::<SocketAddr>().map_err(|e| {
            AppError::Configuration(format!("Invalid BIND_ADDRESS '{}': {}", bind_address, e))
        })?;

        let pool_size = match (&location, pool_size) {
            // Every in-memory connection is its own database
            (DatabaseLocation::InMemory, _) => 1,
            (_, Some(raw)) => {
                let size = raw.parse::<u32>().map_err(|e| {
                    AppError::Configuration(format!("Invalid DATABASE_POOL_SIZE '{}': {}", raw, e))
                })?;
                if size == 0 {
                    return Err(AppError::Configuration(
                        "DATABASE_POOL_SIZE must be at least 1".to_string(),
                    ));
                }
                size
            }
            (_, None) => default_pool_size(),
        };

        log_info!(
            "Configuration loaded: database {:?}, pool size {}, bind {}",
            location,
            pool_size,
            bind_address
        );

        Ok(Self {
            database: DatabaseConfig {
                location,
                pool_size,
            },
            bind_address,
        })
    }
}

fn parse_database_url(raw: &str) -> AppResult<DatabaseLocation> {
    let trimmed = raw.trim();
    let path = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed);

    if path.is_empty() {
        return Err(AppError::Configuration(
            "DATABASE_URL must name a SQLite file or :memory:".to_string(),
        ));
    }

    if path.starts_with("postgres://") || path.starts_with("mysql://") {
        return Err(AppError::Configuration(format!(
            "Unsupported database URL '{}': only SQLite is supported",
            raw
        )));
    }

    if path == ":memory:" {
        Ok(DatabaseLocation::InMemory)
    } else {
        Ok(DatabaseLocation::File(path.to_string()))
    }
}

/// Pool size based on CPU count, capped; SQLite serializes writers anyway
fn default_pool_size() -> u32 {
    let cpu_count = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4) as u32;
    std::cmp::min(cpu_count * 2, MAX_POOL_SIZE)
}
