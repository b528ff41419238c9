use crate::log_info;
use crate::shared::config::{DatabaseConfig, DatabaseLocation};
use crate::shared::errors::AppError;
use crate::shared::utils::logger::{LogContext, TimedOperation};
use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::time::Duration;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const SLOW_CHECKOUT_MS: u64 = 100;

/// Per-connection SQLite settings, applied whenever the pool opens a connection
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas {
    wal: bool,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        // Foreign keys are off by default in SQLite
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(r2d2::Error::QueryError)?;
        if self.wal {
            conn.batch_execute("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;")
                .map_err(r2d2::Error::QueryError)?;
        }
        Ok(())
    }
}

/// Shared handle to the relational store, injected into every repository
#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let pool = match &config.location {
            DatabaseLocation::File(path) => {
                log_info!("Opening SQLite database at {}", path);
                r2d2::Pool::builder()
                    .max_size(config.pool_size)
                    .connection_timeout(Duration::from_secs(10))
                    .idle_timeout(Some(Duration::from_secs(300)))
                    .connection_customizer(Box::new(SqlitePragmas { wal: true }))
                    .build(ConnectionManager::<SqliteConnection>::new(path.as_str()))
            }
            DatabaseLocation::InMemory => {
                log_info!("Opening in-memory SQLite database");
                // One connection that is never recycled, otherwise the data vanishes
                r2d2::Pool::builder()
                    .max_size(1)
                    .min_idle(Some(1))
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connection_timeout(Duration::from_secs(10))
                    .connection_customizer(Box::new(SqlitePragmas { wal: false }))
                    .build(ConnectionManager::<SqliteConnection>::new(":memory:"))
            }
        }
        .map_err(|e| AppError::DatabaseError(format!("Failed to create connection pool: {}", e)))?;

        log_info!(
            "Database connection pool initialized with max_size: {}",
            pool.max_size()
        );

        Ok(Self { pool })
    }

    /// In-memory database with the schema applied (tests and demos)
    pub fn in_memory() -> Result<Self, AppError> {
        let db = Self::connect(&DatabaseConfig::in_memory())?;
        db.run_migrations()?;
        Ok(db)
    }

    /// Apply every pending embedded migration
    pub fn run_migrations(&self) -> Result<usize, AppError> {
        let mut conn = self.get_connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::DatabaseError(format!("Failed to run migrations: {}", e)))?;

        if !applied.is_empty() {
            log_info!("Applied {} database migration(s)", applied.len());
        }
        Ok(applied.len())
    }

    pub fn get_connection(&self) -> Result<DbConnection, AppError> {
        let timer = TimedOperation::new("db_connection_acquire");

        match self.pool.get() {
            Ok(conn) => {
                timer.finish_if_slower_than(SLOW_CHECKOUT_MS);
                Ok(conn)
            }
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    "Failed to acquire database connection from pool",
                );
                Err(AppError::from(e))
            }
        }
    }

    /// Get pool statistics for monitoring
    pub fn pool_status(&self) -> PoolStatus {
        let state = self.pool.state();
        PoolStatus {
            connections: state.connections,
            idle_connections: state.idle_connections,
            max_size: self.pool.max_size(),
        }
    }
}

#[derive(Debug)]
pub struct PoolStatus {
    pub connections: u32,
    pub idle_connections: u32,
    pub max_size: u32,
}
