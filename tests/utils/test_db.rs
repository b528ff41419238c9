/// Isolated test database backed by in-memory SQLite
///
/// Each `TestDb` owns its own single-connection pool, so tests never share
/// rows and need no cleanup.
use axum_test::TestServer;
use diesel::connection::SimpleConnection;
use show_catalog::modules::episode::EpisodeRepositoryImpl;
use show_catalog::modules::season::SeasonRepositoryImpl;
use show_catalog::modules::show::ShowRepositoryImpl;
use show_catalog::router::{build_router, AppState};
use show_catalog::shared::errors::AppResult;
use show_catalog::shared::Database;
use std::sync::Arc;

pub struct TestDb {
    db: Arc<Database>,
}

impl TestDb {
    /// Fresh database with all migrations applied
    pub fn new() -> Self {
        let db = Database::in_memory().expect("Failed to create in-memory test database");
        Self { db: Arc::new(db) }
    }

    pub fn database(&self) -> Arc<Database> {
        Arc::clone(&self.db)
    }

    /// Run raw SQL on the pooled connection, bypassing the repositories
    pub fn execute_sql(&self, sql: &str) -> AppResult<()> {
        let mut conn = self.db.get_connection()?;
        conn.batch_execute(sql)?;
        Ok(())
    }

    pub fn show_repo(&self) -> ShowRepositoryImpl {
        ShowRepositoryImpl::new(self.database())
    }

    pub fn season_repo(&self) -> SeasonRepositoryImpl {
        SeasonRepositoryImpl::new(self.database())
    }

    pub fn episode_repo(&self) -> EpisodeRepositoryImpl {
        EpisodeRepositoryImpl::new(self.database())
    }

    /// HTTP server over the real router and this database
    pub fn server(&self) -> TestServer {
        let app = build_router(AppState::from_database(self.database()));
        TestServer::new(app).expect("Failed to start test server")
    }
}
