use super::models::ShowModel;
use crate::modules::show::domain::errors::show_not_found;
use crate::modules::show::domain::{Show, ShowRepository};
use crate::schema::shows;
use crate::shared::domain::ShowId;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::Database;
use crate::shared::utils::logger::{LogContext, TimedOperation};
use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use tokio::task;

pub struct ShowRepositoryImpl {
    db: Arc<Database>,
}

impl ShowRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ShowRepository for ShowRepositoryImpl {
    async fn find(&self, id: &ShowId) -> AppResult<Show> {
        let db = Arc::clone(&self.db);
        let id = id.clone();

        task::spawn_blocking(move || -> AppResult<Show> {
            let timer = TimedOperation::new("shows_find");
            let mut conn = db.get_connection()?;

            let model = shows::table
                .find(id.as_str())
                .select(ShowModel::as_select())
                .first(&mut conn)
                .optional()?
                .ok_or_else(|| show_not_found(&id))?;

            LogContext::db_operation("SELECT", "shows", timer.elapsed_ms());
            Show::try_from(model)
        })
        .await?
    }

    async fn find_all(&self) -> AppResult<Vec<Show>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Show>> {
            let timer = TimedOperation::new("shows_find_all");
            let mut conn = db.get_connection()?;

            let rows = shows::table
                .order(shows::id.asc())
                .select(ShowModel::as_select())
                .load(&mut conn)?;

            LogContext::db_operation("SELECT", "shows", timer.elapsed_ms());
            rows.into_iter().map(Show::try_from).collect()
        })
        .await?
    }

    async fn save(&self, show: &Show) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let model = ShowModel::from(show);

        task::spawn_blocking(move || -> AppResult<()> {
            let timer = TimedOperation::new("shows_save");
            let mut conn = db.get_connection()?;

            diesel::insert_into(shows::table)
                .values(&model)
                .on_conflict(shows::id)
                .do_update()
                .set(&model)
                .execute(&mut conn)?;

            LogContext::db_operation("UPSERT", "shows", timer.elapsed_ms());
            Ok(())
        })
        .await?
    }

    async fn delete(&self, id: &ShowId) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = id.clone();

        task::spawn_blocking(move || -> AppResult<()> {
            let timer = TimedOperation::new("shows_delete");
            let mut conn = db.get_connection()?;

            let target = shows::table.find(id.as_str());
            let deleted = diesel::delete(target).execute(&mut conn)?;
            if deleted == 0 {
                return Err(show_not_found(&id));
            }

            LogContext::db_operation("DELETE", "shows", timer.elapsed_ms());
            Ok(())
        })
        .await?
    }
}
