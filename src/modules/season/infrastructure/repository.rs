use super::models::SeasonModel;
use crate::modules::season::domain::errors::season_not_found;
use crate::modules::season::domain::{Season, SeasonRepository};
use crate::schema::seasons;
use crate::shared::domain::SeasonId;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::Database;
use crate::shared::utils::logger::{LogContext, TimedOperation};
use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use tokio::task;

pub struct SeasonRepositoryImpl {
    db: Arc<Database>,
}

impl SeasonRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SeasonRepository for SeasonRepositoryImpl {
    async fn find(&self, id: &SeasonId) -> AppResult<Season> {
        let db = Arc::clone(&self.db);
        let id = id.clone();

        task::spawn_blocking(move || -> AppResult<Season> {
            let timer = TimedOperation::new("seasons_find");
            let mut conn = db.get_connection()?;

            let model = seasons::table
                .find(id.as_str())
                .select(SeasonModel::as_select())
                .first(&mut conn)
                .optional()?
                .ok_or_else(|| season_not_found(&id))?;

            LogContext::db_operation("SELECT", "seasons", timer.elapsed_ms());
            Season::try_from(model)
        })
        .await?
    }

    async fn find_all(&self) -> AppResult<Vec<Season>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Season>> {
            let timer = TimedOperation::new("seasons_find_all");
            let mut conn = db.get_connection()?;

            let rows = seasons::table
                .order(seasons::id.asc())
                .select(SeasonModel::as_select())
                .load(&mut conn)?;

            LogContext::db_operation("SELECT", "seasons", timer.elapsed_ms());
            rows.into_iter().map(Season::try_from).collect()
        })
        .await?
    }

    async fn save(&self, season: &Season) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let model = SeasonModel::from(season);

        task::spawn_blocking(move || -> AppResult<()> {
            let timer = TimedOperation::new("seasons_save");
            let mut conn = db.get_connection()?;

            diesel::insert_into(seasons::table)
                .values(&model)
                .on_conflict(seasons::id)
                .do_update()
                .set(&model)
                .execute(&mut conn)?;

            LogContext::db_operation("UPSERT", "seasons", timer.elapsed_ms());
            Ok(())
        })
        .await?
    }

    async fn delete(&self, id: &SeasonId) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = id.clone();

        task::spawn_blocking(move || -> AppResult<()> {
            let timer = TimedOperation::new("seasons_delete");
            let mut conn = db.get_connection()?;

            let target = seasons::table.find(id.as_str());
            let deleted = diesel::delete(target).execute(&mut conn)?;
            if deleted == 0 {
                return Err(season_not_found(&id));
            }

            LogContext::db_operation("DELETE", "seasons", timer.elapsed_ms());
            Ok(())
        })
        .await?
    }
}
