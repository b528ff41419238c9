use super::models::EpisodeModel;
use crate::modules::episode::domain::errors::episode_not_found;
use crate::modules::episode::domain::{Episode, EpisodeRepository};
use crate::schema::episodes;
use crate::shared::domain::EpisodeId;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::Database;
use crate::shared::utils::logger::{LogContext, TimedOperation};
use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use tokio::task;

pub struct EpisodeRepositoryImpl {
    db: Arc<Database>,
}

impl EpisodeRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EpisodeRepository for EpisodeRepositoryImpl {
    async fn find(&self, id: &EpisodeId) -> AppResult<Episode> {
        let db = Arc::clone(&self.db);
        let id = id.clone();

        task::spawn_blocking(move || -> AppResult<Episode> {
            let timer = TimedOperation::new("episodes_find");
            let mut conn = db.get_connection()?;

            let model = episodes::table
                .find(id.as_str())
                .select(EpisodeModel::as_select())
                .first(&mut conn)
                .optional()?
                .ok_or_else(|| episode_not_found(&id))?;

            LogContext::db_operation("SELECT", "episodes", timer.elapsed_ms());
            Episode::try_from(model)
        })
        .await?
    }

    async fn find_all(&self) -> AppResult<Vec<Episode>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Episode>> {
            let timer = TimedOperation::new("episodes_find_all");
            let mut conn = db.get_connection()?;

            let rows = episodes::table
                .order(episodes::id.asc())
                .select(EpisodeModel::as_select())
                .load(&mut conn)?;

            LogContext::db_operation("SELECT", "episodes", timer.elapsed_ms());
            rows.into_iter().map(Episode::try_from).collect()
        })
        .await?
    }

    async fn save(&self, episode: &Episode) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let model = EpisodeModel::from(episode);

        task::spawn_blocking(move || -> AppResult<()> {
            let timer = TimedOperation::new("episodes_save");
            let mut conn = db.get_connection()?;

            diesel::insert_into(episodes::table)
                .values(&model)
                .on_conflict(episodes::id)
                .do_update()
                .set(&model)
                .execute(&mut conn)?;

            LogContext::db_operation("UPSERT", "episodes", timer.elapsed_ms());
            Ok(())
        })
        .await?
    }

    async fn delete(&self, id: &EpisodeId) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = id.clone();

        task::spawn_blocking(move || -> AppResult<()> {
            let timer = TimedOperation::new("episodes_delete");
            let mut conn = db.get_connection()?;

            let target = episodes::table.find(id.as_str());
            let deleted = diesel::delete(target).execute(&mut conn)?;
            if deleted == 0 {
                return Err(episode_not_found(&id));
            }

            LogContext::db_operation("DELETE", "episodes", timer.elapsed_ms());
            Ok(())
        })
        .await?
    }
}
