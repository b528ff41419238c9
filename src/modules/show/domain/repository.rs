use super::entities::Show;
use crate::shared::domain::ShowId;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Persistence port for shows
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShowRepository: Send + Sync {
    /// Fails with `SHOW_NOT_FOUND_ERROR` when no show has this id
    async fn find(&self, id: &ShowId) -> AppResult<Show>;

    async fn find_all(&self) -> AppResult<Vec<Show>>;

    /// Insert, or overwrite every field of the show with the same id
    async fn save(&self, show: &Show) -> AppResult<()>;

    /// Fails with `SHOW_NOT_FOUND_ERROR` when nothing was deleted
    async fn delete(&self, id: &ShowId) -> AppResult<()>;
}
