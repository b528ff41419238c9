use super::entities::Season;
use crate::shared::domain::SeasonId;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Persistence port for seasons
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeasonRepository: Send + Sync {
    async fn find(&self, id: &SeasonId) -> AppResult<Season>;

    async fn find_all(&self) -> AppResult<Vec<Season>>;

    /// Upsert by id. Unique `(show_id, season_number)` and the show reference
    /// are enforced by the store.
    async fn save(&self, season: &Season) -> AppResult<()>;

    async fn delete(&self, id: &SeasonId) -> AppResult<()>;
}
