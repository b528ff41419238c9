use super::entities::Episode;
use crate::shared::domain::EpisodeId;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EpisodeRepository: Send + Sync {
    async fn find(&self, id: &EpisodeId) -> AppResult<Episode>;

    async fn find_all(&self) -> AppResult<Vec<Episode>>;

    async fn save(&self, episode: &Episode) -> AppResult<()>;

    async fn delete(&self, id: &EpisodeId) -> AppResult<()>;
}
