use super::dto::{CreateEpisodeRequest, EpisodeDto, UpdateEpisodeRequest};
use crate::modules::episode::domain::{Episode, EpisodeNumber, EpisodeRepository};
use crate::shared::domain::{EpisodeId, SeasonId, ShowId};
use crate::shared::errors::AppResult;
use crate::{log_debug, log_info};
use std::sync::Arc;

pub struct EpisodeService {
    episode_repo: Arc<dyn EpisodeRepository>,
}

impl EpisodeService {
    pub fn new(episode_repo: Arc<dyn EpisodeRepository>) -> Self {
        Self { episode_repo }
    }

    pub async fn create_episode(&self, request: CreateEpisodeRequest) -> AppResult<EpisodeDto> {
        let episode_number = EpisodeNumber::new(request.episode_number)?;
        let episode = Episode::create(
            ShowId::from(request.show_id),
            SeasonId::from(request.season_id),
            episode_number,
        );

        self.episode_repo.save(&episode).await?;

        log_info!(
            "Created episode {} in season {} ({})",
            episode.episode_number(),
            episode.season_id(),
            episode.id()
        );
        Ok(EpisodeDto::from(&episode))
    }

    pub async fn get_episode_by_id(&self, id: &EpisodeId) -> AppResult<EpisodeDto> {
        let episode = self.episode_repo.find(id).await?;
        Ok(EpisodeDto::from(&episode))
    }

    pub async fn get_all_episodes(&self) -> AppResult<Vec<EpisodeDto>> {
        let episodes = self.episode_repo.find_all().await?;
        Ok(episodes.iter().map(EpisodeDto::from).collect())
    }

    pub async fn update_episode(
        &self,
        id: &EpisodeId,
        request: UpdateEpisodeRequest,
    ) -> AppResult<()> {
        let mut episode = self.episode_repo.find(id).await?;

        episode.apply(request.into())?;
        self.episode_repo.save(&episode).await?;

        log_debug!("Updated episode {}", id);
        Ok(())
    }

    pub async fn delete_episode(&self, id: &EpisodeId) -> AppResult<()> {
        self.episode_repo.delete(id).await?;

        log_info!("Deleted episode {}", id);
        Ok(())
    }
}
