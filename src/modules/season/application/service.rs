use super::dto::{CreateSeasonRequest, SeasonDto, UpdateSeasonRequest};
use crate::modules::season::domain::{Season, SeasonNumber, SeasonRepository};
use crate::shared::domain::{SeasonId, ShowId};
use crate::shared::errors::AppResult;
use crate::{log_debug, log_info};
use std::sync::Arc;

pub struct SeasonService {
    season_repo: Arc<dyn SeasonRepository>,
}

impl SeasonService {
    pub fn new(season_repo: Arc<dyn SeasonRepository>) -> Self {
        Self { season_repo }
    }

    pub async fn create_season(&self, request: CreateSeasonRequest) -> AppResult<SeasonDto> {
        let season_number = SeasonNumber::new(request.season_number)?;
        let season = Season::create(ShowId::from(request.show_id), season_number);

        self.season_repo.save(&season).await?;

        log_info!(
            "Created season {} for show {} ({})",
            season.season_number(),
            season.show_id(),
            season.id()
        );
        Ok(SeasonDto::from(&season))
    }

    pub async fn get_season_by_id(&self, id: &SeasonId) -> AppResult<SeasonDto> {
        let season = self.season_repo.find(id).await?;
        Ok(SeasonDto::from(&season))
    }

    pub async fn get_all_seasons(&self) -> AppResult<Vec<SeasonDto>> {
        let seasons = self.season_repo.find_all().await?;
        Ok(seasons.iter().map(SeasonDto::from).collect())
    }

    pub async fn update_season(
        &self,
        id: &SeasonId,
        request: UpdateSeasonRequest,
    ) -> AppResult<()> {
        let mut season = self.season_repo.find(id).await?;

        season.apply(request.into())?;
        self.season_repo.save(&season).await?;

        log_debug!("Updated season {}", id);
        Ok(())
    }

    pub async fn delete_season(&self, id: &SeasonId) -> AppResult<()> {
        self.season_repo.delete(id).await?;

        log_info!("Deleted season {}", id);
        Ok(())
    }
}
