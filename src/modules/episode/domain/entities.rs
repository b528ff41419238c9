use super::value_objects::EpisodeNumber;
use crate::shared::domain::{EpisodeId, SeasonId, ShowId};
use crate::shared::errors::AppResult;

/// An episode, referencing both its show and its season by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    id: EpisodeId,
    show_id: ShowId,
    season_id: SeasonId,
    episode_number: EpisodeNumber,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodeChanges {
    pub show_id: Option<ShowId>,
    pub season_id: Option<SeasonId>,
    pub episode_number: Option<i32>,
}

impl Episode {
    pub fn new(
        id: EpisodeId,
        show_id: ShowId,
        season_id: SeasonId,
        episode_number: EpisodeNumber,
    ) -> Self {
        Self {
            id,
            show_id,
            season_id,
            episode_number,
        }
    }

    pub fn create(show_id: ShowId, season_id: SeasonId, episode_number: EpisodeNumber) -> Self {
        Self::new(EpisodeId::generate(), show_id, season_id, episode_number)
    }

    pub fn id(&self) -> &EpisodeId {
        &self.id
    }

    pub fn show_id(&self) -> &ShowId {
        &self.show_id
    }

    pub fn season_id(&self) -> &SeasonId {
        &self.season_id
    }

    pub fn episode_number(&self) -> EpisodeNumber {
        self.episode_number
    }

    pub fn set_show_id(&mut self, show_id: ShowId) {
        self.show_id = show_id;
    }

    pub fn set_season_id(&mut self, season_id: SeasonId) {
        self.season_id = season_id;
    }

    pub fn set_episode_number(&mut self, episode_number: EpisodeNumber) {
        self.episode_number = episode_number;
    }

    /// Validate every supplied field, then assign them all
    pub fn apply(&mut self, changes: EpisodeChanges) -> AppResult<()> {
        let episode_number = changes
            .episode_number
            .map(EpisodeNumber::new)
            .transpose()?;

        if let Some(show_id) = changes.show_id {
            self.show_id = show_id;
        }
        if let Some(season_id) = changes.season_id {
            self.season_id = season_id;
        }
        if let Some(episode_number) = episode_number {
            self.episode_number = episode_number;
        }
        Ok(())
    }
}
