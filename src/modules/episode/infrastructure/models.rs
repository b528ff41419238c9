/// Diesel model for the episodes table
use crate::modules::episode::domain::{Episode, EpisodeNumber};
use crate::schema::episodes;
use crate::shared::domain::{EpisodeId, SeasonId, ShowId};
use crate::shared::errors::AppError;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = episodes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EpisodeModel {
    pub id: String,
    pub show_id: String,
    pub season_id: String,
    pub episode_number: i32,
}

impl From<&Episode> for EpisodeModel {
    fn from(episode: &Episode) -> Self {
        Self {
            id: episode.id().to_string(),
            show_id: episode.show_id().to_string(),
            season_id: episode.season_id().to_string(),
            episode_number: episode.episode_number().value(),
        }
    }
}

impl TryFrom<EpisodeModel> for Episode {
    type Error = AppError;

    fn try_from(model: EpisodeModel) -> Result<Self, Self::Error> {
        let episode_number = EpisodeNumber::new(model.episode_number)
            .map_err(|e| AppError::invalid_row("episodes", &model.id, e))?;

        Ok(Episode::new(
            EpisodeId::from(model.id),
            ShowId::from(model.show_id),
            SeasonId::from(model.season_id),
            episode_number,
        ))
    }
}
