use crate::modules::episode::domain::{Episode, EpisodeChanges};
use crate::shared::domain::{SeasonId, ShowId};
use crate::shared::utils::serde_fields::present;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeDto {
    pub id: String,
    pub show_id: String,
    pub season_id: String,
    pub episode_number: i32,
}

impl From<&Episode> for EpisodeDto {
    fn from(episode: &Episode) -> Self {
        Self {
            id: episode.id().to_string(),
            show_id: episode.show_id().to_string(),
            season_id: episode.season_id().to_string(),
            episode_number: episode.episode_number().value(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CreateEpisodeRequest {
    pub show_id: String,
    pub season_id: String,
    pub episode_number: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct UpdateEpisodeRequest {
    #[serde(default, deserialize_with = "present")]
    pub show_id: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub season_id: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub episode_number: Option<i32>,
}

impl From<UpdateEpisodeRequest> for EpisodeChanges {
    fn from(request: UpdateEpisodeRequest) -> Self {
        Self {
            show_id: request.show_id.map(ShowId::from),
            season_id: request.season_id.map(SeasonId::from),
            episode_number: request.episode_number,
        }
    }
}
