use crate::modules::season::domain::{Season, SeasonChanges};
use crate::shared::domain::ShowId;
use crate::shared::utils::serde_fields::present;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonDto {
    pub id: String,
    pub show_id: String,
    pub season_number: i32,
}

impl From<&Season> for SeasonDto {
    fn from(season: &Season) -> Self {
        Self {
            id: season.id().to_string(),
            show_id: season.show_id().to_string(),
            season_number: season.season_number().value(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CreateSeasonRequest {
    pub show_id: String,
    pub season_number: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct UpdateSeasonRequest {
    #[serde(default, deserialize_with = "present")]
    pub show_id: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub season_number: Option<i32>,
}

impl From<UpdateSeasonRequest> for SeasonChanges {
    fn from(request: UpdateSeasonRequest) -> Self {
        Self {
            show_id: request.show_id.map(ShowId::from),
            season_number: request.season_number,
        }
    }
}
