use crate::modules::show::domain::{Show, ShowChanges};
use crate::shared::utils::serde_fields::present;
use serde::{Deserialize, Serialize};

/// Show as returned to callers; `year` is `null` when unknown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowDto {
    pub id: String,
    pub title: String,
    pub year: Option<i32>,
}

impl From<&Show> for ShowDto {
    fn from(show: &Show) -> Self {
        Self {
            id: show.id().to_string(),
            title: show.title().to_string(),
            year: show.year(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CreateShowRequest {
    pub title: String,
    /// May be omitted, but not `null`
    #[serde(default, deserialize_with = "present")]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct UpdateShowRequest {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<String>,
    /// `null` clears the year, omitting it keeps the current one
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub year: Option<Option<i32>>,
}

impl From<UpdateShowRequest> for ShowChanges {
    fn from(request: UpdateShowRequest) -> Self {
        Self {
            title: request.title,
            year: request.year,
        }
    }
}
