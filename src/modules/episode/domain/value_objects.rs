use super::errors::non_positive_episode_number;
use crate::shared::errors::{AppError, AppResult};
use serde::Serialize;

/// Episode ordinal within a season, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EpisodeNumber(i32);

impl EpisodeNumber {
    pub fn new(value: i32) -> AppResult<Self> {
        if value < 1 {
            return Err(non_positive_episode_number(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for EpisodeNumber {
    type Error = AppError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for EpisodeNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
