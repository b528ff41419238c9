use super::errors::negative_season_number;
use crate::shared::errors::{AppError, AppResult};
use serde::Serialize;

/// Season ordinal; 0 is allowed for specials
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SeasonNumber(i32);

impl SeasonNumber {
    pub fn new(value: i32) -> AppResult<Self> {
        if value < 0 {
            return Err(negative_season_number(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for SeasonNumber {
    type Error = AppError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for SeasonNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
