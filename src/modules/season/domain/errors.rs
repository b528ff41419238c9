use crate::shared::domain::SeasonId;
use crate::shared::errors::{AppError, ErrorCode};
use serde_json::json;

pub fn negative_season_number(season_number: i32) -> AppError {
    AppError::domain(
        ErrorCode::SeasonNumberDomain,
        "Season number cannot be negative",
        json!({ "seasonNumber": season_number }),
    )
}

pub fn season_not_found(id: &SeasonId) -> AppError {
    AppError::not_found(ErrorCode::SeasonNotFound, "Season not found", id.as_str())
}
