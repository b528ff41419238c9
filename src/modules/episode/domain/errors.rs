use crate::shared::domain::EpisodeId;
use crate::shared::errors::{AppError, ErrorCode};
use serde_json::json;

pub fn non_positive_episode_number(episode_number: i32) -> AppError {
    AppError::domain(
        ErrorCode::EpisodeNumberDomain,
        "Episode number must be greater than 0",
        json!({ "episodeNumber": episode_number }),
    )
}

pub fn episode_not_found(id: &EpisodeId) -> AppError {
    AppError::not_found(ErrorCode::EpisodeNotFound, "Episode not found", id.as_str())
}
