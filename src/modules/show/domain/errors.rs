use crate::shared::domain::ShowId;
use crate::shared::errors::{AppError, ErrorCode};
use serde_json::json;

pub fn blank_title(title: &str) -> AppError {
    AppError::domain(
        ErrorCode::ShowDomain,
        "Show title cannot be blank",
        json!({ "title": title }),
    )
}

pub fn show_not_found(id: &ShowId) -> AppError {
    AppError::not_found(ErrorCode::ShowNotFound, "Show not found", id.as_str())
}
