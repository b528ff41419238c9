use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use super::app_error::AppError;
use crate::{log_debug, log_error};

pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
pub const INVALID_PARAMS_MESSAGE: &str = "Invalid request params";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown server error";

/// Error returned by HTTP handlers; rendered as `{"message": ...}`
#[derive(Error, Debug)]
#[error("{status}: {message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn invalid_body() -> Self {
        Self::new(StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE)
    }

    pub fn invalid_params() -> Self {
        Self::new(StatusCode::BAD_REQUEST, INVALID_PARAMS_MESSAGE)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, UNKNOWN_ERROR_MESSAGE)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound { message, .. } => Self::new(StatusCode::NOT_FOUND, message),
            AppError::Domain { message, .. } => Self::new(StatusCode::BAD_REQUEST, message),
            other => {
                // Detail stays in the log, never in the response
                log_error!("Request failed: {}", other);
                Self::internal()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        log_debug!("Rejected request body: {}", rejection.body_text());
        Self::invalid_body()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        log_debug!("Rejected path params: {}", rejection.body_text());
        Self::invalid_params()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}
