use serde::Serialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Machine-readable error codes carried by domain and not-found errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCode {
    #[serde(rename = "SHOW_DOMAIN_ERROR")]
    ShowDomain,
    #[serde(rename = "SEASONNUMBER_DOMAIN_ERROR")]
    SeasonNumberDomain,
    #[serde(rename = "EPISODENUMBER_DOMAIN_ERROR")]
    EpisodeNumberDomain,
    #[serde(rename = "SHOW_NOT_FOUND_ERROR")]
    ShowNotFound,
    #[serde(rename = "SEASON_NOT_FOUND_ERROR")]
    SeasonNotFound,
    #[serde(rename = "EPISODE_NOT_FOUND_ERROR")]
    EpisodeNotFound,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ShowDomain => "SHOW_DOMAIN_ERROR",
            ErrorCode::SeasonNumberDomain => "SEASONNUMBER_DOMAIN_ERROR",
            ErrorCode::EpisodeNumberDomain => "EPISODENUMBER_DOMAIN_ERROR",
            ErrorCode::ShowNotFound => "SHOW_NOT_FOUND_ERROR",
            ErrorCode::SeasonNotFound => "SEASON_NOT_FOUND_ERROR",
            ErrorCode::EpisodeNotFound => "EPISODE_NOT_FOUND_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "error")]
pub enum AppError {
    /// An entity or value object invariant was violated
    #[error("{message}")]
    Domain {
        message: String,
        code: ErrorCode,
        details: JsonValue,
    },

    #[error("{message}")]
    NotFound {
        message: String,
        code: ErrorCode,
        id: String,
    },

    /// Unique, foreign key, not-null or check constraint rejected by the store
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn domain(code: ErrorCode, message: impl Into<String>, details: JsonValue) -> Self {
        AppError::Domain {
            message: message.into(),
            code,
            details,
        }
    }

    pub fn not_found(code: ErrorCode, message: impl Into<String>, id: impl Into<String>) -> Self {
        AppError::NotFound {
            message: message.into(),
            code,
            id: id.into(),
        }
    }

    /// A stored row that no longer satisfies a domain invariant is a storage fault
    pub fn invalid_row(table: &str, id: &str, source: AppError) -> Self {
        AppError::DatabaseError(format!("Invalid row {} in {}: {}", id, table, source))
    }

    /// Code for errors that carry one
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            AppError::Domain { code, .. } | AppError::NotFound { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};

        match err {
            Error::DatabaseError(
                DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::CheckViolation,
                info,
            ) => AppError::ConstraintViolation(info.message().to_string()),
            _ => AppError::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::DatabaseError(format!("Database pool error: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Blocking task failed: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("Serialization error: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_code_strings_are_stable() {
        assert_eq!(ErrorCode::ShowDomain.to_string(), "SHOW_DOMAIN_ERROR");
        assert_eq!(
            ErrorCode::EpisodeNumberDomain.to_string(),
            "EPISODENUMBER_DOMAIN_ERROR"
        );
        assert_eq!(
            serde_json::to_value(ErrorCode::SeasonNotFound).unwrap(),
            json!("SEASON_NOT_FOUND_ERROR")
        );
    }

    #[test]
    fn test_not_found_carries_id_and_message() {
        let err = AppError::not_found(ErrorCode::EpisodeNotFound, "Episode not found", "missing");

        assert_eq!(err.to_string(), "Episode not found");
        assert_eq!(err.code(), Some(ErrorCode::EpisodeNotFound));
        assert!(err.is_not_found());
        match err {
            AppError::NotFound { id, .. } => assert_eq!(id, "missing"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_diesel_not_found_is_not_a_domain_not_found() {
        let err = AppError::from(diesel::result::Error::NotFound);

        assert!(matches!(err, AppError::DatabaseError(_)));
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_invalid_row_is_a_database_error() {
        let source = AppError::domain(
            ErrorCode::SeasonNumberDomain,
            "Season number cannot be negative",
            json!({ "seasonNumber": -3 }),
        );

        let err = AppError::invalid_row("seasons", "s1", source);

        assert_eq!(
            err,
            AppError::DatabaseError(
                "Invalid row s1 in seasons: Season number cannot be negative".to_string()
            )
        );
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_domain_error_serializes_with_details() {
        let err = AppError::domain(
            ErrorCode::SeasonNumberDomain,
            "Season number cannot be negative",
            json!({ "seasonNumber": -1 }),
        );

        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["type"], "Domain");
        assert_eq!(value["error"]["code"], "SEASONNUMBER_DOMAIN_ERROR");
        assert_eq!(value["error"]["details"]["seasonNumber"], -1);
    }
}
