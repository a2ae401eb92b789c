//! Shared API types
//!
//! Error responses, paging defaults and validators used by the player endpoints.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use validator::ValidationError;

use crate::core::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::domain::PlayerError;

/// Validator function for the page size parameter
pub fn validate_page_size(size: u32) -> Result<(), ValidationError> {
    if size == 0 || size > MAX_PAGE_SIZE {
        return Err(ValidationError::new("page_size_range").with_message(
            format!("pageSize must be between 1 and {}", MAX_PAGE_SIZE).into(),
        ));
    }
    Ok(())
}

pub fn default_page_number() -> u32 {
    DEFAULT_PAGE_NUMBER
}

pub fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Standard API error response
#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn from_data(e: crate::data::DataError) -> Self {
        tracing::error!(error = %e, backend = e.backend(), "Data error");
        Self::internal("Database operation failed")
    }
}

impl From<PlayerError> for ApiError {
    fn from(e: PlayerError) -> Self {
        match e {
            PlayerError::InvalidParameters(message) => {
                Self::bad_request("INVALID_PARAMETERS", message)
            }
            PlayerError::NotFound(id) => {
                Self::not_found("PLAYER_NOT_FOUND", format!("Player {} not found", id))
            }
            PlayerError::Store(e) => Self::from_data(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, code, message) = match self {
            Self::BadRequest { code, message } => {
                (StatusCode::BAD_REQUEST, "bad_request", code, message)
            }
            Self::NotFound { code, message } => (StatusCode::NOT_FOUND, "not_found", code, message),
            Self::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "INTERNAL".to_string(),
                message,
            ),
        };
        (
            status,
            Json(serde_json::json!({
                "error": error_type,
                "code": code,
                "message": message
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataError;

    #[test]
    fn test_validate_page_size() {
        assert!(validate_page_size(0).is_err());
        assert!(validate_page_size(1).is_ok());
        assert!(validate_page_size(MAX_PAGE_SIZE).is_ok());
        assert!(validate_page_size(MAX_PAGE_SIZE + 1).is_err());
    }

    #[test]
    fn test_player_error_status_mapping() {
        let cases = [
            (
                PlayerError::invalid("bad name"),
                StatusCode::BAD_REQUEST,
            ),
            (PlayerError::NotFound(7), StatusCode::NOT_FOUND),
            (
                PlayerError::Store(DataError::InvalidRow {
                    backend: "sqlite",
                    reason: "broken".to_string(),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, status) in cases {
            let response = ApiError::from(error).into_response();
            assert_eq!(response.status(), status);
        }
    }
}
