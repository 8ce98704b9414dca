//! Response types for the Faculty Payroll API.
//!
//! This module defines the error response structures, the mapping from
//! engine errors to HTTP status codes, and listing rows that join records
//! the engine keeps separately.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::Subject;
use crate::store::StoreError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a missing field error response.
    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::with_details(
            "MISSING_FIELD",
            format!("missing field: {}", field),
            format!("Required field '{}' was not provided in the request", field),
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    fn not_found(code: &str, message: String) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: ApiError::new(code, message),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidTimeRange { .. } => {
                Self::bad_request(ApiError::new("INVALID_TIME_RANGE", message))
            }
            EngineError::OverlappingSlot {
                conflicting_entry_id,
            } => Self::bad_request(ApiError::with_details(
                "OVERLAPPING_SLOT",
                message,
                format!(
                    "Choose a time range that does not intersect entry {}",
                    conflicting_entry_id
                ),
            )),
            EngineError::MissingField { field } => {
                Self::bad_request(ApiError::missing_field(field))
            }
            EngineError::InvalidMonth { .. } => {
                Self::bad_request(ApiError::new("INVALID_MONTH", message))
            }
            EngineError::NoEntriesForPeriod { .. } => {
                Self::not_found("NO_ENTRIES_FOR_PERIOD", message)
            }
            EngineError::FacultyNotFound { .. } => Self::not_found("FACULTY_NOT_FOUND", message),
            EngineError::EntryNotFound { .. } => Self::not_found("ENTRY_NOT_FOUND", message),
            EngineError::SubjectNotFound { .. } => Self::not_found("SUBJECT_NOT_FOUND", message),
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::Store(StoreError::Constraint { message }) => {
                Self::bad_request(ApiError::new("CONSTRAINT_VIOLATION", message))
            }
            EngineError::Store(err) => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORAGE_ERROR", "Storage failure", err.to_string()),
            },
        }
    }
}

/// A subject listing row with the owning faculty member's name attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectRow {
    /// The subject record.
    #[serde(flatten)]
    pub subject: Subject,
    /// The faculty member's name, if they still exist.
    pub faculty_name: Option<String>,
}
