// Rust guideline compliant 2026-10-19

//! Error handling for the listing services.

use nearby_core::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A coordinate was out of range or not finite.
    InvalidCoordinate,
    /// Carousel navigation outside the media sequence.
    IndexOutOfRange,
    /// No phone number for the entity.
    NoContactInfo,
    /// No coordinate for the entity.
    NoCoordinate,
    /// An action was invoked despite a closed gate.
    PreconditionViolated,
    /// Entity, config or context data failed validation.
    ValidationError,
    /// The request included invalid inputs.
    InvalidInput,
    /// IO failure while reading or writing local files.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// The tracing subscriber could not be installed.
    TelemetryError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Logging could not be initialized.
    #[error("Telemetry error: {0}")]
    Telemetry(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Telemetry(_) => ErrorCode::TelemetryError,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::InvalidCoordinate { .. } => ErrorCode::InvalidCoordinate,
                CoreError::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
                CoreError::NoContactInfo(_) => ErrorCode::NoContactInfo,
                CoreError::NoCoordinate(_) => ErrorCode::NoCoordinate,
                CoreError::PreconditionViolated(_) => ErrorCode::PreconditionViolated,
                CoreError::InvalidEntity(_)
                | CoreError::InvalidConfig(_)
                | CoreError::InvalidContext(_) => ErrorCode::ValidationError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Core(CoreError::InvalidCoordinate {
                latitude,
                longitude,
            }) => Some(serde_json::json!({
                "latitude": latitude,
                "longitude": longitude,
            })),
            AppError::Core(CoreError::IndexOutOfRange { index, item_count }) => {
                Some(serde_json::json!({
                    "index": index,
                    "item_count": item_count,
                }))
            }
            AppError::Core(CoreError::PreconditionViolated(cause)) => Some(serde_json::json!({
                "cause": cause.to_string(),
            })),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_code_and_details() {
        let err = AppError::from(CoreError::PreconditionViolated(Box::new(
            CoreError::NoContactInfo("nursing_9".to_string()),
        )));
        assert_eq!(err.code(), ErrorCode::PreconditionViolated);
        let details = err.details().unwrap();
        assert!(details["cause"].as_str().unwrap().contains("nursing_9"));
    }

    #[test]
    fn test_error_code_serializes_snake_case() {
        let value = serde_json::to_value(ErrorCode::NoContactInfo).unwrap();
        assert_eq!(value, serde_json::json!("no_contact_info"));
    }
}
