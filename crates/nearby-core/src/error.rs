// Rust guideline compliant 2026-10-19

//! Error types for the directory engine.

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for engine operations.
///
/// `InvalidCoordinate`, `IndexOutOfRange` and `PreconditionViolated` signal a
/// miswired caller. `NoContactInfo` and `NoCoordinate` are expected absences
/// of data and surface as a hidden or disabled affordance, never as a message.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Latitude or longitude outside the valid range, or not finite.
    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate {
        /// Offending latitude.
        latitude: f64,
        /// Offending longitude.
        longitude: f64,
    },

    /// Carousel navigation to an index outside the media sequence.
    #[error("Index out of range: {index} not in 0..{item_count}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of items in the carousel.
        item_count: usize,
    },

    /// No phone number resolves for the entity.
    #[error("No contact info for entity: {0}")]
    NoContactInfo(String),

    /// The entity lacks a latitude or a longitude.
    #[error("No coordinate for entity: {0}")]
    NoCoordinate(String),

    /// An action target was requested while its gate was closed.
    #[error("Precondition violated: {0}")]
    PreconditionViolated(Box<Error>),

    /// Invalid entity data.
    #[error("Invalid entity: {0}")]
    InvalidEntity(String),

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Invalid or unreadable session context.
    #[error("Invalid context: {0}")]
    InvalidContext(String),
}

impl Error {
    /// Returns true for conditions that a correctly wired UI never triggers.
    #[must_use]
    pub fn is_programming_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidCoordinate { .. }
                | Error::IndexOutOfRange { .. }
                | Error::PreconditionViolated(_)
        )
    }

    /// Returns true for expected, user-facing absence of data.
    #[must_use]
    pub fn is_data_absence(&self) -> bool {
        matches!(self, Error::NoContactInfo(_) | Error::NoCoordinate(_))
    }
}
