//! Error types for dwell-values.
//!
//! The reasoning engine itself is total and never fails. Errors only exist
//! at the boundary: parsing catalog names, validating judgments before they
//! are stored, and decoding extractor output.

use thiserror::Error;

/// Validation errors that occur while checking or parsing input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unknown value name: '{name}'")]
    UnknownValue {
        name: String,
    },

    #[error("Unknown emotion name: '{name}'")]
    UnknownEmotion {
        name: String,
    },

    #[error("Unknown review status: '{status}'")]
    UnknownReviewStatus {
        status: String,
    },

    #[error("Judgment compares {value} with itself")]
    SelfComparison {
        value: String,
    },

    #[error("Field '{field}' cannot be empty")]
    EmptyField {
        field: String,
    },
}

/// Top-level error type for dwell-values.
#[derive(Debug, Error)]
pub enum DwellError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
    },
}

impl DwellError {
    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a serialization error.
    #[must_use]
    pub const fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

impl From<serde_json::Error> for DwellError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result type alias for dwell-values operations.
pub type DwellResult<T> = Result<T, DwellError>;
