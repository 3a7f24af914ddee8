//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised while validating entities and expert submissions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' needs at least {min} entries, got {actual}")]
    TooFewEntries {
        field: String,
        min: usize,
        actual: usize,
    },

    #[error("Field '{field}' contains duplicate id '{id}'")]
    DuplicateId { field: String, id: String },

    #[error("Field '{field}' references unknown id '{id}'")]
    UnknownReference { field: String, id: String },

    #[error("Field '{field}' must be a finite number")]
    NonFinite { field: String },

    #[error("Field '{field}' must not be negative, got {actual}")]
    Negative { field: String, actual: f64 },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a minimum cardinality validation error.
    pub fn too_few_entries(field: impl Into<String>, min: usize, actual: usize) -> Self {
        ValidationError::TooFewEntries {
            field: field.into(),
            min,
            actual,
        }
    }

    /// Creates a duplicate identifier validation error.
    pub fn duplicate_id(field: impl Into<String>, id: impl Into<String>) -> Self {
        ValidationError::DuplicateId {
            field: field.into(),
            id: id.into(),
        }
    }

    /// Creates a dangling reference validation error.
    pub fn unknown_reference(field: impl Into<String>, id: impl Into<String>) -> Self {
        ValidationError::UnknownReference {
            field: field.into(),
            id: id.into(),
        }
    }

    /// Creates a non-finite number validation error.
    pub fn non_finite(field: impl Into<String>) -> Self {
        ValidationError::NonFinite { field: field.into() }
    }

    /// Creates a negative number validation error.
    pub fn negative(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::Negative {
            field: field.into(),
            actual,
        }
    }
}

/// Error codes surfaced to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request errors
    BadRequest,
    ValidationFailed,
    InvalidDocument,

    // Resource errors
    NotFound,
    ModelNotFound,
    ModelAlreadyExists,

    // Computation errors
    RankingFailed,

    // Infrastructure errors
    StorageError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidDocument => "INVALID_DOCUMENT",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ModelNotFound => "MODEL_NOT_FOUND",
            ErrorCode::ModelAlreadyExists => "MODEL_ALREADY_EXISTS",
            ErrorCode::RankingFailed => "RANKING_FAILED",
            ErrorCode::StorageError => "STORAGE_ERROR",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_displays_correctly() {
        let err = ValidationError::empty_field("name");
        assert_eq!(format!("{}", err), "Field 'name' cannot be empty");
    }

    #[test]
    fn too_few_entries_displays_correctly() {
        let err = ValidationError::too_few_entries("alternatives", 2, 1);
        assert_eq!(
            format!("{}", err),
            "Field 'alternatives' needs at least 2 entries, got 1"
        );
    }

    #[test]
    fn unknown_reference_displays_correctly() {
        let err = ValidationError::unknown_reference("criterion_weights", "c-9");
        assert_eq!(
            format!("{}", err),
            "Field 'criterion_weights' references unknown id 'c-9'"
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ModelNotFound), "MODEL_NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::StorageError), "STORAGE_ERROR");
    }
}
