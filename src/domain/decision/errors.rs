//! Model-level error types shared by the application and HTTP layers.

use thiserror::Error;

use crate::domain::analysis::RankingError;
use crate::domain::foundation::{ErrorCode, ModelId, ValidationError};

/// Errors produced while managing decision models.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// No model with this id is stored.
    #[error("Model not found: {0}")]
    NotFound(ModelId),

    /// A model with this id is already stored.
    #[error("Model ID already exists: {0}")]
    AlreadyExists(ModelId),

    /// Client input broke a model invariant.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// An uploaded document could not be read as a model.
    #[error("Invalid model document: {0}")]
    InvalidDocument(String),

    /// The ranking engine refused the model.
    #[error("Ranking failed: {0}")]
    Ranking(#[from] RankingError),

    /// The store failed.
    #[error("Storage error: {0}")]
    Infrastructure(String),
}

impl ModelError {
    pub fn invalid_document(message: impl Into<String>) -> Self {
        ModelError::InvalidDocument(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ModelError::NotFound(_) => ErrorCode::ModelNotFound,
            ModelError::AlreadyExists(_) => ErrorCode::ModelAlreadyExists,
            ModelError::Validation(_) => ErrorCode::ValidationFailed,
            ModelError::InvalidDocument(_) => ErrorCode::InvalidDocument,
            ModelError::Ranking(_) => ErrorCode::RankingFailed,
            ModelError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}
