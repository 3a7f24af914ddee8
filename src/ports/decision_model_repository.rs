//! Decision model repository port.
//!
//! Defines the contract for storing and retrieving DecisionModel aggregates.
//! The ranking engine never sees this port; handlers load a snapshot and pass
//! it in.
//!
//! # Design
//!
//! - **Snapshot reads**: every read returns an owned copy
//! - **Atomic append**: expert inputs are validated and appended in one step,
//!   so a concurrent reader sees either the old or the new input list

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::decision::{DecisionModel, ExpertInput, ModelError};
use crate::domain::foundation::{ModelId, ValidationError};

/// Errors that can occur during repository operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RepositoryError {
    #[error("Model not found: {0}")]
    NotFound(ModelId),

    #[error("Model already exists: {0}")]
    AlreadyExists(ModelId),

    #[error("Expert input rejected: {0}")]
    Rejected(#[from] ValidationError),

    #[error("Storage failure: {0}")]
    Storage(String),
}

impl From<RepositoryError> for ModelError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => ModelError::NotFound(id),
            RepositoryError::AlreadyExists(id) => ModelError::AlreadyExists(id),
            RepositoryError::Rejected(e) => ModelError::Validation(e),
            RepositoryError::Storage(msg) => ModelError::Infrastructure(msg),
        }
    }
}

/// Repository port for DecisionModel persistence.
#[async_trait]
pub trait DecisionModelRepository: Send + Sync {
    /// Store a new model.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if a model with the same id is stored
    async fn save(&self, model: &DecisionModel) -> Result<(), RepositoryError>;

    /// Find a model by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ModelId) -> Result<Option<DecisionModel>, RepositoryError>;

    /// List every stored model in insertion order.
    async fn list(&self) -> Result<Vec<DecisionModel>, RepositoryError>;

    /// Remove a model, returning what was stored.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the model doesn't exist
    async fn delete(&self, id: &ModelId) -> Result<DecisionModel, RepositoryError>;

    /// Validate an expert input against the stored model and append it.
    ///
    /// Returns the model as it is after the append.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the model doesn't exist
    /// - `Rejected` if the input references unknown ids or carries bad numbers
    async fn append_expert_input(
        &self,
        id: &ModelId,
        input: ExpertInput,
    ) -> Result<DecisionModel, RepositoryError>;
}
