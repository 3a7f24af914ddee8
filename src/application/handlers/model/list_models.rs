//! ListModelsHandler - Query handler listing every stored model.

use std::sync::Arc;

use tracing::debug;

use crate::domain::decision::{DecisionModel, ModelError};
use crate::ports::DecisionModelRepository;

pub struct ListModelsHandler {
    repository: Arc<dyn DecisionModelRepository>,
}

impl ListModelsHandler {
    pub fn new(repository: Arc<dyn DecisionModelRepository>) -> Self {
        Self { repository }
    }

    /// Returns all models in the order they were stored.
    pub async fn handle(&self) -> Result<Vec<DecisionModel>, ModelError> {
        let models = self.repository.list().await?;
        debug!(count = models.len(), "Listed decision models");
        Ok(models)
    }
}
