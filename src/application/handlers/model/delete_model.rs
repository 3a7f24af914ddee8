//! DeleteModelHandler - Command handler removing a decision model.

use std::sync::Arc;

use tracing::info;

use crate::domain::decision::{DecisionModel, ModelError};
use crate::domain::foundation::ModelId;
use crate::ports::DecisionModelRepository;

/// Command to delete a model.
#[derive(Debug, Clone)]
pub struct DeleteModelCommand {
    pub model_id: ModelId,
}

pub struct DeleteModelHandler {
    repository: Arc<dyn DecisionModelRepository>,
}

impl DeleteModelHandler {
    pub fn new(repository: Arc<dyn DecisionModelRepository>) -> Self {
        Self { repository }
    }

    /// Deletes the model and returns it as it was stored.
    pub async fn handle(&self, cmd: DeleteModelCommand) -> Result<DecisionModel, ModelError> {
        let removed = self.repository.delete(&cmd.model_id).await?;
        info!(model_id = %cmd.model_id, "Decision model deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryDecisionModelRepository;

    #[tokio::test]
    async fn deletes_and_returns_model() {
        let repo = Arc::new(InMemoryDecisionModelRepository::new());
        let model = DecisionModel::create("Temp", ["A", "B"], ["C"]).unwrap();
        repo.save(&model).await.unwrap();

        let removed = DeleteModelHandler::new(repo.clone())
            .handle(DeleteModelCommand {
                model_id: model.model_id().clone(),
            })
            .await
            .unwrap();

        assert_eq!(removed, model);
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn deleting_twice_is_not_found() {
        let repo = Arc::new(InMemoryDecisionModelRepository::new());
        let model = DecisionModel::create("Temp", ["A", "B"], ["C"]).unwrap();
        repo.save(&model).await.unwrap();
        let handler = DeleteModelHandler::new(repo);
        let cmd = DeleteModelCommand {
            model_id: model.model_id().clone(),
        };

        handler.handle(cmd.clone()).await.unwrap();
        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(err, ModelError::NotFound(model.model_id().clone()));
    }
}
