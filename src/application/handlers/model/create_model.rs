//! CreateModelHandler - Command handler for creating new decision models.

use std::sync::Arc;

use tracing::info;

use crate::domain::decision::{DecisionModel, ModelError};
use crate::ports::DecisionModelRepository;

/// Command to create a new decision model.
#[derive(Debug, Clone)]
pub struct CreateModelCommand {
    pub name: String,
    pub alternatives: Vec<String>,
    pub criteria: Vec<String>,
}

/// Handler for creating decision models.
pub struct CreateModelHandler {
    repository: Arc<dyn DecisionModelRepository>,
}

impl CreateModelHandler {
    pub fn new(repository: Arc<dyn DecisionModelRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateModelCommand) -> Result<DecisionModel, ModelError> {
        // 1. Build aggregate; ids are generated here
        let model = DecisionModel::create(cmd.name, cmd.alternatives, cmd.criteria)?;

        // 2. Persist
        self.repository.save(&model).await?;

        info!(
            model_id = %model.model_id(),
            alternatives = model.alternatives().len(),
            criteria = model.criteria().len(),
            "Decision model created"
        );

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryDecisionModelRepository;
    use crate::domain::foundation::ValidationError;

    fn command(alternatives: &[&str], criteria: &[&str]) -> CreateModelCommand {
        CreateModelCommand {
            name: "Choose a framework".to_string(),
            alternatives: alternatives.iter().map(|s| s.to_string()).collect(),
            criteria: criteria.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn creates_and_stores_model() {
        let repo = Arc::new(InMemoryDecisionModelRepository::new());
        let handler = CreateModelHandler::new(repo.clone());

        let model = handler
            .handle(command(&["Axum", "Actix"], &["Ergonomics", "Speed"]))
            .await
            .unwrap();

        assert_eq!(model.name(), "Choose a framework");
        assert_eq!(model.alternatives()[1].name, "Actix");
        let stored = repo.find_by_id(model.model_id()).await.unwrap();
        assert_eq!(stored, Some(model));
    }

    #[tokio::test]
    async fn rejects_fewer_than_two_alternatives() {
        let repo = Arc::new(InMemoryDecisionModelRepository::new());
        let handler = CreateModelHandler::new(repo.clone());

        let err = handler.handle(command(&["Axum"], &["Speed"])).await.unwrap_err();

        assert_eq!(
            err,
            ModelError::Validation(ValidationError::too_few_entries("alternatives", 2, 1))
        );
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn rejects_missing_criteria() {
        let repo = Arc::new(InMemoryDecisionModelRepository::new());
        let handler = CreateModelHandler::new(repo);

        let err = handler.handle(command(&["Axum", "Actix"], &[])).await.unwrap_err();
        assert!(matches!(err, ModelError::Validation(_)));
    }
}
