//! ImportModelHandler - Command handler restoring a model from a JSON document.
//!
//! The document has the same shape as an export. Missing ids are generated,
//! a supplied model id is kept as-is and must not already be stored.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::decision::{DecisionModel, ModelError};
use crate::ports::DecisionModelRepository;

/// Command carrying the raw uploaded document.
#[derive(Debug, Clone)]
pub struct ImportModelCommand {
    pub document: Vec<u8>,
}

pub struct ImportModelHandler {
    repository: Arc<dyn DecisionModelRepository>,
}

impl ImportModelHandler {
    pub fn new(repository: Arc<dyn DecisionModelRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ImportModelCommand) -> Result<DecisionModel, ModelError> {
        // 1. Parse
        let model: DecisionModel = serde_json::from_slice(&cmd.document).map_err(|e| {
            warn!(error = %e, "Rejected model document");
            ModelError::invalid_document(format!("Invalid JSON file: {}", e))
        })?;

        // 2. Structural checks, including every embedded expert input
        model.validate().map_err(|e| {
            warn!(model_id = %model.model_id(), error = %e, "Rejected model document");
            ModelError::invalid_document(format!("Invalid model document: {}", e))
        })?;

        // 3. Persist; a clashing id is a conflict
        self.repository.save(&model).await?;

        info!(
            model_id = %model.model_id(),
            experts = model.expert_inputs().len(),
            "Decision model imported"
        );

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryDecisionModelRepository;
    use crate::domain::foundation::ModelId;
    use serde_json::json;

    fn import(doc: serde_json::Value) -> ImportModelCommand {
        ImportModelCommand {
            document: serde_json::to_vec(&doc).unwrap(),
        }
    }

    #[tokio::test]
    async fn imports_document_with_generated_ids() {
        let repo = Arc::new(InMemoryDecisionModelRepository::new());
        let handler = ImportModelHandler::new(repo.clone());

        let model = handler
            .handle(import(
                json!({
                    "name": "Imported",
                    "alternatives": [{"name": "A"}, {"name": "B"}],
                    "criteria": [{"name": "Price"}]
                }),
            ))
            .await
            .unwrap();

        assert_eq!(model.alternatives().len(), 2);
        assert!(model.expert_inputs().is_empty());
        assert!(repo.find_by_id(model.model_id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn keeps_supplied_ids_and_expert_inputs() {
        let repo = Arc::new(InMemoryDecisionModelRepository::new());
        let handler = ImportModelHandler::new(repo.clone());

        let model = handler
            .handle(import(
                json!({
                    "model_id": "fixed",
                    "name": "Imported",
                    "alternatives": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}],
                    "criteria": [{"id": "c", "name": "Price"}],
                    "expert_inputs": [{
                        "expert_id": "e1",
                        "criterion_weights": {"c": 1.0},
                        "criterion_scores": {"c": {"a": 2.0, "b": 4.0}}
                    }]
                }),
            ))
            .await
            .unwrap();

        assert_eq!(model.model_id().as_str(), "fixed");
        assert_eq!(model.expert_inputs()[0].expert_id().as_str(), "e1");
    }

    #[tokio::test]
    async fn malformed_json_is_invalid_document() {
        let repo = Arc::new(InMemoryDecisionModelRepository::new());
        let err = ImportModelHandler::new(repo)
            .handle(ImportModelCommand {
                document: b"{not json".to_vec(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ModelError::InvalidDocument(_)));
    }

    #[tokio::test]
    async fn structurally_invalid_model_is_rejected() {
        let repo = Arc::new(InMemoryDecisionModelRepository::new());
        let err = ImportModelHandler::new(repo.clone())
            .handle(import(
                json!({
                    "name": "Lonely",
                    "alternatives": [{"name": "Only"}],
                    "criteria": [{"name": "Price"}]
                }),
            ))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ModelError::invalid_document(
                "Invalid model document: Field 'alternatives' needs at least 2 entries, got 1"
            )
        );
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn duplicate_model_id_is_a_conflict() {
        let repo = Arc::new(InMemoryDecisionModelRepository::new());
        let handler = ImportModelHandler::new(repo.clone());
        let doc = json!({
            "model_id": "twice",
            "name": "Dup",
            "alternatives": [{"name": "A"}, {"name": "B"}],
            "criteria": [{"name": "C"}]
        });

        handler.handle(import(doc.clone())).await.unwrap();
        let err = handler.handle(import(doc)).await.unwrap_err();

        assert_eq!(err, ModelError::AlreadyExists(ModelId::new("twice").unwrap()));
        assert_eq!(repo.len().await, 1);
    }
}
