//! GetModelHandler - Query handler for a single decision model.

use std::sync::Arc;

use crate::domain::decision::{DecisionModel, ModelError};
use crate::domain::foundation::ModelId;
use crate::ports::DecisionModelRepository;

/// Query for one model by id.
#[derive(Debug, Clone)]
pub struct GetModelQuery {
    pub model_id: ModelId,
}

pub struct GetModelHandler {
    repository: Arc<dyn DecisionModelRepository>,
}

impl GetModelHandler {
    pub fn new(repository: Arc<dyn DecisionModelRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetModelQuery) -> Result<DecisionModel, ModelError> {
        self.repository
            .find_by_id(&query.model_id)
            .await?
            .ok_or(ModelError::NotFound(query.model_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryDecisionModelRepository;

    #[tokio::test]
    async fn returns_stored_model() {
        let repo = Arc::new(InMemoryDecisionModelRepository::new());
        let model = DecisionModel::create("Lunch", ["Pizza", "Sushi"], ["Taste"]).unwrap();
        repo.save(&model).await.unwrap();

        let handler = GetModelHandler::new(repo);
        let found = handler
            .handle(GetModelQuery {
                model_id: model.model_id().clone(),
            })
            .await
            .unwrap();

        assert_eq!(found, model);
    }

    #[tokio::test]
    async fn unknown_model_is_not_found() {
        let handler = GetModelHandler::new(Arc::new(InMemoryDecisionModelRepository::new()));
        let id = ModelId::new("missing").unwrap();

        let err = handler
            .handle(GetModelQuery { model_id: id.clone() })
            .await
            .unwrap_err();

        assert_eq!(err, ModelError::NotFound(id));
    }
}
