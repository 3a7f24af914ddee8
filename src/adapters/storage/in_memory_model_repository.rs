//! In-Memory Decision Model Repository
//!
//! Keeps decision models in process memory. Contents are lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::decision::{DecisionModel, ExpertInput};
use crate::domain::foundation::ModelId;
use crate::ports::{DecisionModelRepository, RepositoryError};

#[derive(Debug, Default)]
struct Models {
    by_id: HashMap<ModelId, DecisionModel>,
    order: Vec<ModelId>,
}

/// In-memory storage for decision models.
///
/// A single `RwLock` guards the map and the insertion order, giving
/// exclusive-writer / many-reader access.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDecisionModelRepository {
    models: Arc<RwLock<Models>>,
}

impl InMemoryDecisionModelRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored models
    pub async fn len(&self) -> usize {
        self.models.read().await.order.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl DecisionModelRepository for InMemoryDecisionModelRepository {
    async fn save(&self, model: &DecisionModel) -> Result<(), RepositoryError> {
        let mut models = self.models.write().await;
        let id = model.model_id().clone();
        if models.by_id.contains_key(&id) {
            return Err(RepositoryError::AlreadyExists(id));
        }
        models.order.push(id.clone());
        models.by_id.insert(id, model.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ModelId) -> Result<Option<DecisionModel>, RepositoryError> {
        let models = self.models.read().await;
        Ok(models.by_id.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<DecisionModel>, RepositoryError> {
        let models = self.models.read().await;
        Ok(models
            .order
            .iter()
            .filter_map(|id| models.by_id.get(id).cloned())
            .collect())
    }

    async fn delete(&self, id: &ModelId) -> Result<DecisionModel, RepositoryError> {
        let mut models = self.models.write().await;
        let removed = models
            .by_id
            .remove(id)
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))?;
        models.order.retain(|stored| stored != id);
        Ok(removed)
    }

    async fn append_expert_input(
        &self,
        id: &ModelId,
        input: ExpertInput,
    ) -> Result<DecisionModel, RepositoryError> {
        let mut models = self.models.write().await;
        let model = models
            .by_id
            .get_mut(id)
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))?;
        model.add_expert_input(input)?;
        Ok(model.clone())
    }
}
