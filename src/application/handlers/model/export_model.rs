//! ExportModelHandler - Query handler producing a downloadable model document.

use std::sync::Arc;

use tracing::debug;

use crate::domain::decision::{DecisionModel, ModelError};
use crate::domain::foundation::ModelId;
use crate::ports::DecisionModelRepository;

#[derive(Debug, Clone)]
pub struct ExportModelQuery {
    pub model_id: ModelId,
}

/// Exported model plus the file name a client should save it under.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelExport {
    pub file_name: String,
    pub model: DecisionModel,
}

pub struct ExportModelHandler {
    repository: Arc<dyn DecisionModelRepository>,
}

impl ExportModelHandler {
    pub fn new(repository: Arc<dyn DecisionModelRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ExportModelQuery) -> Result<ModelExport, ModelError> {
        let model = self
            .repository
            .find_by_id(&query.model_id)
            .await?
            .ok_or_else(|| ModelError::NotFound(query.model_id.clone()))?;

        debug!(model_id = %query.model_id, "Decision model exported");

        Ok(ModelExport {
            file_name: format!("model_{}.json", model.model_id()),
            model,
        })
    }
}
