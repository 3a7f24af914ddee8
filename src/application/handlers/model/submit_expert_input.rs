//! SubmitExpertInputHandler - Command handler appending one expert's opinion.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::decision::{DecisionModel, ExpertInput, ModelError};
use crate::domain::foundation::ModelId;
use crate::ports::DecisionModelRepository;

/// Command to add an expert input to a model.
#[derive(Debug, Clone)]
pub struct SubmitExpertInputCommand {
    pub model_id: ModelId,
    pub input: ExpertInput,
}

pub struct SubmitExpertInputHandler {
    repository: Arc<dyn DecisionModelRepository>,
}

impl SubmitExpertInputHandler {
    pub fn new(repository: Arc<dyn DecisionModelRepository>) -> Self {
        Self { repository }
    }

    /// Validates and appends the input, returning the updated model.
    ///
    /// Nothing is stored when validation fails.
    pub async fn handle(&self, cmd: SubmitExpertInputCommand) -> Result<DecisionModel, ModelError> {
        let expert_id = cmd.input.expert_id().clone();

        let updated = self
            .repository
            .append_expert_input(&cmd.model_id, cmd.input)
            .await
            .map_err(|e| {
                warn!(model_id = %cmd.model_id, %expert_id, error = %e, "Expert input rejected");
                ModelError::from(e)
            })?;

        info!(
            model_id = %cmd.model_id,
            %expert_id,
            experts = updated.expert_inputs().len(),
            "Expert input recorded"
        );

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryDecisionModelRepository;
    use crate::domain::foundation::{CriterionId, ExpertId, ValidationError};

    async fn stored_model(repo: &InMemoryDecisionModelRepository) -> DecisionModel {
        let model = DecisionModel::create("Hire", ["Ana", "Ben"], ["Skill"]).unwrap();
        repo.save(&model).await.unwrap();
        model
    }

    #[tokio::test]
    async fn appends_valid_input() {
        let repo = Arc::new(InMemoryDecisionModelRepository::new());
        let model = stored_model(&repo).await;
        let skill = model.criteria()[0].id.clone();
        let ana = model.alternatives()[0].id.clone();

        let updated = SubmitExpertInputHandler::new(repo.clone())
            .handle(SubmitExpertInputCommand {
                model_id: model.model_id().clone(),
                input: ExpertInput::new(ExpertId::new("reviewer-1").unwrap())
                    .with_weight(skill.clone(), 0.8)
                    .with_score(skill, ana, 7.0),
            })
            .await
            .unwrap();

        assert_eq!(updated.expert_inputs().len(), 1);
        assert_eq!(updated.expert_inputs()[0].expert_id().as_str(), "reviewer-1");
    }

    #[tokio::test]
    async fn rejects_unknown_criterion() {
        let repo = Arc::new(InMemoryDecisionModelRepository::new());
        let model = stored_model(&repo).await;
        let ghost = CriterionId::new("ghost").unwrap();

        let err = SubmitExpertInputHandler::new(repo.clone())
            .handle(SubmitExpertInputCommand {
                model_id: model.model_id().clone(),
                input: ExpertInput::anonymous().with_weight(ghost, 1.0),
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ModelError::Validation(ValidationError::unknown_reference("criterion_weights", "ghost"))
        );
        let stored = repo.find_by_id(model.model_id()).await.unwrap().unwrap();
        assert!(stored.expert_inputs().is_empty());
    }

    #[tokio::test]
    async fn unknown_model_is_not_found() {
        let repo = Arc::new(InMemoryDecisionModelRepository::new());
        let id = ModelId::new("nope").unwrap();

        let err = SubmitExpertInputHandler::new(repo)
            .handle(SubmitExpertInputCommand {
                model_id: id.clone(),
                input: ExpertInput::anonymous(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, ModelError::NotFound(id));
    }
}
