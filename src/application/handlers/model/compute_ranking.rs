//! ComputeRankingHandler - Query handler running TOPSIS over a stored model.
//!
//! The ranking is recomputed from a snapshot on every call; nothing is
//! cached or written back.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::analysis::{Ranking, TopsisEngine};
use crate::domain::decision::ModelError;
use crate::domain::foundation::ModelId;
use crate::ports::DecisionModelRepository;

#[derive(Debug, Clone)]
pub struct ComputeRankingQuery {
    pub model_id: ModelId,
}

pub struct ComputeRankingHandler {
    repository: Arc<dyn DecisionModelRepository>,
}

impl ComputeRankingHandler {
    pub fn new(repository: Arc<dyn DecisionModelRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ComputeRankingQuery) -> Result<Ranking, ModelError> {
        let model = self
            .repository
            .find_by_id(&query.model_id)
            .await?
            .ok_or_else(|| ModelError::NotFound(query.model_id.clone()))?;

        let ranking = TopsisEngine::rank(&model).map_err(|e| {
            warn!(model_id = %query.model_id, error = %e, "Ranking failed");
            ModelError::from(e)
        })?;

        info!(
            model_id = %query.model_id,
            experts = model.expert_inputs().len(),
            best = ranking.best().map(|id| id.as_str()).unwrap_or("-"),
            "Ranking computed"
        );

        Ok(ranking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryDecisionModelRepository;
    use crate::domain::decision::{DecisionModel, ExpertInput};

    #[tokio::test]
    async fn model_without_experts_yields_empty_ranking() {
        let repo = Arc::new(InMemoryDecisionModelRepository::new());
        let model = DecisionModel::create("Empty", ["A", "B"], ["C"]).unwrap();
        repo.save(&model).await.unwrap();

        let ranking = ComputeRankingHandler::new(repo)
            .handle(ComputeRankingQuery {
                model_id: model.model_id().clone(),
            })
            .await
            .unwrap();

        assert!(ranking.is_empty());
    }

    #[tokio::test]
    async fn ranks_higher_scored_alternative_first() {
        let repo = Arc::new(InMemoryDecisionModelRepository::new());
        let model = DecisionModel::create("Car", ["Sedan", "Coupe"], ["Comfort"]).unwrap();
        repo.save(&model).await.unwrap();
        let comfort = model.criteria()[0].id.clone();
        let sedan = model.alternatives()[0].id.clone();
        let coupe = model.alternatives()[1].id.clone();
        repo.append_expert_input(
            model.model_id(),
            ExpertInput::anonymous()
                .with_weight(comfort.clone(), 1.0)
                .with_score(comfort.clone(), sedan.clone(), 3.0)
                .with_score(comfort, coupe.clone(), 9.0),
        )
        .await
        .unwrap();

        let ranking = ComputeRankingHandler::new(repo)
            .handle(ComputeRankingQuery {
                model_id: model.model_id().clone(),
            })
            .await
            .unwrap();

        assert_eq!(ranking.ranking, vec![coupe.clone(), sedan.clone()]);
        assert!((ranking.closeness_scores[&coupe] - 1.0).abs() < 1e-9);
        assert!(ranking.closeness_scores[&sedan].abs() < 1e-9);
    }

    #[tokio::test]
    async fn unknown_model_is_not_found() {
        let handler = ComputeRankingHandler::new(Arc::new(InMemoryDecisionModelRepository::new()));
        let id = ModelId::new("missing").unwrap();
        let err = handler
            .handle(ComputeRankingQuery { model_id: id.clone() })
            .await
            .unwrap_err();
        assert_eq!(err, ModelError::NotFound(id));
    }
}
