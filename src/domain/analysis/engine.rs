//! TopsisEngine - runs the full aggregation and ranking pipeline.
//!
//! ```text
//! DecisionModel
//!   -> ExpertOpinionAggregator   (weights, aggregated matrix)
//!   -> DecisionMatrixNormalizer  (L2 per column)
//!   -> WeightApplier
//!   -> IdealSolutionResolver     (benefit criteria)
//!   -> ClosenessRanker           (distances, coefficients, order)
//!   -> RankingAssembler          (back to ids)
//! ```

use tracing::debug;

use super::{
    ClosenessRanker, DecisionMatrixNormalizer, ExpertOpinionAggregator, IdealSolutionResolver,
    IdealSolutions, IndexSpace, Matrix, Ranking, RankingAssembler, RankingError, Separation,
    WeightApplier,
};
use crate::domain::decision::DecisionModel;

/// Every intermediate artifact of one computation, in index space.
#[derive(Debug, Clone)]
pub struct TopsisEvaluation {
    pub space: IndexSpace,
    pub weights: Vec<f64>,
    pub aggregated: Matrix,
    pub normalized: Matrix,
    pub weighted: Matrix,
    pub ideals: IdealSolutions,
    pub separation: Separation,
    pub scores: Vec<f64>,
    pub order: Vec<usize>,
}

impl TopsisEvaluation {
    /// Translates the evaluation into the id-keyed result.
    pub fn into_ranking(self) -> Ranking {
        RankingAssembler::assemble(
            &self.space,
            &self.weights,
            &self.aggregated,
            &self.scores,
            &self.order,
        )
    }
}

/// Stateless TOPSIS ranking over aggregated expert opinions.
pub struct TopsisEngine;

impl TopsisEngine {
    /// Ranks the alternatives of a model.
    ///
    /// A model without expert inputs yields [`Ranking::empty`], whatever its
    /// alternatives and criteria look like.
    ///
    /// # Errors
    ///
    /// `RankingError` if an expert input references an id the model does not
    /// define. Validated models never trigger this.
    pub fn rank(model: &DecisionModel) -> Result<Ranking, RankingError> {
        Ok(Self::evaluate(model)?
            .map(TopsisEvaluation::into_ranking)
            .unwrap_or_else(Ranking::empty))
    }

    /// Runs every stage and keeps the intermediates. `None` without experts.
    pub fn evaluate(model: &DecisionModel) -> Result<Option<TopsisEvaluation>, RankingError> {
        let inputs = model.expert_inputs();
        if inputs.is_empty() {
            debug!(model_id = %model.model_id(), "No expert inputs, returning empty ranking");
            return Ok(None);
        }

        let space = IndexSpace::from_model(model);
        let aggregated = ExpertOpinionAggregator::aggregate(inputs, &space)?;
        let normalized = DecisionMatrixNormalizer::normalize(&aggregated.matrix);
        let weighted = WeightApplier::apply(&normalized, &aggregated.weights);
        let ideals = IdealSolutionResolver::resolve(&weighted);
        let separation = ClosenessRanker::separation(&weighted, &ideals);
        let scores = ClosenessRanker::closeness(&separation);
        let order = ClosenessRanker::order(&scores);

        debug!(
            model_id = %model.model_id(),
            experts = inputs.len(),
            alternatives = space.alternative_count(),
            criteria = space.criterion_count(),
            "Computed TOPSIS ranking"
        );

        Ok(Some(TopsisEvaluation {
            space,
            weights: aggregated.weights,
            aggregated: aggregated.matrix,
            normalized,
            weighted,
            ideals,
            separation,
            scores,
            order,
        }))
    }
}
