//! ExpertInput - one expert's weights and scores for a decision model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{AlternativeId, CriterionId, ExpertId};

/// Scores one expert gave, keyed by criterion then alternative.
pub type CriterionScores = BTreeMap<CriterionId, BTreeMap<AlternativeId, f64>>;

/// A single expert's submission.
///
/// Submissions are sparse: an expert may skip criteria when weighting and may
/// leave any (criterion, alternative) pair unscored. Aggregation reads missing
/// scores as 0.0 and averages weights only over experts who gave one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertInput {
    #[serde(default = "ExpertId::generate")]
    expert_id: ExpertId,
    criterion_weights: BTreeMap<CriterionId, f64>,
    criterion_scores: CriterionScores,
}

impl ExpertInput {
    /// Creates an empty submission for an expert.
    pub fn new(expert_id: ExpertId) -> Self {
        Self {
            expert_id,
            criterion_weights: BTreeMap::new(),
            criterion_scores: BTreeMap::new(),
        }
    }

    /// Creates an empty submission with a generated expert id.
    pub fn anonymous() -> Self {
        Self::new(ExpertId::generate())
    }

    /// Sets the weight this expert assigns to a criterion.
    pub fn with_weight(mut self, criterion_id: CriterionId, weight: f64) -> Self {
        self.criterion_weights.insert(criterion_id, weight);
        self
    }

    /// Sets the score this expert assigns to an alternative on a criterion.
    pub fn with_score(
        mut self,
        criterion_id: CriterionId,
        alternative_id: AlternativeId,
        score: f64,
    ) -> Self {
        self.criterion_scores
            .entry(criterion_id)
            .or_default()
            .insert(alternative_id, score);
        self
    }

    pub fn expert_id(&self) -> &ExpertId {
        &self.expert_id
    }

    pub fn criterion_weights(&self) -> &BTreeMap<CriterionId, f64> {
        &self.criterion_weights
    }

    pub fn criterion_scores(&self) -> &CriterionScores {
        &self.criterion_scores
    }
}
