//! Ranking engine errors.

use thiserror::Error;

use crate::domain::foundation::{AlternativeId, CriterionId, ExpertId};

/// Precondition violations detected while ranking.
///
/// Models are validated before they reach the engine, so these only surface
/// when a caller bypasses that validation. They fail the single computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    #[error("Expert {expert_id} references unknown criterion {criterion_id}")]
    UnknownCriterion {
        expert_id: ExpertId,
        criterion_id: CriterionId,
    },

    #[error("Expert {expert_id} references unknown alternative {alternative_id}")]
    UnknownAlternative {
        expert_id: ExpertId,
        alternative_id: AlternativeId,
    },
}
