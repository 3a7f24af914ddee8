//! Ranking result and the assembler translating index space back to ids.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{IndexSpace, Matrix};
use crate::domain::foundation::{AlternativeId, CriterionId};

/// Outcome of a ranking computation, keyed by entity ids.
///
/// Maps are ordered so that identical inputs serialize to identical bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub average_criteria_weights: BTreeMap<CriterionId, f64>,
    pub aggregated_decision_matrix: BTreeMap<AlternativeId, BTreeMap<CriterionId, f64>>,
    pub closeness_scores: BTreeMap<AlternativeId, f64>,
    /// Alternative ids, best first.
    pub ranking: Vec<AlternativeId>,
}

impl Ranking {
    /// The defined result for a model nobody has scored yet.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
            && self.closeness_scores.is_empty()
            && self.aggregated_decision_matrix.is_empty()
            && self.average_criteria_weights.is_empty()
    }

    /// The top-ranked alternative, if any.
    pub fn best(&self) -> Option<&AlternativeId> {
        self.ranking.first()
    }
}

pub struct RankingAssembler;

impl RankingAssembler {
    /// Packages index-space results into an id-keyed [`Ranking`].
    ///
    /// This is the only place row and column indices are turned back into ids.
    pub fn assemble(
        space: &IndexSpace,
        weights: &[f64],
        aggregated: &Matrix,
        scores: &[f64],
        order: &[usize],
    ) -> Ranking {
        let average_criteria_weights = weights
            .iter()
            .enumerate()
            .map(|(column, &w)| (space.criterion_at(column).clone(), w))
            .collect();

        let aggregated_decision_matrix = (0..aggregated.rows())
            .map(|row| {
                let cells = aggregated
                    .row(row)
                    .iter()
                    .enumerate()
                    .map(|(column, &v)| (space.criterion_at(column).clone(), v))
                    .collect();
                (space.alternative_at(row).clone(), cells)
            })
            .collect();

        let closeness_scores = scores
            .iter()
            .enumerate()
            .map(|(row, &s)| (space.alternative_at(row).clone(), s))
            .collect();

        let ranking = order
            .iter()
            .map(|&row| space.alternative_at(row).clone())
            .collect();

        Ranking {
            average_criteria_weights,
            aggregated_decision_matrix,
            closeness_scores,
            ranking,
        }
    }
}
