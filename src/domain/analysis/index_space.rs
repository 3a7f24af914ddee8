//! Bidirectional id <-> dense index mapping for one ranking computation.

use std::collections::HashMap;

use crate::domain::decision::DecisionModel;
use crate::domain::foundation::{AlternativeId, CriterionId};

/// Row (alternative) and column (criterion) index space of a model.
///
/// Built once per computation from the model's declared order and dropped
/// afterwards. Every numeric stage works purely on the indices it hands out.
#[derive(Debug, Clone)]
pub struct IndexSpace {
    alternatives: Vec<AlternativeId>,
    criteria: Vec<CriterionId>,
    alternative_rows: HashMap<AlternativeId, usize>,
    criterion_columns: HashMap<CriterionId, usize>,
}

impl IndexSpace {
    /// Derives the index space from the model's alternative and criterion order.
    pub fn from_model(model: &DecisionModel) -> Self {
        let alternatives: Vec<AlternativeId> =
            model.alternatives().iter().map(|a| a.id.clone()).collect();
        let criteria: Vec<CriterionId> = model.criteria().iter().map(|c| c.id.clone()).collect();

        let alternative_rows = alternatives
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();
        let criterion_columns = criteria
            .iter()
            .enumerate()
            .map(|(j, id)| (id.clone(), j))
            .collect();

        Self {
            alternatives,
            criteria,
            alternative_rows,
            criterion_columns,
        }
    }

    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    pub fn row_of(&self, id: &AlternativeId) -> Option<usize> {
        self.alternative_rows.get(id).copied()
    }

    pub fn column_of(&self, id: &CriterionId) -> Option<usize> {
        self.criterion_columns.get(id).copied()
    }

    /// Alternative id at a row. Panics on an index this space never issued.
    pub fn alternative_at(&self, row: usize) -> &AlternativeId {
        &self.alternatives[row]
    }

    /// Criterion id at a column. Panics on an index this space never issued.
    pub fn criterion_at(&self, column: usize) -> &CriterionId {
        &self.criteria[column]
    }

    pub fn alternatives(&self) -> &[AlternativeId] {
        &self.alternatives
    }

    pub fn criteria(&self) -> &[CriterionId] {
        &self.criteria
    }
}
