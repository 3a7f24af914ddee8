//! DecisionModel aggregate.
//!
//! A model fixes the alternatives and criteria of one decision and collects
//! expert submissions over time. The order of `alternatives` and `criteria`
//! defines the row and column order used by the ranking engine.
//!
//! # Invariants
//!
//! - At least two alternatives and one criterion
//! - Alternative ids and criterion ids are unique within the model
//! - Every id referenced by an expert input exists in the model
//! - Expert inputs are append-only

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{ModelId, ValidationError};

use super::{Alternative, Criterion, ExpertInput};

/// Minimum number of alternatives a model must offer.
pub const MIN_ALTERNATIVES: usize = 2;

/// Minimum number of criteria a model must define.
pub const MIN_CRITERIA: usize = 1;

/// A group decision: what is being chosen, by which criteria, and what the
/// experts have said so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionModel {
    #[serde(default = "ModelId::generate")]
    model_id: ModelId,
    name: String,
    alternatives: Vec<Alternative>,
    criteria: Vec<Criterion>,
    #[serde(default)]
    expert_inputs: Vec<ExpertInput>,
}

impl DecisionModel {
    /// Assembles a model from parts without checking invariants.
    ///
    /// Use [`DecisionModel::create`] for client-driven creation; this
    /// constructor exists for rehydration and tests.
    pub fn new(
        model_id: ModelId,
        name: impl Into<String>,
        alternatives: Vec<Alternative>,
        criteria: Vec<Criterion>,
    ) -> Self {
        Self {
            model_id,
            name: name.into(),
            alternatives,
            criteria,
            expert_inputs: Vec::new(),
        }
    }

    /// Creates a new model from display names, generating every id.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `TooFewEntries` if fewer than two alternatives or no criteria
    pub fn create<A, C>(
        name: impl Into<String>,
        alternative_names: A,
        criterion_names: C,
    ) -> Result<Self, ValidationError>
    where
        A: IntoIterator,
        A::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let model = Self::new(
            ModelId::generate(),
            name,
            alternative_names.into_iter().map(Alternative::new).collect(),
            criterion_names.into_iter().map(Criterion::new).collect(),
        );
        model.validate()?;
        Ok(model)
    }

    pub fn model_id(&self) -> &ModelId {
        &self.model_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn expert_inputs(&self) -> &[ExpertInput] {
        &self.expert_inputs
    }

    /// Checks every structural invariant of the model.
    ///
    /// Used on creation and whenever a model enters the system from outside
    /// (import), so that the ranking engine can rely on referential integrity.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if self.alternatives.len() < MIN_ALTERNATIVES {
            return Err(ValidationError::too_few_entries(
                "alternatives",
                MIN_ALTERNATIVES,
                self.alternatives.len(),
            ));
        }
        if self.criteria.len() < MIN_CRITERIA {
            return Err(ValidationError::too_few_entries(
                "criteria",
                MIN_CRITERIA,
                self.criteria.len(),
            ));
        }

        let mut seen = HashSet::new();
        for alternative in &self.alternatives {
            if !seen.insert(&alternative.id) {
                return Err(ValidationError::duplicate_id(
                    "alternatives",
                    alternative.id.as_str(),
                ));
            }
        }

        let mut seen = HashSet::new();
        for criterion in &self.criteria {
            if !seen.insert(&criterion.id) {
                return Err(ValidationError::duplicate_id("criteria", criterion.id.as_str()));
            }
        }

        for input in &self.expert_inputs {
            self.check_expert_input(input)?;
        }

        Ok(())
    }

    /// Checks that a submission only references this model's entities and
    /// carries usable numbers.
    ///
    /// # Errors
    ///
    /// - `UnknownReference` for a criterion or alternative id not in the model
    /// - `NonFinite` for NaN or infinite weights and scores
    /// - `Negative` for weights below zero
    pub fn check_expert_input(&self, input: &ExpertInput) -> Result<(), ValidationError> {
        for (criterion_id, weight) in input.criterion_weights() {
            if !self.has_criterion(criterion_id.as_str()) {
                return Err(ValidationError::unknown_reference(
                    "criterion_weights",
                    criterion_id.as_str(),
                ));
            }
            if !weight.is_finite() {
                return Err(ValidationError::non_finite("criterion_weights"));
            }
            if *weight < 0.0 {
                return Err(ValidationError::negative("criterion_weights", *weight));
            }
        }

        for (criterion_id, by_alternative) in input.criterion_scores() {
            if !self.has_criterion(criterion_id.as_str()) {
                return Err(ValidationError::unknown_reference(
                    "criterion_scores",
                    criterion_id.as_str(),
                ));
            }
            for (alternative_id, score) in by_alternative {
                if !self.has_alternative(alternative_id.as_str()) {
                    return Err(ValidationError::unknown_reference(
                        "criterion_scores",
                        alternative_id.as_str(),
                    ));
                }
                if !score.is_finite() {
                    return Err(ValidationError::non_finite("criterion_scores"));
                }
            }
        }

        Ok(())
    }

    /// Appends a validated expert submission.
    pub fn add_expert_input(&mut self, input: ExpertInput) -> Result<(), ValidationError> {
        self.check_expert_input(&input)?;
        self.expert_inputs.push(input);
        Ok(())
    }

    fn has_alternative(&self, id: &str) -> bool {
        self.alternatives.iter().any(|a| a.id.as_str() == id)
    }

    fn has_criterion(&self, id: &str) -> bool {
        self.criteria.iter().any(|c| c.id.as_str() == id)
    }
}
