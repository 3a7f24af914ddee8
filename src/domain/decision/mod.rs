//! Decision module - the entity model experts submit against.
//!
//! # Components
//!
//! - `Alternative` / `Criterion` - identity-carrying axes of the matrix
//! - `ExpertInput` - sparse per-expert weights and scores
//! - `DecisionModel` - aggregate owning entities and the append-only
//!   sequence of expert inputs
//! - `ModelError` - failures surfaced by model use cases

mod entities;
mod errors;
mod expert_input;
mod model;

pub use entities::{Alternative, Criterion};
pub use errors::ModelError;
pub use expert_input::{CriterionScores, ExpertInput};
pub use model::{DecisionModel, MIN_ALTERNATIVES, MIN_CRITERIA};
