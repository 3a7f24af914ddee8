//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application layer and the outside world. Adapters implement them.
//!
//! - `DecisionModelRepository` - storage of decision models

mod decision_model_repository;

pub use decision_model_repository::{DecisionModelRepository, RepositoryError};
