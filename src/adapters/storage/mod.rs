//! Storage adapters.
//!
//! - `InMemoryDecisionModelRepository` - process-lifetime model store

mod in_memory_model_repository;

pub use in_memory_model_repository::InMemoryDecisionModelRepository;
