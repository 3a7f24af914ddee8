//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Decision model repositories
//! - `http` - REST API over axum

pub mod http;
pub mod storage;

pub use http::{app_router, ModelAppState};
pub use storage::InMemoryDecisionModelRepository;
