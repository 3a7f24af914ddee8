//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `decision` - Decision models, alternatives, criteria and expert inputs
//! - `analysis` - Pure TOPSIS ranking engine

pub mod analysis;
pub mod decision;
pub mod foundation;
