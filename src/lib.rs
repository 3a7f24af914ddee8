//! Expert TOPSIS - Group Decision Support Service
//!
//! Collects weights and scores from several experts for a set of alternatives
//! and criteria, aggregates them, and ranks the alternatives with TOPSIS.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
