//! Analysis Module - TOPSIS ranking over aggregated expert opinions.
//!
//! # Components
//!
//! - `IndexSpace` - id <-> dense index mapping, rebuilt per computation
//! - `ExpertOpinionAggregator` - consensus weights and decision matrix
//! - `DecisionMatrixNormalizer` - vector normalization per criterion
//! - `WeightApplier` - column scaling by consensus weight
//! - `IdealSolutionResolver` - positive and negative ideal points
//! - `ClosenessRanker` - distances, closeness coefficients, final order
//! - `RankingAssembler` - translation back into id-keyed results
//! - `TopsisEngine` - the pipeline tying the stages together
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless. The engine receives a fully
//! materialized `DecisionModel` snapshot and never touches storage, so no
//! ports are involved.

mod aggregator;
mod closeness;
mod engine;
mod errors;
mod ideal;
mod index_space;
mod matrix;
mod normalizer;
mod ranking;
mod weighting;

pub use aggregator::{AggregatedOpinions, ExpertOpinionAggregator, ScoreCube};
pub use closeness::{ClosenessRanker, Separation, DEGENERATE_CLOSENESS};
pub use engine::{TopsisEngine, TopsisEvaluation};
pub use errors::RankingError;
pub use ideal::{CriterionPolarity, IdealSolutionResolver, IdealSolutions};
pub use index_space::IndexSpace;
pub use matrix::Matrix;
pub use normalizer::DecisionMatrixNormalizer;
pub use ranking::{Ranking, RankingAssembler};
pub use weighting::WeightApplier;
