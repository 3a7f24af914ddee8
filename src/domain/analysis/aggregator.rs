//! Expert Opinion Aggregator - reduces many expert submissions to one
//! weight vector and one decision matrix.

use super::{IndexSpace, Matrix, RankingError};
use crate::domain::decision::ExpertInput;

/// Consensus inputs for the TOPSIS stages, in index space.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedOpinions {
    /// Mean weight per criterion column.
    pub weights: Vec<f64>,
    /// Mean score per (alternative, criterion) cell.
    pub matrix: Matrix,
}

/// Dense `[expert][alternative][criterion]` score cube.
///
/// Converts sparse submissions into dense per-expert matrices; pairs an expert
/// left unscored stay at 0.0.
#[derive(Debug, Clone)]
pub struct ScoreCube {
    layers: Vec<Matrix>,
}

impl ScoreCube {
    /// Builds the cube from expert submissions.
    ///
    /// # Errors
    ///
    /// `UnknownCriterion` / `UnknownAlternative` if a submission references an
    /// id outside the index space.
    pub fn build(inputs: &[ExpertInput], space: &IndexSpace) -> Result<Self, RankingError> {
        let mut layers = Vec::with_capacity(inputs.len());

        for input in inputs {
            let mut layer = Matrix::zeros(space.alternative_count(), space.criterion_count());

            for (criterion_id, by_alternative) in input.criterion_scores() {
                let column = space.column_of(criterion_id).ok_or_else(|| {
                    RankingError::UnknownCriterion {
                        expert_id: input.expert_id().clone(),
                        criterion_id: criterion_id.clone(),
                    }
                })?;

                for (alternative_id, score) in by_alternative {
                    let row = space.row_of(alternative_id).ok_or_else(|| {
                        RankingError::UnknownAlternative {
                            expert_id: input.expert_id().clone(),
                            alternative_id: alternative_id.clone(),
                        }
                    })?;
                    layer.set(row, column, *score);
                }
            }

            layers.push(layer);
        }

        Ok(Self { layers })
    }

    /// Arithmetic mean over experts for every cell. Uniform expert weighting.
    pub fn mean(&self, rows: usize, columns: usize) -> Matrix {
        let mut mean = Matrix::zeros(rows, columns);
        for row in 0..rows {
            for column in 0..columns {
                let cells: Vec<f64> = self.layers.iter().map(|l| l.get(row, column)).collect();
                mean.set(row, column, finite_mean(&cells));
            }
        }
        mean
    }
}

/// Aggregation functions.
pub struct ExpertOpinionAggregator;

impl ExpertOpinionAggregator {
    /// Aggregates every expert submission of a model.
    ///
    /// # Algorithm
    /// - weight[j] = mean of the weights given to criterion j, over only the
    ///   experts who gave one (0.0 if nobody did)
    /// - matrix[i][j] = mean over all experts of score[e][i][j], missing = 0.0
    pub fn aggregate(
        inputs: &[ExpertInput],
        space: &IndexSpace,
    ) -> Result<AggregatedOpinions, RankingError> {
        let weights = Self::average_weights(inputs, space)?;
        let cube = ScoreCube::build(inputs, space)?;
        let matrix = cube.mean(space.alternative_count(), space.criterion_count());

        Ok(AggregatedOpinions { weights, matrix })
    }

    /// Averages criterion weights over contributing experts only.
    pub fn average_weights(
        inputs: &[ExpertInput],
        space: &IndexSpace,
    ) -> Result<Vec<f64>, RankingError> {
        let mut given: Vec<Vec<f64>> = vec![Vec::new(); space.criterion_count()];

        for input in inputs {
            for (criterion_id, weight) in input.criterion_weights() {
                let column = space.column_of(criterion_id).ok_or_else(|| {
                    RankingError::UnknownCriterion {
                        expert_id: input.expert_id().clone(),
                        criterion_id: criterion_id.clone(),
                    }
                })?;
                given[column].push(*weight);
            }
        }

        Ok(given.iter().map(|weights| finite_mean(weights)).collect())
    }
}

/// Mean of finite values, 0.0 for none.
///
/// Terms are divided before summing so the result stays finite for any
/// finite inputs.
fn finite_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    values.iter().map(|v| v / n).sum()
}
