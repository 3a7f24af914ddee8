//! Ideal Solution Resolver - positive and negative reference points.

use serde::{Deserialize, Serialize};

use super::Matrix;

/// Whether higher or lower values of a criterion are preferred.
///
/// The engine currently resolves every criterion as `Benefit`. `Cost` is kept
/// so a per-criterion polarity can be threaded through from the model later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionPolarity {
    #[default]
    Benefit,
    Cost,
}

/// Best and worst attainable weighted value per criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct IdealSolutions {
    pub positive: Vec<f64>,
    pub negative: Vec<f64>,
}

pub struct IdealSolutionResolver;

impl IdealSolutionResolver {
    /// Resolves ideals with every criterion treated as benefit-type.
    pub fn resolve(weighted: &Matrix) -> IdealSolutions {
        let polarities = vec![CriterionPolarity::Benefit; weighted.columns()];
        Self::resolve_with_polarity(weighted, &polarities)
    }

    /// Resolves ideals honouring a polarity per column.
    ///
    /// Benefit: positive = column max, negative = column min. Cost inverts.
    /// A matrix without rows yields 0.0 for both.
    pub fn resolve_with_polarity(
        weighted: &Matrix,
        polarities: &[CriterionPolarity],
    ) -> IdealSolutions {
        assert_eq!(weighted.columns(), polarities.len());

        let mut positive = Vec::with_capacity(weighted.columns());
        let mut negative = Vec::with_capacity(weighted.columns());

        for (column, polarity) in polarities.iter().enumerate() {
            let (min, max) = if weighted.rows() == 0 {
                (0.0, 0.0)
            } else {
                weighted
                    .column(column)
                    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                        (lo.min(v), hi.max(v))
                    })
            };

            match polarity {
                CriterionPolarity::Benefit => {
                    positive.push(max);
                    negative.push(min);
                }
                CriterionPolarity::Cost => {
                    positive.push(min);
                    negative.push(max);
                }
            }
        }

        IdealSolutions { positive, negative }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted() -> Matrix {
        Matrix::from_rows(vec![vec![0.2, 0.9], vec![0.5, 0.1], vec![0.3, 0.4]])
    }

    #[test]
    fn benefit_takes_max_as_ideal() {
        let ideals = IdealSolutionResolver::resolve(&weighted());
        assert_eq!(ideals.positive, vec![0.5, 0.9]);
        assert_eq!(ideals.negative, vec![0.2, 0.1]);
    }

    #[test]
    fn cost_inverts_ideals() {
        let ideals = IdealSolutionResolver::resolve_with_polarity(
            &weighted(),
            &[CriterionPolarity::Benefit, CriterionPolarity::Cost],
        );
        assert_eq!(ideals.positive, vec![0.5, 0.1]);
        assert_eq!(ideals.negative, vec![0.2, 0.9]);
    }

    #[test]
    fn no_rows_yields_zero_ideals() {
        let ideals = IdealSolutionResolver::resolve(&Matrix::zeros(0, 2));
        assert_eq!(ideals.positive, vec![0.0, 0.0]);
        assert_eq!(ideals.negative, vec![0.0, 0.0]);
    }

    #[test]
    fn default_polarity_is_benefit() {
        assert_eq!(CriterionPolarity::default(), CriterionPolarity::Benefit);
    }
}
