//! Correlated multivariate generation: Cholesky mixing of independent
//! inverse-CDF columns to a target correlation matrix.

use super::generate_sample;
use crate::distribution::FittedDistribution;
use crate::error::{StatsError, StatsResult};
use crate::sample;
use nalgebra::{Cholesky, DMatrix, SymmetricEigen};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SYMMETRY_TOL: f64 = 1e-8;
const PSD_TOL: f64 = -1e-8;

/// Check that `matrix` is a valid correlation matrix for `dim` columns.
fn validate_correlation(matrix: &DMatrix<f64>, dim: usize) -> StatsResult<()> {
    if matrix.nrows() != dim || matrix.ncols() != dim {
        return Err(StatsError::InvalidMatrix {
            reason: format!(
                "expected {}x{} correlation matrix, got {}x{}",
                dim,
                dim,
                matrix.nrows(),
                matrix.ncols()
            ),
        });
    }
    for i in 0..dim {
        if (matrix[(i, i)] - 1.0).abs() > SYMMETRY_TOL {
            return Err(StatsError::InvalidMatrix {
                reason: format!("diagonal entry ({}, {}) = {} is not 1", i, i, matrix[(i, i)]),
            });
        }
        for j in 0..dim {
            let v = matrix[(i, j)];
            if !v.is_finite() || v.abs() > 1.0 + SYMMETRY_TOL {
                return Err(StatsError::InvalidMatrix {
                    reason: format!("entry ({}, {}) = {} outside [-1, 1]", i, j, v),
                });
            }
            if (v - matrix[(j, i)]).abs() > SYMMETRY_TOL {
                return Err(StatsError::InvalidMatrix {
                    reason: format!("asymmetric at ({}, {})", i, j),
                });
            }
        }
    }

    let eigen = SymmetricEigen::new(matrix.clone());
    if let Some(min) = eigen
        .eigenvalues
        .iter()
        .copied()
        .min_by(|a, b| a.total_cmp(b))
    {
        if min < PSD_TOL {
            return Err(StatsError::InvalidMatrix {
                reason: format!("not positive semidefinite (min eigenvalue {})", min),
            });
        }
    }
    Ok(())
}

/// Generate `n` rows of correlated data, one column per distribution.
///
/// Independent inverse-CDF columns are standardized, mixed through the
/// Cholesky factor of the target correlation matrix, then mapped back
/// to each column's location and scale. Marginal shapes are preserved
/// only approximately for non-normal families; the induced correlation
/// approaches the target as n grows.
pub fn generate_correlated_data(
    dists: &[FittedDistribution],
    correlation: &DMatrix<f64>,
    n: usize,
    seed: Option<u64>,
) -> StatsResult<Vec<Vec<f64>>> {
    if dists.is_empty() {
        return Err(StatsError::EmptyData {
            context: "generate_correlated_data distributions".to_string(),
        });
    }
    if n < 2 {
        return Err(StatsError::InsufficientData {
            required: 2,
            got: n,
            context: "generate_correlated_data rows".to_string(),
        });
    }
    let dim = dists.len();
    validate_correlation(correlation, dim)?;

    let factor = Cholesky::new(correlation.clone()).ok_or_else(|| StatsError::NumericalError {
        message: "correlation matrix has no Cholesky factor (singular)".to_string(),
    })?;
    let l = factor.l();

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    // Independent draws, standardized column by column
    let mut standardized = DMatrix::zeros(n, dim);
    let mut locations = Vec::with_capacity(dim);
    let mut scales = Vec::with_capacity(dim);
    for (col, dist) in dists.iter().enumerate() {
        let draws = generate_sample(dist, n, &mut rng)?;
        let m = sample::mean(&draws);
        let s = sample::std_dev(&draws).max(1e-12);
        locations.push(m);
        scales.push(s);
        for (row, v) in draws.iter().enumerate() {
            standardized[(row, col)] = (v - m) / s;
        }
    }

    let mixed = &standardized * l.transpose();

    let mut columns = vec![Vec::with_capacity(n); dim];
    for col in 0..dim {
        for row in 0..n {
            columns[col].push(locations[col] + scales[col] * mixed[(row, col)]);
        }
    }
    Ok(columns)
}
