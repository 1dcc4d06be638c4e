//! Nelder-Mead simplex algorithm for derivative-free minimization.
//!
//! The maximum-likelihood estimator runs this over the negative
//! log-likelihood; the parameter spaces are 1- or 2-dimensional, well
//! inside the algorithm's comfort zone.

#![allow(clippy::needless_range_loop)]

use crate::error::{StatsError, StatsResult};

const ZERO_THRESHOLD: f64 = 1e-14;

/// Options for the simplex minimizer.
#[derive(Debug, Clone, Copy)]
pub struct MinimizeOptions {
    /// Maximum number of iterations
    pub max_iter: usize,
    /// Tolerance for convergence (function value range over the simplex)
    pub f_tol: f64,
    /// Tolerance for convergence (simplex diameter)
    pub x_tol: f64,
}

impl Default for MinimizeOptions {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            f_tol: 1e-8,
            x_tol: 1e-8,
        }
    }
}

/// Result of a simplex minimization.
#[derive(Debug, Clone)]
pub struct MinimizeResult {
    /// Solution vector.
    pub x: Vec<f64>,
    /// Function value at the solution.
    pub fun: f64,
    /// Iterations performed.
    pub iterations: usize,
    /// Whether both tolerances were met.
    pub converged: bool,
}

/// Minimize `f: R^n -> R` from the initial guess `x0`.
///
/// Returns the best vertex found even when the iteration budget runs out;
/// callers decide what non-convergence means for them.
pub fn nelder_mead<F>(f: F, x0: &[f64], options: &MinimizeOptions) -> StatsResult<MinimizeResult>
where
    F: Fn(&[f64]) -> f64,
{
    let n = x0.len();
    if n == 0 {
        return Err(StatsError::EmptyData {
            context: "nelder_mead initial guess".to_string(),
        });
    }

    // Simplex parameters
    let alpha = 1.0; // Reflection
    let gamma = 2.0; // Expansion
    let rho = 0.5; // Contraction
    let sigma = 0.5; // Shrink

    // Initialize simplex with n+1 vertices by perturbing each dimension
    let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(n + 1);
    simplex.push(x0.to_vec());
    for i in 0..n {
        let mut vertex = x0.to_vec();
        let delta = if x0[i].abs() < ZERO_THRESHOLD {
            0.00025
        } else {
            0.05 * x0[i].abs()
        };
        vertex[i] += delta;
        simplex.push(vertex);
    }

    let mut f_values: Vec<f64> = simplex.iter().map(|v| f(v)).collect();

    let order = |f_values: &[f64]| {
        let mut indices: Vec<usize> = (0..=n).collect();
        indices.sort_by(|&a, &b| {
            f_values[a]
                .partial_cmp(&f_values[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        indices
    };

    for iter in 0..options.max_iter {
        // Sort vertices by function value
        let indices = order(&f_values);
        let sorted_simplex: Vec<Vec<f64>> = indices.iter().map(|&i| simplex[i].clone()).collect();
        let sorted_f: Vec<f64> = indices.iter().map(|&i| f_values[i]).collect();
        simplex = sorted_simplex;
        f_values = sorted_f;

        // Check convergence
        let f_range = (f_values[n] - f_values[0]).abs();
        let mut max_dist = 0.0_f64;
        for i in 1..=n {
            let dist: f64 = simplex[0]
                .iter()
                .zip(simplex[i].iter())
                .map(|(a, b)| (a - b) * (a - b))
                .sum::<f64>()
                .sqrt();
            max_dist = max_dist.max(dist);
        }
        if f_range < options.f_tol && max_dist < options.x_tol {
            return Ok(MinimizeResult {
                x: simplex[0].clone(),
                fun: f_values[0],
                iterations: iter + 1,
                converged: true,
            });
        }

        // Centroid of all vertices except the worst
        let mut centroid = vec![0.0; n];
        for i in 0..n {
            for j in 0..n {
                centroid[j] += simplex[i][j];
            }
        }
        for j in 0..n {
            centroid[j] /= n as f64;
        }

        // Reflection
        let mut x_r = vec![0.0; n];
        for j in 0..n {
            x_r[j] = centroid[j] + alpha * (centroid[j] - simplex[n][j]);
        }
        let f_r = f(&x_r);

        if f_r < f_values[0] {
            // Try expansion
            let mut x_e = vec![0.0; n];
            for j in 0..n {
                x_e[j] = centroid[j] + gamma * (x_r[j] - centroid[j]);
            }
            let f_e = f(&x_e);
            if f_e < f_r {
                simplex[n] = x_e;
                f_values[n] = f_e;
            } else {
                simplex[n] = x_r;
                f_values[n] = f_r;
            }
        } else if f_r < f_values[n - 1] {
            // Accept reflection
            simplex[n] = x_r;
            f_values[n] = f_r;
        } else {
            // Contraction
            let (x_c, f_c) = if f_r < f_values[n] {
                // Outside contraction
                let mut x_c = vec![0.0; n];
                for j in 0..n {
                    x_c[j] = centroid[j] + rho * (x_r[j] - centroid[j]);
                }
                let f_c = f(&x_c);
                (x_c, f_c)
            } else {
                // Inside contraction
                let mut x_c = vec![0.0; n];
                for j in 0..n {
                    x_c[j] = centroid[j] - rho * (centroid[j] - simplex[n][j]);
                }
                let f_c = f(&x_c);
                (x_c, f_c)
            };

            if f_c < f_values[n].min(f_r) {
                simplex[n] = x_c;
                f_values[n] = f_c;
            } else {
                // Shrink toward the best vertex
                for i in 1..=n {
                    for j in 0..n {
                        simplex[i][j] = simplex[0][j] + sigma * (simplex[i][j] - simplex[0][j]);
                    }
                    f_values[i] = f(&simplex[i]);
                }
            }
        }
    }

    // Out of budget: report the best vertex, not converged
    let indices = order(&f_values);
    Ok(MinimizeResult {
        x: simplex[indices[0]].clone(),
        fun: f_values[indices[0]],
        iterations: options.max_iter,
        converged: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere(x: &[f64]) -> f64 {
        x.iter().map(|xi| xi * xi).sum()
    }

    fn quadratic_2d(x: &[f64]) -> f64 {
        (x[0] - 1.0).powi(2) + (x[1] - 2.0).powi(2)
    }

    #[test]
    fn test_nelder_mead_sphere() {
        let result = nelder_mead(sphere, &[1.0, 1.0, 1.0], &MinimizeOptions::default())
            .expect("nelder_mead failed");

        assert!(result.converged);
        assert!(result.fun < 1e-8);
        for xi in &result.x {
            assert!(xi.abs() < 1e-4);
        }
    }

    #[test]
    fn test_nelder_mead_quadratic() {
        let result = nelder_mead(quadratic_2d, &[0.0, 0.0], &MinimizeOptions::default())
            .expect("nelder_mead failed");

        assert!(result.converged);
        assert!((result.x[0] - 1.0).abs() < 1e-4);
        assert!((result.x[1] - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_nelder_mead_budget_exhausted() {
        let opts = MinimizeOptions {
            max_iter: 2,
            ..Default::default()
        };
        let result = nelder_mead(quadratic_2d, &[50.0, -50.0], &opts).unwrap();
        assert!(!result.converged);
        assert_eq!(result.iterations, 2);
    }

    #[test]
    fn test_nelder_mead_empty_guess() {
        assert!(nelder_mead(sphere, &[], &MinimizeOptions::default()).is_err());
    }
}
