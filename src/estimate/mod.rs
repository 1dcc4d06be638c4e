//! Parameter estimation: method of moments and maximum likelihood.

mod nelder_mead;

pub use nelder_mead::{nelder_mead, MinimizeOptions, MinimizeResult};

use crate::distribution::{ContinuousDistribution, DistributionFamily, FittedDistribution};
use crate::error::{StatsError, StatsResult};
use crate::sample;

/// Lower bound applied to positivity-constrained parameters inside the
/// MLE objective, keeping the simplex inside the valid domain.
const PARAM_EPS: f64 = 1e-10;

/// Floor applied to pdf values before taking logs, so a point outside
/// the current support contributes a large finite penalty instead of -∞.
const PDF_FLOOR: f64 = 1e-10;

/// How a distribution's parameters are estimated from a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimationMethod {
    /// Closed-form moment matching, delegated to the family's own `fit`.
    MethodOfMoments,
    /// Numerical minimization of the negative log-likelihood, started
    /// from the moment estimate.
    MaximumLikelihood,
}

impl EstimationMethod {
    /// Every method, in registry order.
    pub const ALL: [EstimationMethod; 2] = [
        EstimationMethod::MethodOfMoments,
        EstimationMethod::MaximumLikelihood,
    ];

    /// Registry name of the method.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MethodOfMoments => "moments",
            Self::MaximumLikelihood => "mle",
        }
    }

    /// Look a method up by its registry name.
    pub fn from_name(name: &str) -> StatsResult<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| StatsError::UnknownName {
                name: name.to_string(),
                family: "estimation method".to_string(),
            })
    }

    /// Estimate `family`'s parameters from `data`.
    ///
    /// # Errors
    ///
    /// Propagates fit errors; for maximum likelihood a non-convergent
    /// optimizer run is reported as `ConvergenceError` rather than
    /// silently falling back to the initial guess.
    pub fn estimate(
        &self,
        family: DistributionFamily,
        data: &[f64],
    ) -> StatsResult<FittedDistribution> {
        match self {
            Self::MethodOfMoments => family.fit(data),
            Self::MaximumLikelihood => fit_mle(family, data),
        }
    }
}

/// Negative log-likelihood of `params` for `family` over `data`, with
/// positivity-constrained parameters clamped at `PARAM_EPS` and pdf
/// values floored at `PDF_FLOOR`. Parameter slices that still fail
/// validation score an effectively infinite penalty.
fn negative_log_likelihood(family: DistributionFamily, params: &[f64], data: &[f64]) -> f64 {
    let clamped: Vec<f64> = params
        .iter()
        .zip(family.param_positive())
        .map(|(&p, &positive)| if positive { p.max(PARAM_EPS) } else { p })
        .collect();

    let dist = match family.from_params(&clamped) {
        Ok(d) => d,
        Err(_) => return 1e300,
    };

    -data
        .iter()
        .map(|&x| dist.pdf(x).max(PDF_FLOOR).ln())
        .sum::<f64>()
}

fn fit_mle(family: DistributionFamily, data: &[f64]) -> StatsResult<FittedDistribution> {
    fit_mle_with(family, data, &MinimizeOptions::default())
}

fn fit_mle_with(
    family: DistributionFamily,
    data: &[f64],
    options: &MinimizeOptions,
) -> StatsResult<FittedDistribution> {
    sample::check_min_len(data, 2, "maximum likelihood estimation")?;

    // Moment estimate as the starting simplex vertex
    let initial = family.fit(data)?.params();

    let result = nelder_mead(
        |params| negative_log_likelihood(family, params, data),
        &initial,
        options,
    )?;

    if !result.converged {
        return Err(StatsError::ConvergenceError {
            iterations: result.iterations,
            context: format!("maximum likelihood fit of {}", family.name()),
        });
    }

    let best: Vec<f64> = result
        .x
        .iter()
        .zip(family.param_positive())
        .map(|(&p, &positive)| if positive { p.max(PARAM_EPS) } else { p })
        .collect();
    family.from_params(&best)
}
