//! Distribution traits and the closed family/fitted sum types.
//!
//! Concrete distributions live in [`crate::continuous`]; this module
//! defines the capability contract they all satisfy and the two enums
//! that make the set closed: [`DistributionFamily`] (which distribution,
//! no parameters yet) and [`FittedDistribution`] (family plus a validated
//! parameter tuple). Fitting returns a fresh immutable value, so there is
//! no shared mutable parameter cache to alias across callers.

use crate::continuous::{Exponential, Laplace, Normal, Uniform, Weibull};
use crate::error::{StatsError, StatsResult};

/// Moments shared by every distribution.
pub trait Distribution {
    /// Mean of the distribution.
    fn mean(&self) -> f64;

    /// Variance of the distribution.
    fn var(&self) -> f64;

    /// Standard deviation of the distribution.
    fn std(&self) -> f64 {
        self.var().sqrt()
    }
}

/// Density, distribution function and quantiles of a continuous
/// distribution.
pub trait ContinuousDistribution: Distribution {
    /// Probability density function at `x`.
    fn pdf(&self, x: f64) -> f64;

    /// Natural log of the PDF at `x`.
    fn log_pdf(&self, x: f64) -> f64;

    /// Cumulative distribution function at `x`.
    fn cdf(&self, x: f64) -> f64;

    /// Survival function: 1 - CDF.
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// Percent point function (inverse CDF / quantile function).
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is outside [0, 1].
    fn ppf(&self, p: f64) -> StatsResult<f64>;

    /// Median of the distribution.
    fn median(&self) -> f64 {
        // ppf is total on the open interval, 0.5 cannot fail
        self.ppf(0.5).unwrap_or(f64::NAN)
    }
}

/// Fitting contract: moment-based estimation from a sample, validated
/// construction from a raw parameter slice, and the delta-method variance
/// of the fitted CDF estimate.
pub trait SampleFit: ContinuousDistribution + Sized {
    /// Closed-form moment-matching fit.
    fn fit(sample: &[f64]) -> StatsResult<Self>;

    /// Construct from a raw parameter slice, validating every entry.
    fn from_params(params: &[f64]) -> StatsResult<Self>;

    /// Parameter tuple in the family's canonical order.
    fn params(&self) -> Vec<f64>;

    /// Delta-method variance of the CDF estimate at `x` for a fit from
    /// `n` observations: sum of squared CDF partials times each
    /// parameter's asymptotic variance.
    fn cdf_variance(&self, x: f64, n: usize) -> f64;
}

/// The closed set of distribution families the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionFamily {
    Normal,
    Exponential,
    Uniform,
    Weibull,
    Laplace,
}

impl DistributionFamily {
    /// Every family, in registry order.
    pub const ALL: [DistributionFamily; 5] = [
        DistributionFamily::Normal,
        DistributionFamily::Exponential,
        DistributionFamily::Uniform,
        DistributionFamily::Weibull,
        DistributionFamily::Laplace,
    ];

    /// Registry name of the family.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Exponential => "exponential",
            Self::Uniform => "uniform",
            Self::Weibull => "weibull",
            Self::Laplace => "laplace",
        }
    }

    /// Canonical parameter names, in the order `params()` reports them.
    pub fn param_names(&self) -> &'static [&'static str] {
        match self {
            Self::Normal => &["mu", "sigma"],
            Self::Exponential => &["lambda"],
            Self::Uniform => &["a", "b"],
            Self::Weibull => &["shape", "scale"],
            Self::Laplace => &["loc", "scale"],
        }
    }

    /// Whether each parameter is constrained to be strictly positive.
    /// The MLE optimizer clamps exactly these at its lower bound.
    pub fn param_positive(&self) -> &'static [bool] {
        match self {
            Self::Normal => &[false, true],
            Self::Exponential => &[true],
            Self::Uniform => &[false, false],
            Self::Weibull => &[true, true],
            Self::Laplace => &[false, true],
        }
    }

    /// Look a family up by its registry name.
    pub fn from_name(name: &str) -> StatsResult<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| StatsError::UnknownName {
                name: name.to_string(),
                family: "distribution".to_string(),
            })
    }

    /// Moment-matching fit; returns a new immutable fitted value.
    pub fn fit(&self, sample: &[f64]) -> StatsResult<FittedDistribution> {
        Ok(match self {
            Self::Normal => FittedDistribution::Normal(Normal::fit(sample)?),
            Self::Exponential => FittedDistribution::Exponential(Exponential::fit(sample)?),
            Self::Uniform => FittedDistribution::Uniform(Uniform::fit(sample)?),
            Self::Weibull => FittedDistribution::Weibull(Weibull::fit(sample)?),
            Self::Laplace => FittedDistribution::Laplace(Laplace::fit(sample)?),
        })
    }

    /// Validated construction from a raw parameter slice.
    pub fn from_params(&self, params: &[f64]) -> StatsResult<FittedDistribution> {
        Ok(match self {
            Self::Normal => FittedDistribution::Normal(Normal::from_params(params)?),
            Self::Exponential => {
                FittedDistribution::Exponential(Exponential::from_params(params)?)
            }
            Self::Uniform => FittedDistribution::Uniform(Uniform::from_params(params)?),
            Self::Weibull => FittedDistribution::Weibull(Weibull::from_params(params)?),
            Self::Laplace => FittedDistribution::Laplace(Laplace::from_params(params)?),
        })
    }
}

/// A fitted distribution: one family tag plus a validated parameter
/// tuple. Valid by construction, so every operation below is total on
/// the support.
#[derive(Debug, Clone, Copy)]
pub enum FittedDistribution {
    Normal(Normal),
    Exponential(Exponential),
    Uniform(Uniform),
    Weibull(Weibull),
    Laplace(Laplace),
}

impl FittedDistribution {
    /// The family this value belongs to.
    pub fn family(&self) -> DistributionFamily {
        match self {
            Self::Normal(_) => DistributionFamily::Normal,
            Self::Exponential(_) => DistributionFamily::Exponential,
            Self::Uniform(_) => DistributionFamily::Uniform,
            Self::Weibull(_) => DistributionFamily::Weibull,
            Self::Laplace(_) => DistributionFamily::Laplace,
        }
    }

    /// Parameter tuple in the family's canonical order.
    pub fn params(&self) -> Vec<f64> {
        match self {
            Self::Normal(d) => d.params(),
            Self::Exponential(d) => d.params(),
            Self::Uniform(d) => d.params(),
            Self::Weibull(d) => d.params(),
            Self::Laplace(d) => d.params(),
        }
    }

    /// Delta-method variance of the fitted-CDF estimate at `x`.
    pub fn cdf_variance(&self, x: f64, n: usize) -> f64 {
        match self {
            Self::Normal(d) => d.cdf_variance(x, n),
            Self::Exponential(d) => d.cdf_variance(x, n),
            Self::Uniform(d) => d.cdf_variance(x, n),
            Self::Weibull(d) => d.cdf_variance(x, n),
            Self::Laplace(d) => d.cdf_variance(x, n),
        }
    }
}

impl Distribution for FittedDistribution {
    fn mean(&self) -> f64 {
        match self {
            Self::Normal(d) => d.mean(),
            Self::Exponential(d) => d.mean(),
            Self::Uniform(d) => d.mean(),
            Self::Weibull(d) => d.mean(),
            Self::Laplace(d) => d.mean(),
        }
    }

    fn var(&self) -> f64 {
        match self {
            Self::Normal(d) => d.var(),
            Self::Exponential(d) => d.var(),
            Self::Uniform(d) => d.var(),
            Self::Weibull(d) => d.var(),
            Self::Laplace(d) => d.var(),
        }
    }
}

impl ContinuousDistribution for FittedDistribution {
    fn pdf(&self, x: f64) -> f64 {
        match self {
            Self::Normal(d) => d.pdf(x),
            Self::Exponential(d) => d.pdf(x),
            Self::Uniform(d) => d.pdf(x),
            Self::Weibull(d) => d.pdf(x),
            Self::Laplace(d) => d.pdf(x),
        }
    }

    fn log_pdf(&self, x: f64) -> f64 {
        match self {
            Self::Normal(d) => d.log_pdf(x),
            Self::Exponential(d) => d.log_pdf(x),
            Self::Uniform(d) => d.log_pdf(x),
            Self::Weibull(d) => d.log_pdf(x),
            Self::Laplace(d) => d.log_pdf(x),
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        match self {
            Self::Normal(d) => d.cdf(x),
            Self::Exponential(d) => d.cdf(x),
            Self::Uniform(d) => d.cdf(x),
            Self::Weibull(d) => d.cdf(x),
            Self::Laplace(d) => d.cdf(x),
        }
    }

    fn sf(&self, x: f64) -> f64 {
        match self {
            Self::Normal(d) => d.sf(x),
            Self::Exponential(d) => d.sf(x),
            Self::Uniform(d) => d.sf(x),
            Self::Weibull(d) => d.sf(x),
            Self::Laplace(d) => d.sf(x),
        }
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        match self {
            Self::Normal(d) => d.ppf(p),
            Self::Exponential(d) => d.ppf(p),
            Self::Uniform(d) => d.ppf(p),
            Self::Weibull(d) => d.ppf(p),
            Self::Laplace(d) => d.ppf(p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_names_roundtrip() {
        for family in DistributionFamily::ALL {
            let back = DistributionFamily::from_name(family.name()).unwrap();
            assert_eq!(back, family);
        }
        assert!(DistributionFamily::from_name("cauchy").is_err());
    }

    #[test]
    fn test_param_metadata_consistent() {
        for family in DistributionFamily::ALL {
            assert_eq!(family.param_names().len(), family.param_positive().len());
        }
    }

    #[test]
    fn test_fit_params_roundtrip() {
        let sample = [1.2, 3.4, 2.2, 5.1, 4.0, 2.8, 3.3];
        for family in DistributionFamily::ALL {
            let fitted = family.fit(&sample).unwrap();
            assert_eq!(fitted.family(), family);
            let params = fitted.params();
            assert_eq!(params.len(), family.param_names().len());

            let rebuilt = family.from_params(&params).unwrap();
            for p in [0.1, 0.5, 0.9] {
                let a = fitted.ppf(p).unwrap();
                let b = rebuilt.ppf(p).unwrap();
                assert!((a - b).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_from_params_rejects_bad_slices() {
        assert!(DistributionFamily::Normal.from_params(&[0.0]).is_err());
        assert!(DistributionFamily::Normal.from_params(&[0.0, -1.0]).is_err());
        assert!(DistributionFamily::Exponential.from_params(&[0.0]).is_err());
        assert!(DistributionFamily::Uniform.from_params(&[2.0, 1.0]).is_err());
        assert!(DistributionFamily::Weibull
            .from_params(&[1.0, f64::NAN])
            .is_err());
        assert!(DistributionFamily::Laplace.from_params(&[0.0, 0.0]).is_err());
    }
}
