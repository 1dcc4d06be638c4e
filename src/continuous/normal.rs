//! Normal (Gaussian) distribution.

use super::special::{self, INV_SQRT_2PI, LN_SQRT_2PI};
use crate::distribution::{ContinuousDistribution, Distribution, SampleFit};
use crate::error::{StatsError, StatsResult};
use crate::sample;

/// Smallest standard deviation a fit will report, guarding against
/// zero-scale degeneracy on constant samples.
const SIGMA_FLOOR: f64 = 0.01;

/// Normal (Gaussian) distribution.
///
/// The normal distribution with mean μ and standard deviation σ has PDF:
///
/// f(x) = (1 / (σ√(2π))) exp(-(x-μ)² / (2σ²))
///
/// # Examples
///
/// ```
/// use veristat::continuous::Normal;
/// use veristat::distribution::{ContinuousDistribution, Distribution};
///
/// let n = Normal::standard();
/// assert!((n.pdf(0.0) - 0.3989422804).abs() < 1e-6);
/// assert!((n.cdf(0.0) - 0.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Normal {
    /// Mean (μ)
    mu: f64,
    /// Standard deviation (σ)
    sigma: f64,
}

impl Normal {
    /// Create a new normal distribution with given mean and standard
    /// deviation.
    ///
    /// # Errors
    ///
    /// Returns an error if `sigma` is not positive or either parameter is
    /// not finite.
    pub fn new(mu: f64, sigma: f64) -> StatsResult<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(StatsError::InvalidParameter {
                name: "sigma".to_string(),
                value: sigma,
                reason: "must be positive and finite".to_string(),
            });
        }
        if !mu.is_finite() {
            return Err(StatsError::InvalidParameter {
                name: "mu".to_string(),
                value: mu,
                reason: "must be finite".to_string(),
            });
        }
        Ok(Self { mu, sigma })
    }

    /// Create a standard normal distribution N(0, 1).
    pub fn standard() -> Self {
        Self {
            mu: 0.0,
            sigma: 1.0,
        }
    }

    /// Get the mean parameter.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Get the standard deviation parameter.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Standardize a value: z = (x - μ) / σ
    fn standardize(&self, x: f64) -> f64 {
        (x - self.mu) / self.sigma
    }
}

impl Distribution for Normal {
    fn mean(&self) -> f64 {
        self.mu
    }

    fn var(&self) -> f64 {
        self.sigma * self.sigma
    }

    fn std(&self) -> f64 {
        self.sigma
    }
}

impl ContinuousDistribution for Normal {
    fn pdf(&self, x: f64) -> f64 {
        let z = self.standardize(x);
        INV_SQRT_2PI * (-0.5 * z * z).exp() / self.sigma
    }

    fn log_pdf(&self, x: f64) -> f64 {
        let z = self.standardize(x);
        -LN_SQRT_2PI - self.sigma.ln() - 0.5 * z * z
    }

    fn cdf(&self, x: f64) -> f64 {
        special::norm_cdf(self.standardize(x))
    }

    fn sf(&self, x: f64) -> f64 {
        special::norm_cdf(-self.standardize(x))
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(StatsError::InvalidProbability { value: p });
        }
        if p == 0.0 {
            return Ok(f64::NEG_INFINITY);
        }
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        Ok(self.mu + self.sigma * special::norm_ppf(p))
    }
}

impl SampleFit for Normal {
    fn fit(sample: &[f64]) -> StatsResult<Self> {
        sample::check_min_len(sample, 2, "Normal::fit")?;
        let mu = sample::mean(sample);
        let sigma = sample::std_dev(sample).max(SIGMA_FLOOR);
        Self::new(mu, sigma)
    }

    fn from_params(params: &[f64]) -> StatsResult<Self> {
        if params.len() != 2 {
            return Err(StatsError::LengthMismatch {
                expected: 2,
                got: params.len(),
                context: "Normal::from_params".to_string(),
            });
        }
        Self::new(params[0], params[1])
    }

    fn params(&self) -> Vec<f64> {
        vec![self.mu, self.sigma]
    }

    /// Delta-method CDF variance.
    ///
    /// With z = (x-μ)/σ, ∂F/∂μ = -φ(z)/σ and ∂F/∂σ = -z·φ(z)/σ;
    /// Var(μ̂) = σ²/n, Var(σ̂) = σ²/(2n), giving
    ///
    /// Var(F̂(x)) = φ(z)²/n · (1 + z²/2)
    fn cdf_variance(&self, x: f64, n: usize) -> f64 {
        let z = self.standardize(x);
        let phi = special::norm_pdf(z);
        phi * phi / n as f64 * (1.0 + z * z / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_creation() {
        let n = Normal::new(0.0, 1.0).unwrap();
        assert!((n.mu() - 0.0).abs() < 1e-10);
        assert!((n.sigma() - 1.0).abs() < 1e-10);

        assert!(Normal::new(0.0, 0.0).is_err());
        assert!(Normal::new(0.0, -1.0).is_err());
        assert!(Normal::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_normal_pdf() {
        let n = Normal::standard();

        // PDF at 0 should be 1/sqrt(2π)
        assert!((n.pdf(0.0) - 0.3989422804014327).abs() < 1e-10);

        // PDF is symmetric
        assert!((n.pdf(1.0) - n.pdf(-1.0)).abs() < 1e-10);

        // log_pdf agrees with pdf
        assert!((n.log_pdf(1.3) - n.pdf(1.3).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_normal_cdf() {
        let n = Normal::standard();

        assert!((n.cdf(0.0) - 0.5).abs() < 1e-10);
        assert!(n.cdf(-10.0) < 1e-10);
        assert!((1.0 - n.cdf(10.0)) < 1e-10);
        assert!((n.cdf(1.0) - 0.8413447460685429).abs() < 1e-6);
        assert!((n.cdf(1.96) - 0.9750021048517796).abs() < 1e-6);

        // SF + CDF = 1
        assert!((n.sf(1.96) + n.cdf(1.96) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_normal_ppf_roundtrip() {
        let n = Normal::new(100.0, 15.0).unwrap();
        for p in [0.1, 0.25, 0.5, 0.75, 0.9, 0.95, 0.99] {
            let x = n.ppf(p).unwrap();
            assert!(
                (n.cdf(x) - p).abs() < 1e-6,
                "Roundtrip failed for p={}: cdf(ppf(p)) = {}",
                p,
                n.cdf(x)
            );
        }

        assert!(n.ppf(-0.1).is_err());
        assert!(n.ppf(1.1).is_err());
    }

    #[test]
    fn test_normal_fit() {
        let sample = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let n = Normal::fit(&sample).unwrap();
        assert!((n.mu() - 5.0).abs() < 1e-12);
        assert!((n.sigma() - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_normal_fit_sigma_floor() {
        // Constant sample: sd would be 0 without the floor
        let n = Normal::fit(&[3.0, 3.0, 3.0, 3.0]).unwrap();
        assert!((n.sigma() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_normal_cdf_variance() {
        let n = Normal::standard();

        // At the mean: z = 0, Var = φ(0)²/n
        let v = n.cdf_variance(0.0, 100);
        let phi0 = 0.3989422804014327;
        assert!((v - phi0 * phi0 / 100.0).abs() < 1e-12);

        // Shrinks with n
        assert!(n.cdf_variance(1.0, 1000) < n.cdf_variance(1.0, 100));

        // Vanishes in the tails
        assert!(n.cdf_variance(8.0, 100) < 1e-10);
    }
}
