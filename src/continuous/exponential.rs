//! Exponential distribution.

use crate::distribution::{ContinuousDistribution, Distribution, SampleFit};
use crate::error::{StatsError, StatsResult};
use crate::sample;

/// Offset applied when shifting a sample with non-positive values into
/// the distribution's support before fitting.
pub(crate) const SUPPORT_SHIFT: f64 = 0.01;

/// Exponential distribution.
///
/// The exponential distribution with rate parameter λ has PDF:
///
/// f(x) = λ exp(-λx)  for x ≥ 0
///
/// # Examples
///
/// ```
/// use veristat::continuous::Exponential;
/// use veristat::distribution::Distribution;
///
/// let e = Exponential::new(2.0).unwrap();
/// assert!((e.mean() - 0.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Exponential {
    /// Rate parameter (λ)
    lambda: f64,
}

impl Exponential {
    /// Create a new exponential distribution with given rate parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if `lambda` is not positive and finite.
    pub fn new(lambda: f64) -> StatsResult<Self> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(StatsError::InvalidParameter {
                name: "lambda".to_string(),
                value: lambda,
                reason: "must be positive and finite".to_string(),
            });
        }
        Ok(Self { lambda })
    }

    /// Get the rate parameter λ.
    pub fn rate(&self) -> f64 {
        self.lambda
    }

    /// Get the scale parameter β = 1/λ.
    pub fn scale(&self) -> f64 {
        1.0 / self.lambda
    }
}

/// Shift a sample so its minimum sits at `SUPPORT_SHIFT`, when any value
/// is non-positive. Shared by the Exponential and Weibull fits.
pub(crate) fn shift_to_positive(sample: &[f64]) -> Vec<f64> {
    let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
    if min > 0.0 {
        sample.to_vec()
    } else {
        let shift = SUPPORT_SHIFT - min;
        sample.iter().map(|x| x + shift).collect()
    }
}

impl Distribution for Exponential {
    fn mean(&self) -> f64 {
        1.0 / self.lambda
    }

    fn var(&self) -> f64 {
        1.0 / (self.lambda * self.lambda)
    }
}

impl ContinuousDistribution for Exponential {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            self.lambda * (-self.lambda * x).exp()
        }
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            f64::NEG_INFINITY
        } else {
            self.lambda.ln() - self.lambda * x
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            // -expm1(-λx) for numerical stability when x is small
            -(-self.lambda * x).exp_m1()
        }
    }

    fn sf(&self, x: f64) -> f64 {
        if x < 0.0 {
            1.0
        } else {
            (-self.lambda * x).exp()
        }
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(StatsError::InvalidProbability { value: p });
        }
        if p == 0.0 {
            return Ok(0.0);
        }
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        // x = -ln(1-p) / λ = -ln1p(-p) / λ
        Ok(-(-p).ln_1p() / self.lambda)
    }
}

impl SampleFit for Exponential {
    /// λ = 1/mean, after shifting the data into the positive domain when
    /// any value is non-positive.
    fn fit(sample: &[f64]) -> StatsResult<Self> {
        sample::check_sample(sample, "Exponential::fit")?;
        let shifted = shift_to_positive(sample);
        let m = sample::mean(&shifted);
        Self::new(1.0 / m)
    }

    fn from_params(params: &[f64]) -> StatsResult<Self> {
        if params.len() != 1 {
            return Err(StatsError::LengthMismatch {
                expected: 1,
                got: params.len(),
                context: "Exponential::from_params".to_string(),
            });
        }
        Self::new(params[0])
    }

    fn params(&self) -> Vec<f64> {
        vec![self.lambda]
    }

    /// Delta-method CDF variance.
    ///
    /// ∂F/∂λ = x·exp(-λx); Var(λ̂) = λ²/n, giving
    ///
    /// Var(F̂(x)) = x² exp(-2λx) λ² / n
    fn cdf_variance(&self, x: f64, n: usize) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        let d = x * (-self.lambda * x).exp();
        d * d * self.lambda * self.lambda / n as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_creation() {
        let e = Exponential::new(2.0).unwrap();
        assert!((e.rate() - 2.0).abs() < 1e-10);
        assert!((e.scale() - 0.5).abs() < 1e-10);

        assert!(Exponential::new(0.0).is_err());
        assert!(Exponential::new(-1.0).is_err());
        assert!(Exponential::new(f64::NAN).is_err());
    }

    #[test]
    fn test_exponential_pdf_cdf() {
        let e = Exponential::new(2.0).unwrap();

        assert!((e.pdf(0.0) - 2.0).abs() < 1e-10);
        assert!((e.pdf(-1.0) - 0.0).abs() < 1e-10);
        assert!((e.cdf(0.0) - 0.0).abs() < 1e-10);
        assert!((e.cdf(-1.0) - 0.0).abs() < 1e-10);
        assert!((e.cdf(1.0) - (1.0 - (-2.0_f64).exp())).abs() < 1e-10);

        // CDF at median should be 0.5
        let median = 2.0_f64.ln() / 2.0;
        assert!((e.cdf(median) - 0.5).abs() < 1e-10);

        // SF + CDF = 1
        for x in [0.5, 1.0, 2.0, 5.0] {
            assert!((e.sf(x) + e.cdf(x) - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_exponential_ppf_roundtrip() {
        let e = Exponential::new(2.0).unwrap();
        assert!((e.ppf(0.0).unwrap() - 0.0).abs() < 1e-10);
        for p in [0.1, 0.25, 0.5, 0.75, 0.9, 0.99] {
            let x = e.ppf(p).unwrap();
            assert!((e.cdf(x) - p).abs() < 1e-10, "Failed for p={}", p);
        }
    }

    #[test]
    fn test_exponential_fit() {
        // Mean 0.5 → λ = 2
        let sample = [0.25, 0.5, 0.75];
        let e = Exponential::fit(&sample).unwrap();
        assert!((e.rate() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_exponential_fit_shifts_nonpositive_data() {
        // min = -1 → data shifted by 1.01, mean becomes 2.01
        let sample = [-1.0, 1.0, 3.0];
        let e = Exponential::fit(&sample).unwrap();
        assert!((e.rate() - 1.0 / 2.01).abs() < 1e-12);
    }

    #[test]
    fn test_exponential_cdf_variance() {
        let e = Exponential::new(2.0).unwrap();
        assert!((e.cdf_variance(-1.0, 100) - 0.0).abs() < 1e-15);
        assert!(e.cdf_variance(0.5, 100) > 0.0);
        assert!(e.cdf_variance(0.5, 1000) < e.cdf_variance(0.5, 100));
    }
}
