//! Laplace (double exponential) distribution.

use crate::distribution::{ContinuousDistribution, Distribution, SampleFit};
use crate::error::{StatsError, StatsResult};
use crate::sample;

/// Smallest scale a fit will report.
const SCALE_FLOOR: f64 = 0.01;

/// Laplace (double exponential) distribution.
///
/// The Laplace distribution with location μ and scale b has PDF:
///
/// f(x) = (1/2b) exp(-|x-μ|/b)
///
/// # Examples
///
/// ```
/// use veristat::continuous::Laplace;
/// use veristat::distribution::ContinuousDistribution;
///
/// let l = Laplace::new(0.0, 1.0).unwrap();
/// assert!((l.cdf(0.0) - 0.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Laplace {
    /// Location parameter (μ)
    loc: f64,
    /// Scale parameter (b > 0)
    scale: f64,
}

impl Laplace {
    /// Create a new Laplace distribution.
    ///
    /// # Errors
    ///
    /// Returns an error if `scale` is not positive or either parameter is
    /// not finite.
    pub fn new(loc: f64, scale: f64) -> StatsResult<Self> {
        if !loc.is_finite() {
            return Err(StatsError::InvalidParameter {
                name: "loc".to_string(),
                value: loc,
                reason: "must be finite".to_string(),
            });
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(StatsError::InvalidParameter {
                name: "scale".to_string(),
                value: scale,
                reason: "must be positive and finite".to_string(),
            });
        }
        Ok(Self { loc, scale })
    }

    /// Get the location parameter.
    pub fn loc(&self) -> f64 {
        self.loc
    }

    /// Get the scale parameter.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Distribution for Laplace {
    fn mean(&self) -> f64 {
        self.loc
    }

    fn var(&self) -> f64 {
        2.0 * self.scale * self.scale
    }
}

impl ContinuousDistribution for Laplace {
    fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.loc).abs() / self.scale;
        (-z).exp() / (2.0 * self.scale)
    }

    fn log_pdf(&self, x: f64) -> f64 {
        let z = (x - self.loc).abs() / self.scale;
        -z - (2.0 * self.scale).ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        if z < 0.0 {
            0.5 * z.exp()
        } else {
            1.0 - 0.5 * (-z).exp()
        }
    }

    fn sf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        if z < 0.0 {
            1.0 - 0.5 * z.exp()
        } else {
            0.5 * (-z).exp()
        }
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
        let x = if p <= 0.5 {
            self.loc + self.scale * (2.0 * p).ln()
        } else {
            self.loc - self.scale * (2.0 * (1.0 - p)).ln()
        };
        Ok(x)
    }
}

impl SampleFit for Laplace {
    /// Location = sample median, scale = mean absolute deviation from the
    /// median (the Laplace maximum-likelihood pair), floored at 0.01.
    fn fit(sample: &[f64]) -> StatsResult<Self> {
        sample::check_sample(sample, "Laplace::fit")?;
        let loc = sample::median(sample);
        let mad = sample.iter().map(|x| (x - loc).abs()).sum::<f64>() / sample.len() as f64;
        Self::new(loc, mad.max(SCALE_FLOOR))
    }

    fn from_params(params: &[f64]) -> StatsResult<Self> {
        if params.len() != 2 {
            return Err(StatsError::LengthMismatch {
                expected: 2,
                got: params.len(),
                context: "Laplace::from_params".to_string(),
            });
        }
        Self::new(params[0], params[1])
    }

    fn params(&self) -> Vec<f64> {
        vec![self.loc, self.scale]
    }

    /// Delta-method CDF variance.
    ///
    /// With z = (x-μ)/b: |∂F/∂μ| = e^(-|z|)/(2b), |∂F/∂b| = |z|e^(-|z|)/(2b);
    /// Var(μ̂) = Var(b̂) = b²/n (inverse Fisher information), giving
    ///
    /// Var(F̂(x)) = e^(-2|z|)(1 + z²) / (4n)
    fn cdf_variance(&self, x: f64, n: usize) -> f64 {
        let z = (x - self.loc) / self.scale;
        let e = (-z.abs()).exp();
        e * e * (1.0 + z * z) / (4.0 * n as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laplace_creation() {
        assert!(Laplace::new(0.0, 1.0).is_ok());
        assert!(Laplace::new(0.0, 0.0).is_err());
        assert!(Laplace::new(0.0, -1.0).is_err());
        assert!(Laplace::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_laplace_pdf_cdf() {
        let l = Laplace::new(0.0, 1.0).unwrap();

        // PDF at the location is 1/(2b)
        assert!((l.pdf(0.0) - 0.5).abs() < 1e-12);

        // Symmetric about the location
        assert!((l.pdf(1.5) - l.pdf(-1.5)).abs() < 1e-12);
        assert!((l.cdf(0.0) - 0.5).abs() < 1e-12);
        assert!((l.cdf(-1.0) - 0.5 * (-1.0f64).exp()).abs() < 1e-12);

        // log_pdf agrees with pdf
        assert!((l.log_pdf(0.7) - l.pdf(0.7).ln()).abs() < 1e-12);

        // SF + CDF = 1
        for x in [-2.0, -0.5, 0.0, 0.5, 2.0] {
            assert!((l.sf(x) + l.cdf(x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_laplace_ppf_roundtrip() {
        let l = Laplace::new(2.0, 0.5).unwrap();
        for p in [0.05, 0.25, 0.5, 0.75, 0.95] {
            let x = l.ppf(p).unwrap();
            assert!((l.cdf(x) - p).abs() < 1e-10, "Failed for p={}", p);
        }
        assert!((l.ppf(0.5).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_laplace_fit() {
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
        let l = Laplace::fit(&sample).unwrap();
        assert!((l.loc() - 3.0).abs() < 1e-12);
        // MAD from median: (2+1+0+1+2)/5 = 1.2
        assert!((l.scale() - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_laplace_fit_scale_floor() {
        let l = Laplace::fit(&[4.0, 4.0, 4.0]).unwrap();
        assert!((l.scale() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_laplace_cdf_variance() {
        let l = Laplace::new(0.0, 1.0).unwrap();
        // At the location: e^0·(1+0)/(4n)
        assert!((l.cdf_variance(0.0, 100) - 1.0 / 400.0).abs() < 1e-12);
        assert!(l.cdf_variance(1.0, 1000) < l.cdf_variance(1.0, 100));
    }
}
