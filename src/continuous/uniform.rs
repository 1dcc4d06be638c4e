//! Continuous uniform distribution.

use crate::distribution::{ContinuousDistribution, Distribution, SampleFit};
use crate::error::{StatsError, StatsResult};
use crate::sample;

/// Half-width used to widen a degenerate fit on a constant sample.
const DEGENERATE_HALF_WIDTH: f64 = 0.01;

/// Continuous uniform distribution on [a, b].
///
/// f(x) = 1/(b-a)  for a ≤ x ≤ b
///
/// # Examples
///
/// ```
/// use veristat::continuous::Uniform;
/// use veristat::distribution::{ContinuousDistribution, Distribution};
///
/// let u = Uniform::new(0.0, 2.0).unwrap();
/// assert!((u.mean() - 1.0).abs() < 1e-10);
/// assert!((u.cdf(0.5) - 0.25).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Uniform {
    /// Lower bound (a)
    a: f64,
    /// Upper bound (b)
    b: f64,
}

impl Uniform {
    /// Create a new uniform distribution on [a, b].
    ///
    /// # Errors
    ///
    /// Returns an error unless a and b are finite with a < b.
    pub fn new(a: f64, b: f64) -> StatsResult<Self> {
        if !a.is_finite() {
            return Err(StatsError::InvalidParameter {
                name: "a".to_string(),
                value: a,
                reason: "must be finite".to_string(),
            });
        }
        if !b.is_finite() || b <= a {
            return Err(StatsError::InvalidParameter {
                name: "b".to_string(),
                value: b,
                reason: "must be finite and greater than a".to_string(),
            });
        }
        Ok(Self { a, b })
    }

    /// Get the lower bound.
    pub fn lower(&self) -> f64 {
        self.a
    }

    /// Get the upper bound.
    pub fn upper(&self) -> f64 {
        self.b
    }

    fn width(&self) -> f64 {
        self.b - self.a
    }
}

impl Distribution for Uniform {
    fn mean(&self) -> f64 {
        0.5 * (self.a + self.b)
    }

    fn var(&self) -> f64 {
        let w = self.width();
        w * w / 12.0
    }
}

impl ContinuousDistribution for Uniform {
    fn pdf(&self, x: f64) -> f64 {
        if x < self.a || x > self.b {
            0.0
        } else {
            1.0 / self.width()
        }
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x < self.a || x > self.b {
            f64::NEG_INFINITY
        } else {
            -self.width().ln()
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < self.a {
            0.0
        } else if x > self.b {
            1.0
        } else {
            (x - self.a) / self.width()
        }
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(StatsError::InvalidProbability { value: p });
        }
        Ok(self.a + p * self.width())
    }
}

impl SampleFit for Uniform {
    /// a = sample min, b = sample max. A constant sample is widened by
    /// 0.01 on each side to keep the support non-degenerate.
    fn fit(sample: &[f64]) -> StatsResult<Self> {
        sample::check_sample(sample, "Uniform::fit")?;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &x in sample {
            min = min.min(x);
            max = max.max(x);
        }
        if min == max {
            min -= DEGENERATE_HALF_WIDTH;
            max += DEGENERATE_HALF_WIDTH;
        }
        Self::new(min, max)
    }

    fn from_params(params: &[f64]) -> StatsResult<Self> {
        if params.len() != 2 {
            return Err(StatsError::LengthMismatch {
                expected: 2,
                got: params.len(),
                context: "Uniform::from_params".to_string(),
            });
        }
        Self::new(params[0], params[1])
    }

    fn params(&self) -> Vec<f64> {
        vec![self.a, self.b]
    }

    /// Delta-method CDF variance.
    ///
    /// With F = (x-a)/(b-a): ∂F/∂a = (x-b)/(b-a)², ∂F/∂b = -(x-a)/(b-a)².
    /// The min/max estimators each have asymptotic variance (b-a)²/n² and
    /// zero covariance by construction, giving
    ///
    /// Var(F̂(x)) = ((x-b)² + (x-a)²) / ((b-a)² n²)
    fn cdf_variance(&self, x: f64, n: usize) -> f64 {
        if x < self.a || x > self.b {
            return 0.0;
        }
        let w = self.width();
        let n = n as f64;
        ((x - self.b).powi(2) + (x - self.a).powi(2)) / (w * w * n * n)
    }
}
