//! Weibull distribution.

use super::exponential::shift_to_positive;
use super::special::gamma;
use crate::distribution::{ContinuousDistribution, Distribution, SampleFit};
use crate::error::{StatsError, StatsResult};
use crate::sample;

/// Weibull distribution.
///
/// The Weibull distribution is a continuous probability distribution
/// with PDF:
///
/// f(x; k, λ) = (k/λ) * (x/λ)^(k-1) * exp(-(x/λ)^k)  for x ≥ 0
///
/// where k > 0 is the shape parameter and λ > 0 is the scale parameter.
///
/// # Example
///
/// ```
/// use veristat::continuous::Weibull;
/// use veristat::distribution::ContinuousDistribution;
///
/// let w = Weibull::new(2.0, 1.0).unwrap();
/// assert!((w.cdf(1.0) - (1.0 - (-1.0f64).exp())).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Weibull {
    /// Shape parameter (k > 0)
    shape: f64,
    /// Scale parameter (λ > 0)
    scale: f64,
}

impl Weibull {
    /// Create a new Weibull distribution.
    ///
    /// # Errors
    ///
    /// Returns an error unless both parameters are positive and finite.
    pub fn new(shape: f64, scale: f64) -> StatsResult<Self> {
        if !shape.is_finite() || shape <= 0.0 {
            return Err(StatsError::InvalidParameter {
                name: "shape".to_string(),
                value: shape,
                reason: "must be positive and finite".to_string(),
            });
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(StatsError::InvalidParameter {
                name: "scale".to_string(),
                value: scale,
                reason: "must be positive and finite".to_string(),
            });
        }
        Ok(Self { shape, scale })
    }

    /// Get the shape parameter.
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Get the scale parameter.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

/// Squared coefficient of variation implied by shape k:
/// Γ(1+2/k)/Γ(1+1/k)² - 1. Strictly decreasing in k.
fn cv_squared(k: f64) -> f64 {
    let g1 = gamma(1.0 + 1.0 / k);
    let g2 = gamma(1.0 + 2.0 / k);
    g2 / (g1 * g1) - 1.0
}

/// Solve cv_squared(k) = target by bisection on [0.05, 50].
/// Returns None when the target falls outside that bracket.
fn solve_shape(target: f64) -> Option<f64> {
    let (mut lo, mut hi) = (0.05, 50.0);
    let f_lo = cv_squared(lo) - target;
    let f_hi = cv_squared(hi) - target;
    if !f_lo.is_finite() || !f_hi.is_finite() || f_lo.signum() == f_hi.signum() {
        return None;
    }
    for _ in 0..200 {
        let mid = 0.5 * (lo + hi);
        let f_mid = cv_squared(mid) - target;
        if f_mid.abs() < 1e-12 || (hi - lo) < 1e-12 {
            return Some(mid);
        }
        if f_mid.signum() == f_lo.signum() {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Some(0.5 * (lo + hi))
}

impl Distribution for Weibull {
    fn mean(&self) -> f64 {
        self.scale * gamma(1.0 + 1.0 / self.shape)
    }

    fn var(&self) -> f64 {
        let g1 = gamma(1.0 + 1.0 / self.shape);
        let g2 = gamma(1.0 + 2.0 / self.shape);
        self.scale * self.scale * (g2 - g1 * g1)
    }
}

impl ContinuousDistribution for Weibull {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        let z = x / self.scale;
        (self.shape / self.scale) * z.powf(self.shape - 1.0) * (-z.powf(self.shape)).exp()
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return f64::NEG_INFINITY;
        }
        let z = x / self.scale;
        self.shape.ln() - self.scale.ln() + (self.shape - 1.0) * z.ln() - z.powf(self.shape)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            -(-(x / self.scale).powf(self.shape)).exp_m1()
        }
    }

    fn sf(&self, x: f64) -> f64 {
        if x < 0.0 {
            1.0
        } else {
            (-(x / self.scale).powf(self.shape)).exp()
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
        // x = λ(-ln(1-p))^(1/k)
        Ok(self.scale * (-(-p).ln_1p()).powf(1.0 / self.shape))
    }
}

impl SampleFit for Weibull {
    /// Moment fit: shape solved from the coefficient-of-variation
    /// equation by bisection, falling back to the approximation
    /// k = (s/m)^(-1.086) when the bracket fails; scale = m / Γ(1+1/k).
    /// Data with non-positive values is shifted into the support first.
    fn fit(sample: &[f64]) -> StatsResult<Self> {
        sample::check_min_len(sample, 2, "Weibull::fit")?;
        let shifted = shift_to_positive(sample);
        let m = sample::mean(&shifted);
        let s = sample::std_dev(&shifted).max(1e-10);

        let cv2 = (s / m) * (s / m);
        let shape = match solve_shape(cv2) {
            Some(k) => k,
            None => (s / m).powf(-1.086).clamp(0.02, 100.0),
        };
        let scale = m / gamma(1.0 + 1.0 / shape);
        Self::new(shape, scale)
    }

    fn from_params(params: &[f64]) -> StatsResult<Self> {
        if params.len() != 2 {
            return Err(StatsError::LengthMismatch {
                expected: 2,
                got: params.len(),
                context: "Weibull::from_params".to_string(),
            });
        }
        Self::new(params[0], params[1])
    }

    fn params(&self) -> Vec<f64> {
        vec![self.shape, self.scale]
    }

    /// Delta-method CDF variance.
    ///
    /// With t = (x/λ)^k: ∂F/∂k = e^(-t)·t·ln(x/λ),
    /// ∂F/∂λ = -e^(-t)·t·k/λ. The inverse Fisher information gives
    /// Var(k̂) ≈ 0.6079·k²/n and Var(λ̂) ≈ 1.1087·λ²/(k²n).
    fn cdf_variance(&self, x: f64, n: usize) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let n = n as f64;
        let k = self.shape;
        let lambda = self.scale;
        let t = (x / lambda).powf(k);
        let et = (-t).exp();

        let d_shape = et * t * (x / lambda).ln();
        let d_scale = et * t * k / lambda;

        let var_shape = 0.6079 * k * k / n;
        let var_scale = 1.1087 * lambda * lambda / (k * k * n);

        d_shape * d_shape * var_shape + d_scale * d_scale * var_scale
    }
}
