//! Pearson product-moment correlation with a Student-t significance
//! test and a Fisher-z confidence interval.

use super::CorrelationConfig;
use crate::continuous::special::norm_ppf;
use crate::error::{StatsError, StatsResult};
use crate::homogeneity::t_critical_two_sided;
use crate::result::CorrelationOutcome;
use crate::sample;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Plain Pearson coefficient of two equal-length columns.
pub(crate) fn coefficient(x: &[f64], y: &[f64]) -> f64 {
    let mx = sample::mean(x);
    let my = sample::mean(y);
    let mut cov = 0.0;
    let mut vx = 0.0;
    let mut vy = 0.0;
    for (a, b) in x.iter().zip(y.iter()) {
        cov += (a - mx) * (b - my);
        vx += (a - mx).powi(2);
        vy += (b - my).powi(2);
    }
    cov / (vx * vy).sqrt().max(1e-12)
}

pub(super) fn check_pair(x: &[f64], y: &[f64], context: &str) -> StatsResult<()> {
    sample::check_min_len(x, 4, context)?;
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            expected: x.len(),
            got: y.len(),
            context: context.to_string(),
        });
    }
    Ok(())
}

/// Two-sided Student-t significance test of r with n - 2 degrees of
/// freedom. Returns (t, p, critical).
pub(super) fn t_significance(r: f64, n: usize, alpha: f64) -> StatsResult<(f64, f64, f64)> {
    let df = (n - 2) as f64;
    let t = r * df.sqrt() / (1.0 - r * r).sqrt().max(1e-12);
    let dist = StudentsT::new(0.0, 1.0, df).map_err(|e| StatsError::NumericalError {
        message: format!("Student t({}): {}", df, e),
    })?;
    let p = 2.0 * dist.cdf(-t.abs());
    let critical = t_critical_two_sided(alpha, df)?;
    Ok((t, p, critical))
}

/// Pearson correlation of paired columns.
///
/// The Fisher-z interval tanh(atanh r ± z/√(n-3)) is attached only when
/// the t-test rejects zero association.
pub fn pearson(x: &[f64], y: &[f64], config: &CorrelationConfig) -> StatsResult<CorrelationOutcome> {
    check_pair(x, y, "pearson")?;

    let r = coefficient(x, y);
    let (t, p_value, critical) = t_significance(r, x.len(), config.alpha)?;
    let significant = p_value <= config.alpha;

    let interval = if significant && x.len() > 3 {
        let z = norm_ppf((1.0 + config.confidence) / 2.0);
        let spread = z / ((x.len() - 3) as f64).sqrt();
        let center = r.clamp(-0.999_999, 0.999_999).atanh();
        Some(((center - spread).tanh(), (center + spread).tanh()))
    } else {
        None
    };

    Ok(CorrelationOutcome {
        coefficient: r,
        statistic: t,
        p_value,
        significant,
        alpha: config.alpha,
        critical_value: Some(critical),
        interval,
        extra: Default::default(),
    })
}
