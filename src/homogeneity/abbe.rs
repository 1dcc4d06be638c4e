//! Abbe test on a single series: successive-difference mean square
//! against the sample variance, sensitive to drift in the mean.

use super::HomogeneityConfig;
use crate::continuous::special::{norm_cdf, norm_ppf};
use crate::error::StatsResult;
use crate::result::TestSummary;
use crate::sample;

/// Abbe test for constancy of the mean along an ordered series.
///
/// q = ½ Σ(xᵢ₊₁ - xᵢ)² / Σ(xᵢ - x̄)², with E[q] = 1 under H0. Drift
/// depresses q, so the test is one-sided on the left tail:
/// z = (q - 1) / √((n-2)/(n²-1)), reject when z < -z₍₁₋α₎.
pub fn abbe(x: &[f64], config: &HomogeneityConfig) -> StatsResult<TestSummary> {
    sample::check_min_len(x, 3, "abbe")?;

    let mean = sample::mean(x);
    let ss: f64 = x.iter().map(|v| (v - mean).powi(2)).sum();
    let diff_ss: f64 = x.windows(2).map(|w| (w[1] - w[0]).powi(2)).sum();
    let q = 0.5 * diff_ss / ss.max(1e-12);

    let n = x.len() as f64;
    let sd = ((n - 2.0) / (n * n - 1.0)).sqrt();
    let z = (q - 1.0) / sd;

    let p_value = norm_cdf(z);
    let critical = -norm_ppf(1.0 - config.alpha);
    let h0_accepted = z >= critical;

    Ok(TestSummary {
        statistic: q,
        df: None,
        critical_value: Some(critical),
        p_value,
        h0_accepted,
        extra: Default::default(),
    }
    .with_extra("z", z))
}
