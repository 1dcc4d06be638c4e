//! Two-sample Smirnov test: the maximum gap between the two empirical
//! CDFs, referred to the Kolmogorov distribution at the smaller sample
//! size.

use super::HomogeneityConfig;
use crate::error::StatsResult;
use crate::gof::{kolmogorov_cdf, kolmogorov_critical_value};
use crate::result::TestSummary;
use crate::sample;

/// Empirical CDF of `sorted` at `x` (proportion of values <= x).
fn ecdf(sorted: &[f64], x: f64) -> f64 {
    let count = sorted.partition_point(|&v| v <= x);
    count as f64 / sorted.len() as f64
}

/// Two-sample Smirnov homogeneity test.
///
/// D = sup |F₁(x) - F₂(x)| over the pooled sample points, scaled by
/// √min(n₁, n₂) and compared against the Kolmogorov distribution.
pub fn smirnov(x: &[f64], y: &[f64], config: &HomogeneityConfig) -> StatsResult<TestSummary> {
    sample::check_min_len(x, 2, "smirnov")?;
    sample::check_min_len(y, 2, "smirnov")?;

    let mut sx = x.to_vec();
    let mut sy = y.to_vec();
    sx.sort_by(|a, b| a.total_cmp(b));
    sy.sort_by(|a, b| a.total_cmp(b));

    let mut d = 0.0f64;
    for &point in sx.iter().chain(sy.iter()) {
        let gap = (ecdf(&sx, point) - ecdf(&sy, point)).abs();
        if gap > d {
            d = gap;
        }
    }

    let n_eff = sx.len().min(sy.len());
    let z = (n_eff as f64).sqrt() * d;
    let p_value = 1.0 - kolmogorov_cdf(z, n_eff);
    let critical = kolmogorov_critical_value(config.alpha, n_eff);
    let h0_accepted = z <= critical;

    Ok(TestSummary {
        statistic: z,
        df: None,
        critical_value: Some(critical),
        p_value,
        h0_accepted,
        extra: Default::default(),
    }
    .with_extra("d", d))
}
