//! Rank-based two-sample homogeneity tests: Mann-Whitney U, Wilcoxon
//! rank-sum and the rank-mean-difference test. All three rank the pooled
//! sample with midranks and use a normal approximation for the p-value.

use super::HomogeneityConfig;
use crate::continuous::special::{norm_cdf, norm_ppf};
use crate::error::StatsResult;
use crate::result::TestSummary;
use crate::sample;

/// Pooled midrank sums and sizes for a pair of samples.
fn rank_sums(x: &[f64], y: &[f64]) -> (f64, f64, f64, f64) {
    let ranks = sample::pooled_midranks(&[x, y]);
    let r1: f64 = ranks[0].iter().sum();
    let r2: f64 = ranks[1].iter().sum();
    (r1, r2, x.len() as f64, y.len() as f64)
}

fn normal_two_sided(z: f64, alpha: f64) -> (f64, f64, bool) {
    let p = 2.0 * norm_cdf(-z.abs());
    let critical = norm_ppf(1.0 - alpha / 2.0);
    (p, critical, z.abs() <= critical)
}

/// Mann-Whitney U test on two independent samples.
///
/// U = min(U₁, U₂) with the normal approximation
/// z = (U - n₁n₂/2) / √(n₁n₂(N+1)/12).
pub fn mann_whitney(x: &[f64], y: &[f64], config: &HomogeneityConfig) -> StatsResult<TestSummary> {
    sample::check_min_len(x, 2, "mann_whitney")?;
    sample::check_min_len(y, 2, "mann_whitney")?;

    let (r1, _, n1, n2) = rank_sums(x, y);
    let u1 = r1 - n1 * (n1 + 1.0) / 2.0;
    let u2 = n1 * n2 - u1;
    let u = u1.min(u2);

    let mean = n1 * n2 / 2.0;
    let sd = (n1 * n2 * (n1 + n2 + 1.0) / 12.0).sqrt().max(1e-12);
    let z = (u1 - mean) / sd;
    let (p_value, critical, h0_accepted) = normal_two_sided(z, config.alpha);

    Ok(TestSummary {
        statistic: u,
        df: None,
        critical_value: Some(critical),
        p_value,
        h0_accepted,
        extra: Default::default(),
    }
    .with_extra("u1", u1)
    .with_extra("u2", u2)
    .with_extra("z", z))
}

/// Wilcoxon rank-sum test on two independent samples.
///
/// W = rank sum of the first sample, compared against its null mean
/// n₁(N+1)/2 with variance n₁n₂(N+1)/12.
pub fn wilcoxon_rank_sum(
    x: &[f64],
    y: &[f64],
    config: &HomogeneityConfig,
) -> StatsResult<TestSummary> {
    sample::check_min_len(x, 2, "wilcoxon_rank_sum")?;
    sample::check_min_len(y, 2, "wilcoxon_rank_sum")?;

    let (r1, _, n1, n2) = rank_sums(x, y);
    let total = n1 + n2;
    let mean = n1 * (total + 1.0) / 2.0;
    let sd = (n1 * n2 * (total + 1.0) / 12.0).sqrt().max(1e-12);
    let z = (r1 - mean) / sd;
    let (p_value, critical, h0_accepted) = normal_two_sided(z, config.alpha);

    Ok(TestSummary {
        statistic: r1,
        df: None,
        critical_value: Some(critical),
        p_value,
        h0_accepted,
        extra: Default::default(),
    }
    .with_extra("z", z))
}

/// Rank-mean-difference test on two independent samples: the normalized
/// difference of the groups' mean pooled ranks.
///
/// se² = (1/n₁ + 1/n₂)² · n₁n₂(N+1)/12
pub fn rank_mean_difference(
    x: &[f64],
    y: &[f64],
    config: &HomogeneityConfig,
) -> StatsResult<TestSummary> {
    sample::check_min_len(x, 2, "rank_mean_difference")?;
    sample::check_min_len(y, 2, "rank_mean_difference")?;

    let (r1, r2, n1, n2) = rank_sums(x, y);
    let diff = r1 / n1 - r2 / n2;
    let total = n1 + n2;
    let se = ((1.0 / n1 + 1.0 / n2).powi(2) * n1 * n2 * (total + 1.0) / 12.0)
        .sqrt()
        .max(1e-12);
    let z = diff / se;
    let (p_value, critical, h0_accepted) = normal_two_sided(z, config.alpha);

    Ok(TestSummary {
        statistic: z,
        df: None,
        critical_value: Some(critical),
        p_value,
        h0_accepted,
        extra: Default::default(),
    }
    .with_extra("rank_mean_diff", diff))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mann_whitney_fully_separated() {
        // Every y exceeds every x: U = 0, strongest possible evidence
        let x = [1.0, 2.0, 3.0];
        let y = [4.0, 5.0, 6.0];
        let result = mann_whitney(&x, &y, &HomogeneityConfig::default()).unwrap();
        assert!((result.statistic - 0.0).abs() < 1e-12);
        assert!(result.extra["z"].abs() > 1.9);
        assert!(!result.h0_accepted);
    }

    #[test]
    fn test_mann_whitney_interleaved_accepts() {
        let x = [1.0, 3.0, 5.0, 7.0, 9.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];
        let result = mann_whitney(&x, &y, &HomogeneityConfig::default()).unwrap();
        assert!(result.h0_accepted);
        // U1 + U2 = n1*n2
        assert!((result.extra["u1"] + result.extra["u2"] - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_wilcoxon_agrees_with_mann_whitney_direction() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [10.0, 11.0, 12.0, 13.0];
        let w = wilcoxon_rank_sum(&x, &y, &HomogeneityConfig::default()).unwrap();
        let u = mann_whitney(&x, &y, &HomogeneityConfig::default()).unwrap();
        assert!(!w.h0_accepted);
        assert!(!u.h0_accepted);
        // W is the x rank sum: 1+2+3+4 = 10
        assert!((w.statistic - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_rank_mean_difference_symmetric() {
        let x = [1.0, 2.0, 3.0];
        let y = [4.0, 5.0, 6.0];
        let a = rank_mean_difference(&x, &y, &HomogeneityConfig::default()).unwrap();
        let b = rank_mean_difference(&y, &x, &HomogeneityConfig::default()).unwrap();
        assert!((a.statistic + b.statistic).abs() < 1e-12);
        assert!(!a.h0_accepted);
    }

    #[test]
    fn test_ties_use_midranks() {
        let x = [1.0, 2.0, 2.0];
        let y = [2.0, 3.0, 4.0];
        let result = mann_whitney(&x, &y, &HomogeneityConfig::default()).unwrap();
        // Tie group of three 2.0s gets rank (2+3+4)/3 = 3 each:
        // R1 = 1 + 3 + 3 = 7, U1 = 7 - 6 = 1
        assert!((result.extra["u1"] - 1.0).abs() < 1e-12);
    }
}
