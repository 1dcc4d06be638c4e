//! One-sample Kolmogorov-Smirnov goodness-of-fit test.

use super::kolmogorov::{kolmogorov_cdf, kolmogorov_critical_value};
use super::GofConfig;
use crate::distribution::{ContinuousDistribution, FittedDistribution};
use crate::error::StatsResult;
use crate::result::TestSummary;
use crate::sample;

/// Kolmogorov-Smirnov test of `data` against the fitted CDF of `dist`.
///
/// Dn = max(D+, D-) over the sorted sample, z = √n·Dn; the p-value comes
/// from the finite-sample corrected Kolmogorov series and H0 is rejected
/// when z exceeds the series' critical value at `config.alpha`.
pub fn kolmogorov_smirnov(
    data: &[f64],
    dist: &FittedDistribution,
    config: &GofConfig,
) -> StatsResult<TestSummary> {
    sample::check_sample(data, "kolmogorov_smirnov")?;

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    let n_f = n as f64;

    let mut d_plus = f64::NEG_INFINITY;
    let mut d_minus = f64::NEG_INFINITY;
    for (i, &x) in sorted.iter().enumerate() {
        let f = dist.cdf(x);
        d_plus = d_plus.max((i + 1) as f64 / n_f - f);
        d_minus = d_minus.max(f - i as f64 / n_f);
    }
    let d = d_plus.max(d_minus);

    let z = n_f.sqrt() * d;
    let p_value = 1.0 - kolmogorov_cdf(z, n);
    let critical = kolmogorov_critical_value(config.alpha, n);

    Ok(TestSummary {
        statistic: z,
        df: None,
        critical_value: Some(critical),
        p_value,
        h0_accepted: z <= critical,
        extra: Default::default(),
    }
    .with_extra("d", d)
    .with_extra("d_plus", d_plus)
    .with_extra("d_minus", d_minus))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::DistributionFamily;

    fn standard_normal() -> FittedDistribution {
        DistributionFamily::Normal.from_params(&[0.0, 1.0]).unwrap()
    }

    #[test]
    fn test_ks_accepts_own_quantiles() {
        // Quantile-spaced points of N(0,1) are as close to the CDF as a
        // sample can be: the test must accept comfortably.
        let dist = standard_normal();
        let data: Vec<f64> = (1..100)
            .map(|i| dist.ppf(i as f64 / 100.0).unwrap())
            .collect();
        let result = kolmogorov_smirnov(&data, &dist, &GofConfig::default()).unwrap();
        assert!(result.h0_accepted, "z = {}", result.statistic);
        assert!(result.p_value > 0.5);
    }

    #[test]
    fn test_ks_rejects_shifted_distribution() {
        // Sample concentrated far from the hypothesized location
        let dist = standard_normal();
        let data: Vec<f64> = (0..100).map(|i| 3.0 + i as f64 * 0.01).collect();
        let result = kolmogorov_smirnov(&data, &dist, &GofConfig::default()).unwrap();
        assert!(!result.h0_accepted);
        assert!(result.p_value < 0.01);
    }

    #[test]
    fn test_ks_statistic_matches_hand_computation() {
        // Uniform(0,1) hypothesis, sample {0.25, 0.5, 0.75}:
        // D+ = max(1/3-0.25, 2/3-0.5, 1-0.75) = 0.25
        // D- = max(0.25-0, 0.5-1/3, 0.75-2/3) = 0.25
        let dist = DistributionFamily::Uniform.from_params(&[0.0, 1.0]).unwrap();
        let result =
            kolmogorov_smirnov(&[0.25, 0.5, 0.75], &dist, &GofConfig::default()).unwrap();
        let expected_z = 3.0_f64.sqrt() * 0.25;
        assert!((result.statistic - expected_z).abs() < 1e-12);
        assert!((result.extra["d"] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_ks_rejects_empty_sample() {
        let dist = standard_normal();
        assert!(kolmogorov_smirnov(&[], &dist, &GofConfig::default()).is_err());
    }
}
