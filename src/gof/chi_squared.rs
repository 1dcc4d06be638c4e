//! Pearson chi-squared goodness-of-fit test (one-dimensional).

use super::GofConfig;
use crate::distribution::{ContinuousDistribution, FittedDistribution};
use crate::error::{StatsError, StatsResult};
use crate::result::TestSummary;
use crate::sample;
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Bins with an expected count at or below this are dropped from the
/// statistic (and from the degrees of freedom).
pub(crate) const EXPECTED_FLOOR: f64 = 1e-8;

/// Pearson chi-squared test of `data` against the fitted `dist`.
///
/// The sample range is split into `config.bins` equal-width classes with
/// the outer edges extended over the whole support; expected frequencies
/// are CDF differences across the edges. Degrees of freedom are
/// unmasked bins - 1 - (number of fitted parameters), floored at 1.
pub fn chi_squared(
    data: &[f64],
    dist: &FittedDistribution,
    config: &GofConfig,
) -> StatsResult<TestSummary> {
    sample::check_min_len(data, 2, "chi_squared")?;
    if config.bins < 2 {
        return Err(StatsError::InvalidParameter {
            name: "bins".to_string(),
            value: config.bins as f64,
            reason: "need at least 2 classes".to_string(),
        });
    }

    let n = data.len();
    let bins = config.bins;
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return Err(StatsError::NumericalError {
            message: "chi_squared: sample has zero range".to_string(),
        });
    }
    let width = (max - min) / bins as f64;

    let mut observed = vec![0.0_f64; bins];
    for &x in data {
        let idx = (((x - min) / width) as usize).min(bins - 1);
        observed[idx] += 1.0;
    }

    let mut expected = vec![0.0_f64; bins];
    for (i, e) in expected.iter_mut().enumerate() {
        // Outer edges cover the full support
        let lo = if i == 0 {
            0.0
        } else {
            dist.cdf(min + i as f64 * width)
        };
        let hi = if i == bins - 1 {
            1.0
        } else {
            dist.cdf(min + (i + 1) as f64 * width)
        };
        *e = n as f64 * (hi - lo);
    }

    let mut statistic = 0.0;
    let mut unmasked = 0usize;
    for (o, e) in observed.iter().zip(expected.iter()) {
        if *e > EXPECTED_FLOOR {
            statistic += (o - e) * (o - e) / e;
            unmasked += 1;
        }
    }

    let fitted_params = dist.params().len();
    let df = (unmasked as f64 - 1.0 - fitted_params as f64).max(1.0);

    let chi2 = ChiSquared::new(df).map_err(|e| StatsError::NumericalError {
        message: format!("chi-squared distribution with df {}: {}", df, e),
    })?;
    let p_value = 1.0 - chi2.cdf(statistic);
    let critical = chi2.inverse_cdf(1.0 - config.alpha);

    Ok(TestSummary {
        statistic,
        df: Some(df),
        critical_value: Some(critical),
        p_value,
        h0_accepted: statistic <= critical,
        extra: Default::default(),
    }
    .with_extra("bins_used", unmasked as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::DistributionFamily;

    #[test]
    fn test_chi_squared_accepts_matching_quantiles() {
        let dist = DistributionFamily::Normal.from_params(&[0.0, 1.0]).unwrap();
        let data: Vec<f64> = (1..500)
            .map(|i| dist.ppf(i as f64 / 500.0).unwrap())
            .collect();
        let result = chi_squared(&data, &dist, &GofConfig::default()).unwrap();
        assert!(result.h0_accepted, "statistic = {}", result.statistic);
    }

    #[test]
    fn test_chi_squared_rejects_wrong_shape() {
        // Heavily right-skewed data against a symmetric hypothesis
        let exp = DistributionFamily::Exponential.from_params(&[5.0]).unwrap();
        let data: Vec<f64> = (1..300)
            .map(|i| exp.ppf(i as f64 / 300.0).unwrap())
            .collect();
        let normal = DistributionFamily::Normal.fit(&data).unwrap();
        let result = chi_squared(&data, &normal, &GofConfig::default()).unwrap();
        assert!(!result.h0_accepted, "statistic = {}", result.statistic);
        assert!(result.p_value < 0.05);
    }

    #[test]
    fn test_chi_squared_df_accounts_for_parameters() {
        let dist = DistributionFamily::Normal.from_params(&[0.0, 1.0]).unwrap();
        let data: Vec<f64> = (1..200)
            .map(|i| dist.ppf(i as f64 / 200.0).unwrap())
            .collect();
        let cfg = GofConfig {
            bins: 8,
            ..Default::default()
        };
        let result = chi_squared(&data, &dist, &cfg).unwrap();
        // 8 bins, 2 fitted params → df = 8 - 1 - 2 (all bins populated here)
        assert!((result.df.unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_chi_squared_input_errors() {
        let dist = DistributionFamily::Normal.from_params(&[0.0, 1.0]).unwrap();
        assert!(chi_squared(&[], &dist, &GofConfig::default()).is_err());
        assert!(chi_squared(&[1.0, 1.0], &dist, &GofConfig::default()).is_err());
        let cfg = GofConfig {
            bins: 1,
            ..Default::default()
        };
        assert!(chi_squared(&[1.0, 2.0, 3.0], &dist, &cfg).is_err());
    }
}
