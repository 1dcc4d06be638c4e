//! Two-sample homogeneity test under a normality assumption: variance
//! equality by an F test, mean equality by a t test.

use super::ttest::{ttest_paired, ttest_pooled, ttest_welch};
use super::HomogeneityConfig;
use crate::error::{StatsError, StatsResult};
use crate::result::TestSummary;
use crate::sample;
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

/// Combined sample size up to which the pooled t-test is used for
/// independent data; above it the Welch form takes over.
const POOLED_SIZE_LIMIT: usize = 25;

/// Normal-homogeneity test on two samples.
///
/// Variances are compared with F = s₁²/s₂² and a two-sided p-value from
/// the F distribution; means with a paired t-test when the samples are
/// dependent, otherwise pooled (n₁+n₂ ≤ 25) or Welch t. H0 (same normal
/// population) is accepted only when both checks accept. The variance
/// check assumes independence, so with dependent data only the mean
/// check is meaningful; both sub-results are reported in `extra`.
pub fn normal_homogeneity(
    x: &[f64],
    y: &[f64],
    config: &HomogeneityConfig,
) -> StatsResult<TestSummary> {
    sample::check_min_len(x, 2, "normal_homogeneity")?;
    sample::check_min_len(y, 2, "normal_homogeneity")?;

    let v1 = sample::variance(x, 1).max(1e-12);
    let v2 = sample::variance(y, 1).max(1e-12);
    let df1 = (x.len() - 1) as f64;
    let df2 = (y.len() - 1) as f64;

    let f_stat = v1 / v2;
    let f_dist = FisherSnedecor::new(df1, df2).map_err(|e| StatsError::NumericalError {
        message: format!("F distribution ({}, {}): {}", df1, df2, e),
    })?;
    let cdf = f_dist.cdf(f_stat);
    let f_p = (2.0 * cdf.min(1.0 - cdf)).min(1.0);

    let t = if config.is_independent {
        if x.len() + y.len() <= POOLED_SIZE_LIMIT {
            ttest_pooled(x, y)?
        } else {
            ttest_welch(x, y)?
        }
    } else {
        ttest_paired(x, y)?
    };

    let variances_equal = f_p > config.alpha;
    let means_equal = t.p_value > config.alpha;
    let h0_accepted = variances_equal && means_equal;

    // Headline fields carry the mean check; the variance check rides in extra
    Ok(TestSummary {
        statistic: t.statistic,
        df: Some(t.df),
        critical_value: None,
        p_value: t.p_value,
        h0_accepted,
        extra: Default::default(),
    }
    .with_extra("f_statistic", f_stat)
    .with_extra("f_p_value", f_p)
    .with_extra("f_df_num", df1)
    .with_extra("f_df_den", df2)
    .with_extra("variances_equal", if variances_equal { 1.0 } else { 0.0 })
    .with_extra("means_equal", if means_equal { 1.0 } else { 0.0 }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_population_accepts() {
        let x = [5.1, 4.9, 5.3, 5.0, 4.8, 5.2, 5.1, 4.7];
        let y = [5.0, 5.2, 4.9, 5.1, 4.8, 5.3, 4.9, 5.0];
        let result = normal_homogeneity(&x, &y, &HomogeneityConfig::default()).unwrap();
        assert!(result.h0_accepted);
        assert!(result.extra["variances_equal"] > 0.5);
        assert!(result.extra["means_equal"] > 0.5);
    }

    #[test]
    fn test_shifted_means_reject() {
        let x = [1.0, 1.2, 0.9, 1.1, 1.0, 0.8, 1.1, 1.05];
        let y = [5.0, 5.2, 4.9, 5.1, 5.0, 4.8, 5.1, 5.05];
        let result = normal_homogeneity(&x, &y, &HomogeneityConfig::default()).unwrap();
        assert!(!result.h0_accepted);
        assert!(result.extra["means_equal"] < 0.5);
        // Same spread, different location: variance check still accepts
        assert!(result.extra["variances_equal"] > 0.5);
    }

    #[test]
    fn test_unequal_variances_reject() {
        let x = [0.0, 0.1, -0.1, 0.05, -0.05, 0.02, -0.02, 0.08, -0.08, 0.01];
        let y = [0.0, 10.0, -10.0, 5.0, -5.0, 2.0, -2.0, 8.0, -8.0, 1.0];
        let result = normal_homogeneity(&x, &y, &HomogeneityConfig::default()).unwrap();
        assert!(!result.h0_accepted);
        assert!(result.extra["variances_equal"] < 0.5);
    }

    #[test]
    fn test_dependent_uses_paired_t() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [1.1, 2.1, 3.1, 4.1, 5.1];
        let cfg = HomogeneityConfig {
            is_independent: false,
            ..Default::default()
        };
        let result = normal_homogeneity(&x, &y, &cfg).unwrap();
        // Paired differences are constant -0.1: df is n-1 = 4
        assert!((result.df.unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_large_samples_take_welch_path() {
        let x: Vec<f64> = (0..20).map(|i| i as f64 * 0.1).collect();
        let y: Vec<f64> = (0..20).map(|i| 0.05 + i as f64 * 0.1).collect();
        let result = normal_homogeneity(&x, &y, &HomogeneityConfig::default()).unwrap();
        // Welch df is fractional in general but bounded by n1+n2-2
        assert!(result.df.unwrap() <= 38.0);
    }
}
