//! k-sample homogeneity tests: one-way ANOVA, Bartlett's variance test,
//! Cochran's Q for binary outcomes and the Kruskal-Wallis rank test.

use super::HomogeneityConfig;
use crate::error::{StatsError, StatsResult};
use crate::result::TestSummary;
use crate::sample;
use statrs::distribution::{ChiSquared, ContinuousCDF, FisherSnedecor};

fn chi2_right_tail(statistic: f64, df: f64, alpha: f64) -> StatsResult<(f64, f64)> {
    let dist = ChiSquared::new(df).map_err(|e| StatsError::NumericalError {
        message: format!("chi-squared({}): {}", df, e),
    })?;
    Ok((dist.sf(statistic), dist.inverse_cdf(1.0 - alpha)))
}

fn check_groups(samples: &[&[f64]], min_len: usize, context: &str) -> StatsResult<()> {
    if samples.len() < 3 {
        return Err(StatsError::SampleCount {
            required: "at least 3".to_string(),
            got: samples.len(),
            context: context.to_string(),
        });
    }
    for s in samples {
        sample::check_min_len(s, min_len, context)?;
    }
    Ok(())
}

/// One-way analysis of variance.
///
/// F = (SSB / (k-1)) / (SSW / (N-k)), right-tailed.
pub fn anova(samples: &[&[f64]], config: &HomogeneityConfig) -> StatsResult<TestSummary> {
    check_groups(samples, 2, "anova")?;

    let k = samples.len() as f64;
    let n_total: usize = samples.iter().map(|s| s.len()).sum();
    let grand_mean =
        samples.iter().flat_map(|s| s.iter()).sum::<f64>() / n_total as f64;

    let mut ssb = 0.0;
    let mut ssw = 0.0;
    for s in samples {
        let m = sample::mean(s);
        ssb += s.len() as f64 * (m - grand_mean).powi(2);
        ssw += s.iter().map(|v| (v - m).powi(2)).sum::<f64>();
    }

    let df_num = k - 1.0;
    let df_den = n_total as f64 - k;
    let f_stat = (ssb / df_num) / (ssw / df_den).max(1e-12);

    let dist = FisherSnedecor::new(df_num, df_den).map_err(|e| StatsError::NumericalError {
        message: format!("F distribution ({}, {}): {}", df_num, df_den, e),
    })?;
    let p_value = dist.sf(f_stat);
    let critical = dist.inverse_cdf(1.0 - config.alpha);

    Ok(TestSummary {
        statistic: f_stat,
        df: Some(df_num),
        critical_value: Some(critical),
        p_value,
        h0_accepted: f_stat <= critical,
        extra: Default::default(),
    }
    .with_extra("df_den", df_den)
    .with_extra("ss_between", ssb)
    .with_extra("ss_within", ssw))
}

/// Bartlett's test of equal variances across k groups.
pub fn bartlett(samples: &[&[f64]], config: &HomogeneityConfig) -> StatsResult<TestSummary> {
    check_groups(samples, 2, "bartlett")?;

    let k = samples.len() as f64;
    let n_total: usize = samples.iter().map(|s| s.len()).sum();
    let df_pooled = n_total as f64 - k;

    let mut pooled_var = 0.0;
    let mut log_sum = 0.0;
    let mut inv_df_sum = 0.0;
    for s in samples {
        let df = (s.len() - 1) as f64;
        let v = sample::variance(s, 1).max(1e-12);
        pooled_var += df * v;
        log_sum += df * v.ln();
        inv_df_sum += 1.0 / df;
    }
    pooled_var /= df_pooled;

    let correction = 1.0 + (inv_df_sum - 1.0 / df_pooled) / (3.0 * (k - 1.0));
    let statistic = (df_pooled * pooled_var.ln() - log_sum) / correction;

    let df = k - 1.0;
    let (p_value, critical) = chi2_right_tail(statistic, df, config.alpha)?;

    Ok(TestSummary {
        statistic,
        df: Some(df),
        critical_value: Some(critical),
        p_value,
        h0_accepted: statistic <= critical,
        extra: Default::default(),
    }
    .with_extra("pooled_variance", pooled_var))
}

/// Cochran's Q test on k matched samples of binary outcomes.
///
/// Every entry must be exactly 0 or 1 and all samples must share the
/// same length (one row per subject).
pub fn cochran_q(samples: &[&[f64]], config: &HomogeneityConfig) -> StatsResult<TestSummary> {
    check_groups(samples, 2, "cochran_q")?;

    let rows = samples[0].len();
    for s in samples.iter().skip(1) {
        if s.len() != rows {
            return Err(StatsError::LengthMismatch {
                expected: rows,
                got: s.len(),
                context: "cochran_q matched samples".to_string(),
            });
        }
    }
    for s in samples {
        if s.iter().any(|v| *v != 0.0 && *v != 1.0) {
            return Err(StatsError::InvalidParameter {
                name: "samples".to_string(),
                value: f64::NAN,
                reason: "cochran_q requires binary (0/1) outcomes".to_string(),
            });
        }
    }

    let k = samples.len() as f64;
    let col_totals: Vec<f64> = samples.iter().map(|s| s.iter().sum()).collect();
    let row_totals: Vec<f64> = (0..rows)
        .map(|i| samples.iter().map(|s| s[i]).sum())
        .collect();

    let grand: f64 = col_totals.iter().sum();
    let col_mean = grand / k;
    let num: f64 = col_totals.iter().map(|g| (g - col_mean).powi(2)).sum();
    let den = k * grand - row_totals.iter().map(|l| l * l).sum::<f64>();
    if den <= 0.0 {
        return Err(StatsError::NumericalError {
            message: "cochran_q: degenerate table (all rows constant)".to_string(),
        });
    }

    let statistic = k * (k - 1.0) * num / den;
    let df = k - 1.0;
    let (p_value, critical) = chi2_right_tail(statistic, df, config.alpha)?;

    Ok(TestSummary {
        statistic,
        df: Some(df),
        critical_value: Some(critical),
        p_value,
        h0_accepted: statistic <= critical,
        extra: Default::default(),
    })
}

/// Kruskal-Wallis rank test on k independent samples, with the usual
/// tie correction.
pub fn kruskal_wallis(samples: &[&[f64]], config: &HomogeneityConfig) -> StatsResult<TestSummary> {
    check_groups(samples, 2, "kruskal_wallis")?;

    let ranks = sample::pooled_midranks(samples);
    let n_total: usize = samples.iter().map(|s| s.len()).sum();
    let nf = n_total as f64;

    let mut h = 0.0;
    for (s, r) in samples.iter().zip(ranks.iter()) {
        let rank_sum: f64 = r.iter().sum();
        h += rank_sum * rank_sum / s.len() as f64;
    }
    h = 12.0 / (nf * (nf + 1.0)) * h - 3.0 * (nf + 1.0);

    // Tie correction over the pooled sample
    let pooled: Vec<f64> = samples.iter().flat_map(|s| s.iter().copied()).collect();
    let tie_sum: f64 = sample::tie_group_sizes(&pooled)
        .into_iter()
        .map(|t| {
            let t = t as f64;
            t * t * t - t
        })
        .sum();
    let correction = 1.0 - tie_sum / (nf * nf * nf - nf);
    if correction > 0.0 {
        h /= correction;
    }

    let df = samples.len() as f64 - 1.0;
    let (p_value, critical) = chi2_right_tail(h, df, config.alpha)?;

    Ok(TestSummary {
        statistic: h,
        df: Some(df),
        critical_value: Some(critical),
        p_value,
        h0_accepted: h <= critical,
        extra: Default::default(),
    })
}
