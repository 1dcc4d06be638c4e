//! Correlation ratio η: strength of association between a categorical
//! column and a numeric one, with an F significance test.

use super::{bootstrap_interval, pearson::check_pair, CorrelationConfig};
use crate::error::{StatsError, StatsResult};
use crate::result::CorrelationOutcome;
use crate::sample;
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

/// Group `y` by the distinct values of `x`.
fn group_by_level(x: &[f64], y: &[f64]) -> Vec<Vec<f64>> {
    let mut order: Vec<usize> = (0..x.len()).collect();
    order.sort_by(|&a, &b| x[a].total_cmp(&x[b]));

    let mut groups: Vec<Vec<f64>> = Vec::new();
    let mut current_level = f64::NAN;
    for idx in order {
        if groups.is_empty() || x[idx] != current_level {
            current_level = x[idx];
            groups.push(Vec::new());
        }
        if let Some(last) = groups.last_mut() {
            last.push(y[idx]);
        }
    }
    groups
}

/// η = √(SSB / SST) over the grouping induced by distinct x levels.
pub(super) fn coefficient(x: &[f64], y: &[f64]) -> f64 {
    let groups = group_by_level(x, y);
    let grand_mean = sample::mean(y);
    let sst: f64 = y.iter().map(|v| (v - grand_mean).powi(2)).sum();
    if sst <= 1e-12 {
        return 0.0;
    }
    let ssb: f64 = groups
        .iter()
        .map(|g| g.len() as f64 * (sample::mean(g) - grand_mean).powi(2))
        .sum();
    (ssb / sst).clamp(0.0, 1.0).sqrt()
}

/// Correlation ratio of a categorical x column against numeric y.
///
/// Significance comes from F = (η²/(k-1)) / ((1-η²)/(N-k)); the
/// confidence interval, attached only on rejection, is a percentile
/// bootstrap over resampled pairs.
pub fn correlation_ratio(
    x: &[f64],
    y: &[f64],
    config: &CorrelationConfig,
) -> StatsResult<CorrelationOutcome> {
    check_pair(x, y, "correlation_ratio")?;

    let k = group_by_level(x, y).len();
    if k < 2 || k == x.len() {
        return Err(StatsError::InvalidParameter {
            name: "x".to_string(),
            value: k as f64,
            reason: "correlation_ratio needs 2 <= levels < n".to_string(),
        });
    }

    let eta = coefficient(x, y);
    let df_num = (k - 1) as f64;
    let df_den = (x.len() - k) as f64;
    let eta2 = eta * eta;
    let f_stat = (eta2 / df_num) / ((1.0 - eta2).max(1e-12) / df_den);

    let dist = FisherSnedecor::new(df_num, df_den).map_err(|e| StatsError::NumericalError {
        message: format!("F distribution ({}, {}): {}", df_num, df_den, e),
    })?;
    let p_value = dist.sf(f_stat);
    let critical = dist.inverse_cdf(1.0 - config.alpha);
    let significant = f_stat > critical;

    let interval = if significant {
        Some(bootstrap_interval(x, y, config, coefficient))
    } else {
        None
    };

    Ok(CorrelationOutcome {
        coefficient: eta,
        statistic: f_stat,
        p_value,
        significant,
        alpha: config.alpha,
        critical_value: Some(critical),
        interval,
        extra: Default::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_fully_determine_y() {
        // y depends only on the level: eta = 1
        let x = [1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0];
        let y = [5.0, 5.0, 5.0, 9.0, 9.0, 9.0, 2.0, 2.0, 2.0];
        let eta = coefficient(&x, &y);
        assert!((eta - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_strong_grouping_is_significant() {
        let x = [1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0, 3.0];
        let y = [
            5.0, 5.1, 4.9, 5.2, 19.0, 19.1, 18.9, 19.2, 2.0, 2.1, 1.9, 2.2,
        ];
        let config = CorrelationConfig {
            seed: Some(1),
            ..CorrelationConfig::default()
        };
        let result = correlation_ratio(&x, &y, &config).unwrap();
        assert!(result.coefficient > 0.99);
        assert!(result.significant);
        let (lo, hi) = result.interval.unwrap();
        assert!(lo <= hi && hi <= 1.0 + 1e-9);
    }

    #[test]
    fn test_level_independent_y_not_significant() {
        let x = [1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0];
        let y = [1.0, 5.0, 9.0, 1.0, 5.0, 9.0, 1.0, 5.0, 9.0];
        let result = correlation_ratio(&x, &y, &CorrelationConfig::default()).unwrap();
        assert!(result.coefficient < 1e-9);
        assert!(!result.significant);
        assert!(result.interval.is_none());
    }

    #[test]
    fn test_degenerate_levels_rejected() {
        // One level per observation leaves no within-group variation
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 1.0, 5.0, 3.0];
        assert!(correlation_ratio(&x, &y, &CorrelationConfig::default()).is_err());
        // A single level carries no between-group information
        let x = [1.0; 5];
        assert!(correlation_ratio(&x, &y, &CorrelationConfig::default()).is_err());
    }
}
