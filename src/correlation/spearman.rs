//! Spearman rank correlation: Pearson on midranks, Student-t
//! significance approximation, percentile-bootstrap interval.

use super::{bootstrap_interval, pearson::check_pair, pearson::t_significance, CorrelationConfig};
use crate::error::StatsResult;
use crate::result::CorrelationOutcome;
use crate::sample;

pub(super) fn coefficient(x: &[f64], y: &[f64]) -> f64 {
    let rx = sample::midranks(x);
    let ry = sample::midranks(y);
    super::pearson::coefficient(&rx, &ry)
}

/// Spearman rank correlation of paired columns.
///
/// Significance uses the t approximation with n - 2 degrees of freedom;
/// when it rejects, a percentile bootstrap over resampled pairs supplies
/// the confidence interval.
pub fn spearman(
    x: &[f64],
    y: &[f64],
    config: &CorrelationConfig,
) -> StatsResult<CorrelationOutcome> {
    check_pair(x, y, "spearman")?;

    let rho = coefficient(x, y);
    let (t, p_value, critical) = t_significance(rho, x.len(), config.alpha)?;
    let significant = p_value <= config.alpha;

    let interval = if significant {
        Some(bootstrap_interval(x, y, config, coefficient))
    } else {
        None
    };

    Ok(CorrelationOutcome {
        coefficient: rho,
        statistic: t,
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
    fn test_monotone_nonlinear_relation_is_perfect() {
        let x: [f64; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let y: Vec<f64> = x.iter().map(|v| v.exp()).collect();
        let result = spearman(&x, &y, &CorrelationConfig::default()).unwrap();
        assert!((result.coefficient - 1.0).abs() < 1e-9);
        assert!(result.significant);
    }

    #[test]
    fn test_reversed_order_is_minus_one() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [9.0, 7.0, 5.0, 3.0, 1.0];
        let result = spearman(&x, &y, &CorrelationConfig::default()).unwrap();
        assert!((result.coefficient + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_bootstrap_interval_brackets_estimate() {
        let x: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| v + (v * 7.3).sin()).collect();
        let config = CorrelationConfig {
            seed: Some(7),
            ..CorrelationConfig::default()
        };
        let result = spearman(&x, &y, &config).unwrap();
        assert!(result.significant);
        let (lo, hi) = result.interval.unwrap();
        assert!(lo <= hi);
        assert!(hi <= 1.0 + 1e-9);
    }

    #[test]
    fn test_seeded_bootstrap_is_reproducible() {
        let x: Vec<f64> = (0..25).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| 3.0 * v + 1.0).collect();
        let config = CorrelationConfig {
            seed: Some(42),
            ..CorrelationConfig::default()
        };
        let a = spearman(&x, &y, &config).unwrap();
        let b = spearman(&x, &y, &config).unwrap();
        assert_eq!(a.interval, b.interval);
    }
}
