//! Kendall tau-b rank correlation with a normal-approximation
//! significance test and asymptotic confidence interval.

use super::{pearson::check_pair, CorrelationConfig};
use crate::continuous::special::{norm_cdf, norm_ppf};
use crate::error::StatsResult;
use crate::result::CorrelationOutcome;
use crate::sample;

/// Tau-b: concordant minus discordant pairs, normalized with tie
/// corrections in both columns.
pub(super) fn coefficient(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len();
    let mut concordant = 0i64;
    let mut discordant = 0i64;
    for i in 0..n {
        for j in (i + 1)..n {
            let product = (x[j] - x[i]) * (y[j] - y[i]);
            if product > 0.0 {
                concordant += 1;
            } else if product < 0.0 {
                discordant += 1;
            }
        }
    }

    let tie_pairs = |v: &[f64]| -> f64 {
        sample::tie_group_sizes(v)
            .into_iter()
            .map(|t| (t * (t - 1) / 2) as f64)
            .sum()
    };
    let n0 = (n * (n - 1) / 2) as f64;
    let n1 = tie_pairs(x);
    let n2 = tie_pairs(y);
    let denom = ((n0 - n1) * (n0 - n2)).sqrt().max(1e-12);
    (concordant - discordant) as f64 / denom
}

/// Kendall tau-b correlation of paired columns.
///
/// z = 3τ√(n(n-1)) / √(2(2n+5)); the interval is the asymptotic
/// τ ± z·√(2(2n+5)/(9n(n-1))), clamped to [-1, 1], attached only on
/// rejection.
pub fn kendall(x: &[f64], y: &[f64], config: &CorrelationConfig) -> StatsResult<CorrelationOutcome> {
    check_pair(x, y, "kendall")?;

    let tau = coefficient(x, y);
    let n = x.len() as f64;
    let z = 3.0 * tau * (n * (n - 1.0)).sqrt() / (2.0 * (2.0 * n + 5.0)).sqrt();
    let p_value = 2.0 * norm_cdf(-z.abs());
    let critical = norm_ppf(1.0 - config.alpha / 2.0);
    let significant = p_value <= config.alpha;

    let interval = if significant {
        let se = (2.0 * (2.0 * n + 5.0) / (9.0 * n * (n - 1.0))).sqrt();
        let spread = norm_ppf((1.0 + config.confidence) / 2.0) * se;
        Some((
            (tau - spread).clamp(-1.0, 1.0),
            (tau + spread).clamp(-1.0, 1.0),
        ))
    } else {
        None
    };

    Ok(CorrelationOutcome {
        coefficient: tau,
        statistic: z,
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
    fn test_monotone_series_is_plus_one() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let y: Vec<f64> = x.iter().map(|v| v * v).collect();
        let result = kendall(&x, &y, &CorrelationConfig::default()).unwrap();
        assert!((result.coefficient - 1.0).abs() < 1e-9);
        assert!(result.significant);
        let (lo, hi) = result.interval.unwrap();
        assert!(hi <= 1.0 && lo <= result.coefficient);
    }

    #[test]
    fn test_ties_shrink_tau_magnitude() {
        let x = [1.0, 1.0, 2.0, 2.0, 3.0, 3.0];
        let y = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let result = kendall(&x, &y, &CorrelationConfig::default()).unwrap();
        assert!(result.coefficient > 0.8);
        assert!(result.coefficient < 1.0);
    }

    #[test]
    fn test_independent_columns_not_significant() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let y = [2.0, 1.0, 4.0, 3.0, 6.0, 5.0];
        let result = kendall(&x, &y, &CorrelationConfig::default()).unwrap();
        // tau = (C - D)/n0 = (12 - 3)/15, below the rejection bound
        assert!(result.coefficient < 0.7);
    }
}
