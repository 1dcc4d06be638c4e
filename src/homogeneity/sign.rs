//! Paired sign test: counts positive differences, exact binomial for
//! small samples and a normal approximation otherwise.

use super::HomogeneityConfig;
use crate::continuous::special::{norm_cdf, norm_ppf};
use crate::error::{StatsError, StatsResult};
use crate::result::TestSummary;
use crate::sample;

/// Largest number of nonzero differences handled with the exact
/// binomial distribution.
const EXACT_LIMIT: usize = 15;

/// Sign test on paired samples of equal length.
///
/// Zero differences are discarded before counting. When H0 is rejected
/// the median difference is reported as a shift estimate under
/// `extra["shift"]`.
pub fn sign_test(x: &[f64], y: &[f64], config: &HomogeneityConfig) -> StatsResult<TestSummary> {
    sample::check_sample(x, "sign_test")?;
    sample::check_sample(y, "sign_test")?;
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            expected: x.len(),
            got: y.len(),
            context: "sign_test paired samples".to_string(),
        });
    }

    let diffs: Vec<f64> = x
        .iter()
        .zip(y.iter())
        .map(|(a, b)| a - b)
        .filter(|d| *d != 0.0)
        .collect();
    if diffs.len() < 2 {
        return Err(StatsError::InsufficientData {
            required: 2,
            got: diffs.len(),
            context: "sign_test nonzero differences".to_string(),
        });
    }

    let n = diffs.len();
    let m = diffs.iter().filter(|d| **d > 0.0).count();

    let (statistic, p_value, critical) = if n <= EXACT_LIMIT {
        let p = exact_two_sided(m, n)?;
        (m as f64, p, None)
    } else {
        let nf = n as f64;
        let z = (m as f64 - nf / 2.0) / (nf / 4.0).sqrt();
        let p = 2.0 * norm_cdf(-z.abs());
        (z, p, Some(norm_ppf(1.0 - config.alpha / 2.0)))
    };

    let h0_accepted = p_value > config.alpha;
    let mut summary = TestSummary {
        statistic,
        df: None,
        critical_value: critical,
        p_value,
        h0_accepted,
        extra: Default::default(),
    }
    .with_extra("positives", m as f64)
    .with_extra("nonzero", n as f64);

    if !h0_accepted {
        summary = summary.with_extra("shift", sample::median(&diffs));
    }
    Ok(summary)
}

/// Exact two-sided binomial p-value for `m` successes of `n` fair trials.
fn exact_two_sided(m: usize, n: usize) -> StatsResult<f64> {
    use statrs::distribution::{Binomial, DiscreteCDF};
    let dist = Binomial::new(0.5, n as u64).map_err(|e| StatsError::NumericalError {
        message: format!("binomial({}): {}", n, e),
    })?;
    let lower = dist.cdf(m as u64);
    let upper = if m == 0 {
        1.0
    } else {
        dist.sf((m - 1) as u64)
    };
    Ok((2.0 * lower.min(upper)).min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_signs_accept() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let y = [0.5, 2.5, 2.5, 4.5, 4.5, 6.5];
        let result = sign_test(&x, &y, &HomogeneityConfig::default()).unwrap();
        assert!(result.h0_accepted);
        assert!((result.extra["positives"] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_positive_rejects_with_shift() {
        let x: Vec<f64> = (0..12).map(|i| 10.0 + i as f64).collect();
        let y: Vec<f64> = (0..12).map(|i| i as f64).collect();
        let result = sign_test(&x, &y, &HomogeneityConfig::default()).unwrap();
        // P(all 12 same sign under p=0.5) = 2 * 0.5^12
        assert!(result.p_value < 0.001);
        assert!(!result.h0_accepted);
        assert!((result.extra["shift"] - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_differences_dropped() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [1.0, 2.0, 1.0, 2.0, 3.0];
        let result = sign_test(&x, &y, &HomogeneityConfig::default()).unwrap();
        assert!((result.extra["nonzero"] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_large_sample_uses_normal_approximation() {
        let x: Vec<f64> = (0..40).map(|i| i as f64 + 1.0).collect();
        let y: Vec<f64> = (0..40).map(|i| i as f64).collect();
        let result = sign_test(&x, &y, &HomogeneityConfig::default()).unwrap();
        // z = (40 - 20) / sqrt(10)
        assert!((result.statistic - 20.0 / 10.0f64.sqrt()).abs() < 1e-9);
        assert!(result.critical_value.is_some());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let x = [1.0, 2.0];
        let y = [1.0, 2.0, 3.0];
        assert!(sign_test(&x, &y, &HomogeneityConfig::default()).is_err());
    }
}
