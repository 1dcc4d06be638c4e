//! Descriptive helpers shared by every test: means, variances, ranks.
//!
//! A sample is a plain `&[f64]` of finite values; callers are expected to
//! have removed missing entries already. [`check_sample`] enforces that
//! contract loudly instead of letting NaNs poison a statistic downstream.

use crate::error::{StatsError, StatsResult};

/// Validate that a sample is non-empty and contains only finite values.
pub fn check_sample(x: &[f64], context: &str) -> StatsResult<()> {
    if x.is_empty() {
        return Err(StatsError::EmptyData {
            context: context.to_string(),
        });
    }
    if let Some(bad) = x.iter().find(|v| !v.is_finite()) {
        return Err(StatsError::NumericalError {
            message: format!("non-finite value {} in {}", bad, context),
        });
    }
    Ok(())
}

/// Validate a sample and require a minimum length.
pub fn check_min_len(x: &[f64], required: usize, context: &str) -> StatsResult<()> {
    check_sample(x, context)?;
    if x.len() < required {
        return Err(StatsError::InsufficientData {
            required,
            got: x.len(),
            context: context.to_string(),
        });
    }
    Ok(())
}

/// Arithmetic mean.
pub fn mean(x: &[f64]) -> f64 {
    x.iter().sum::<f64>() / x.len() as f64
}

/// Sample variance with `ddof` delta degrees of freedom (1 for the
/// unbiased estimator, 0 for the population variance).
pub fn variance(x: &[f64], ddof: usize) -> f64 {
    let n = x.len();
    debug_assert!(n > ddof);
    let m = mean(x);
    let ss: f64 = x.iter().map(|v| (v - m) * (v - m)).sum();
    ss / (n - ddof) as f64
}

/// Sample standard deviation (ddof = 1).
pub fn std_dev(x: &[f64]) -> f64 {
    variance(x, 1).sqrt()
}

/// Median of a sample (copies and sorts).
pub fn median(x: &[f64]) -> f64 {
    let mut sorted = x.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        0.5 * (sorted[n / 2 - 1] + sorted[n / 2])
    }
}

/// Assign 1-based midranks to a sample, averaging ranks over ties.
///
/// `midranks(&[10.0, 20.0, 20.0, 30.0])` yields `[1.0, 2.5, 2.5, 4.0]`.
pub fn midranks(x: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| x[a].partial_cmp(&x[b]).unwrap_or(std::cmp::Ordering::Equal));

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        // Walk the tie group [i, j)
        let mut j = i + 1;
        while j < n && x[order[j]] == x[order[i]] {
            j += 1;
        }
        let avg = (i + 1 + j) as f64 / 2.0;
        for &idx in &order[i..j] {
            ranks[idx] = avg;
        }
        i = j;
    }
    ranks
}

/// Midranks over the concatenation of several samples, returned per
/// sample. Used by the rank-based homogeneity tests.
pub fn pooled_midranks(samples: &[&[f64]]) -> Vec<Vec<f64>> {
    let pooled: Vec<f64> = samples.iter().flat_map(|s| s.iter().copied()).collect();
    let ranks = midranks(&pooled);
    let mut out = Vec::with_capacity(samples.len());
    let mut offset = 0;
    for s in samples {
        out.push(ranks[offset..offset + s.len()].to_vec());
        offset += s.len();
    }
    out
}

/// Sizes of the tie groups in a pooled sample (groups of size 1 included).
/// Feeds the Kruskal-Wallis tie correction.
pub fn tie_group_sizes(x: &[f64]) -> Vec<usize> {
    let mut sorted = x.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mut groups = Vec::new();
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        groups.push(j - i);
        i = j;
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_sample() {
        assert!(check_sample(&[1.0, 2.0], "test").is_ok());
        assert!(check_sample(&[], "test").is_err());
        assert!(check_sample(&[1.0, f64::NAN], "test").is_err());
        assert!(check_sample(&[f64::INFINITY], "test").is_err());
        assert!(check_min_len(&[1.0, 2.0], 3, "test").is_err());
        assert!(check_min_len(&[1.0, 2.0, 3.0], 3, "test").is_ok());
    }

    #[test]
    fn test_mean_variance() {
        let x = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&x) - 5.0).abs() < 1e-12);
        assert!((variance(&x, 0) - 4.0).abs() < 1e-12);
        assert!((variance(&x, 1) - 32.0 / 7.0).abs() < 1e-12);
        assert!((std_dev(&x) - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_median() {
        assert!((median(&[3.0, 1.0, 2.0]) - 2.0).abs() < 1e-12);
        assert!((median(&[4.0, 1.0, 2.0, 3.0]) - 2.5).abs() < 1e-12);
        assert!((median(&[5.0]) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_midranks_no_ties() {
        let r = midranks(&[30.0, 10.0, 20.0]);
        assert_eq!(r, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_midranks_with_ties() {
        let r = midranks(&[10.0, 20.0, 20.0, 30.0]);
        assert_eq!(r, vec![1.0, 2.5, 2.5, 4.0]);

        // All tied: everyone gets the average rank
        let r = midranks(&[7.0, 7.0, 7.0]);
        assert_eq!(r, vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_pooled_midranks() {
        let a = [1.0, 3.0];
        let b = [2.0, 4.0];
        let ranks = pooled_midranks(&[&a, &b]);
        assert_eq!(ranks[0], vec![1.0, 3.0]);
        assert_eq!(ranks[1], vec![2.0, 4.0]);
    }

    #[test]
    fn test_tie_group_sizes() {
        let g = tie_group_sizes(&[1.0, 2.0, 2.0, 2.0, 3.0, 3.0]);
        assert_eq!(g, vec![1, 3, 2]);
    }
}
