//! Pearson chi-squared goodness-of-fit test against a bivariate normal.

use super::chi_squared::EXPECTED_FLOOR;
use super::GofConfig;
use crate::continuous::special::bivariate_norm_cdf;
use crate::error::{StatsError, StatsResult};
use crate::result::TestSummary;
use crate::sample;
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Standardized coordinate used in place of ±∞ at the outer grid edges;
/// the normal CDF saturates well before this.
const EDGE_CLAMP: f64 = 8.0;

/// Bivariate-normal chi-squared test over exactly two equal-length
/// numeric columns.
///
/// The bivariate normal is fitted by the sample mean vector, standard
/// deviations and correlation; expected cell frequencies over a
/// bins×bins grid come from differencing the bivariate CDF at the cell
/// corners. Degrees of freedom are unmasked cells - 1 - 3 (two means and
/// one covariance term estimated), floored at 1.
pub fn chi_squared_2d(x: &[f64], y: &[f64], config: &GofConfig) -> StatsResult<TestSummary> {
    sample::check_min_len(x, 3, "chi_squared_2d")?;
    sample::check_min_len(y, 3, "chi_squared_2d")?;
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            expected: x.len(),
            got: y.len(),
            context: "chi_squared_2d".to_string(),
        });
    }
    if config.bins < 2 {
        return Err(StatsError::InvalidParameter {
            name: "bins".to_string(),
            value: config.bins as f64,
            reason: "need at least 2 classes".to_string(),
        });
    }

    let n = x.len();
    let bins = config.bins;

    let mx = sample::mean(x);
    let my = sample::mean(y);
    let sx = sample::std_dev(x);
    let sy = sample::std_dev(y);
    if sx < 1e-12 || sy < 1e-12 {
        return Err(StatsError::NumericalError {
            message: "chi_squared_2d: a column has zero variance".to_string(),
        });
    }
    let rho = {
        let mut num = 0.0;
        for (&a, &b) in x.iter().zip(y.iter()) {
            num += (a - mx) * (b - my);
        }
        (num / (n as f64 - 1.0) / (sx * sy)).clamp(-1.0, 1.0)
    };

    let min_x = x.iter().copied().fold(f64::INFINITY, f64::min);
    let max_x = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min_y = y.iter().copied().fold(f64::INFINITY, f64::min);
    let max_y = y.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width_x = (max_x - min_x) / bins as f64;
    let width_y = (max_y - min_y) / bins as f64;
    if width_x <= 0.0 || width_y <= 0.0 {
        return Err(StatsError::NumericalError {
            message: "chi_squared_2d: a column has zero range".to_string(),
        });
    }

    let mut observed = vec![0.0_f64; bins * bins];
    for (&a, &b) in x.iter().zip(y.iter()) {
        let i = (((a - min_x) / width_x) as usize).min(bins - 1);
        let j = (((b - min_y) / width_y) as usize).min(bins - 1);
        observed[i * bins + j] += 1.0;
    }

    // Standardized grid edges; outer edges pushed to the saturated tails
    let edge = |idx: usize, min: f64, width: f64, m: f64, s: f64, last: usize| -> f64 {
        if idx == 0 {
            -EDGE_CLAMP
        } else if idx == last {
            EDGE_CLAMP
        } else {
            ((min + idx as f64 * width) - m) / s
        }
    };

    let mut statistic = 0.0;
    let mut unmasked = 0usize;
    for i in 0..bins {
        let x_lo = edge(i, min_x, width_x, mx, sx, bins);
        let x_hi = edge(i + 1, min_x, width_x, mx, sx, bins);
        for j in 0..bins {
            let y_lo = edge(j, min_y, width_y, my, sy, bins);
            let y_hi = edge(j + 1, min_y, width_y, my, sy, bins);

            let p = bivariate_norm_cdf(x_hi, y_hi, rho) - bivariate_norm_cdf(x_lo, y_hi, rho)
                - bivariate_norm_cdf(x_hi, y_lo, rho)
                + bivariate_norm_cdf(x_lo, y_lo, rho);
            let e = n as f64 * p.max(0.0);
            if e > EXPECTED_FLOOR {
                let o = observed[i * bins + j];
                statistic += (o - e) * (o - e) / e;
                unmasked += 1;
            }
        }
    }

    // Two means and one covariance term estimated
    let df = (unmasked as f64 - 1.0 - 3.0).max(1.0);
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
    .with_extra("mean_x", mx)
    .with_extra("mean_y", my)
    .with_extra("corr", rho)
    .with_extra("cells_used", unmasked as f64))
}
