//! Student-t machinery shared by the mean-equality checks and the
//! simulation engine.

use crate::error::{StatsError, StatsResult};
use crate::sample;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// A t statistic with its degrees of freedom and two-sided p-value.
#[derive(Debug, Clone, Copy)]
pub struct TTest {
    pub statistic: f64,
    pub df: f64,
    pub p_value: f64,
}

fn student_t(df: f64) -> StatsResult<StudentsT> {
    StudentsT::new(0.0, 1.0, df).map_err(|e| StatsError::NumericalError {
        message: format!("t distribution with df {}: {}", df, e),
    })
}

fn two_sided_p(t: f64, df: f64) -> StatsResult<f64> {
    let dist = student_t(df)?;
    Ok(2.0 * (1.0 - dist.cdf(t.abs())))
}

/// Two-sided Student-t critical value t* with P(|T| > t*) = alpha.
pub fn t_critical_two_sided(alpha: f64, df: f64) -> StatsResult<f64> {
    let dist = student_t(df)?;
    Ok(dist.inverse_cdf(1.0 - alpha / 2.0))
}

/// One-sample t-test of the mean of `x` against `popmean`.
///
/// t = (x̄ - μ₀) / (s / √n), df = n - 1.
pub fn ttest_one_sample(x: &[f64], popmean: f64) -> StatsResult<TTest> {
    sample::check_min_len(x, 2, "one-sample t-test")?;
    let n = x.len() as f64;
    let mean = sample::mean(x);
    let sd = sample::std_dev(x).max(1e-12);
    let statistic = (mean - popmean) / (sd / n.sqrt());
    let df = n - 1.0;
    Ok(TTest {
        statistic,
        df,
        p_value: two_sided_p(statistic, df)?,
    })
}

/// Paired t-test: one-sample test on the differences.
pub fn ttest_paired(x: &[f64], y: &[f64]) -> StatsResult<TTest> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            expected: x.len(),
            got: y.len(),
            context: "paired t-test".to_string(),
        });
    }
    let diff: Vec<f64> = x.iter().zip(y.iter()).map(|(a, b)| a - b).collect();
    ttest_one_sample(&diff, 0.0)
}

/// Pooled-variance two-sample t-test (equal variances assumed).
pub fn ttest_pooled(x: &[f64], y: &[f64]) -> StatsResult<TTest> {
    sample::check_min_len(x, 2, "pooled t-test")?;
    sample::check_min_len(y, 2, "pooled t-test")?;
    let n1 = x.len() as f64;
    let n2 = y.len() as f64;
    let v1 = sample::variance(x, 1);
    let v2 = sample::variance(y, 1);

    let pooled = ((n1 - 1.0) * v1 + (n2 - 1.0) * v2) / (n1 + n2 - 2.0);
    let se = (pooled * (1.0 / n1 + 1.0 / n2)).sqrt().max(1e-12);
    let statistic = (sample::mean(x) - sample::mean(y)) / se;
    let df = n1 + n2 - 2.0;
    Ok(TTest {
        statistic,
        df,
        p_value: two_sided_p(statistic, df)?,
    })
}

/// Welch two-sample t-test (unequal variances), with the
/// Welch-Satterthwaite degrees of freedom.
pub fn ttest_welch(x: &[f64], y: &[f64]) -> StatsResult<TTest> {
    sample::check_min_len(x, 2, "Welch t-test")?;
    sample::check_min_len(y, 2, "Welch t-test")?;
    let n1 = x.len() as f64;
    let n2 = y.len() as f64;
    let v1 = sample::variance(x, 1);
    let v2 = sample::variance(y, 1);

    let se = (v1 / n1 + v2 / n2).sqrt().max(1e-12);
    let statistic = (sample::mean(x) - sample::mean(y)) / se;

    let num = (v1 / n1 + v2 / n2).powi(2);
    let denom = (v1 / n1).powi(2) / (n1 - 1.0) + (v2 / n2).powi(2) / (n2 - 1.0);
    let df = (num / denom.max(1e-300)).max(1.0);
    Ok(TTest {
        statistic,
        df,
        p_value: two_sided_p(statistic, df)?,
    })
}
