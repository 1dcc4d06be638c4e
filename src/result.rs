//! Structured results returned by every test family.

use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of a goodness-of-fit or homogeneity test.
///
/// `extra` is an open diagnostic bag (sub-statistics, bounds, shift
/// estimates) consumed by presentation layers but not required for
/// correctness.
#[derive(Debug, Clone, Serialize)]
pub struct TestSummary {
    /// The test statistic.
    pub statistic: f64,
    /// Degrees of freedom, when the test has a notion of them.
    pub df: Option<f64>,
    /// Critical value at the configured significance level.
    pub critical_value: Option<f64>,
    /// Two-sided p-value (or exact-probability equivalent).
    pub p_value: f64,
    /// True when the test fails to reject the null hypothesis.
    pub h0_accepted: bool,
    /// Test-specific diagnostics.
    pub extra: BTreeMap<String, f64>,
}

impl TestSummary {
    /// Attach a diagnostic value under `key`.
    pub fn with_extra(mut self, key: &str, value: f64) -> Self {
        self.extra.insert(key.to_string(), value);
        self
    }
}

/// Outcome of a correlation significance test.
///
/// `interval` is populated only when the significance test rejects the
/// null of zero association; `None` therefore means "not computed", not
/// "no relationship".
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationOutcome {
    /// The correlation coefficient.
    pub coefficient: f64,
    /// The significance-test statistic (t or z, per coefficient).
    pub statistic: f64,
    /// Two-sided p-value of the significance test.
    pub p_value: f64,
    /// Whether the null of zero association was rejected at `alpha`.
    pub significant: bool,
    /// Significance level the test was run at.
    pub alpha: f64,
    /// Critical value of the test statistic, when closed-form.
    pub critical_value: Option<f64>,
    /// Confidence interval for the coefficient; only present when
    /// `significant` is true.
    pub interval: Option<(f64, f64)>,
    /// Coefficient-specific diagnostics.
    pub extra: BTreeMap<String, f64>,
}

/// Aggregate of one repeated-sampling experiment at a single sample size.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentSummary {
    /// Sample size the experiment ran at.
    pub size: usize,
    /// Number of repetitions aggregated.
    pub repeats: usize,
    /// Mean of the one-sample t statistic across repetitions.
    pub t_mean: f64,
    /// Variance of the t statistic across repetitions.
    pub t_var: f64,
    /// Student-t critical value for df = size - 1 at the configured alpha.
    pub t_crit: f64,
    /// Mean of each re-estimated parameter across repetitions.
    pub param_means: Vec<f64>,
    /// Variance of each re-estimated parameter across repetitions.
    pub param_vars: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(statistic: f64, p_value: f64, h0_accepted: bool) -> TestSummary {
        TestSummary {
            statistic,
            df: None,
            critical_value: None,
            p_value,
            h0_accepted,
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn test_summary_builder() {
        let s = summary(1.5, 0.13, true)
            .with_extra("df_num", 3.0)
            .with_extra("df_den", 12.0);
        assert!((s.statistic - 1.5).abs() < 1e-12);
        assert!(s.h0_accepted);
        assert_eq!(s.extra.len(), 2);
        assert!((s.extra["df_num"] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_summary_serializes() {
        let s = summary(2.0, 0.04, false).with_extra("bound", 1.96);
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"statistic\":2.0"));
        assert!(json.contains("\"bound\":1.96"));
    }
}
