//! Correlation coefficients over paired columns: Pearson, Spearman,
//! Kendall tau-b and the correlation ratio, each with a significance
//! test and, on rejection, a confidence interval.

pub(crate) mod kendall;
pub(crate) mod pearson;
pub(crate) mod ratio;
pub(crate) mod spearman;

pub use kendall::kendall;
pub use pearson::pearson;
pub use ratio::correlation_ratio;
pub use spearman::spearman;

use crate::error::{StatsError, StatsResult};
use crate::result::CorrelationOutcome;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration shared by all correlation tests.
#[derive(Debug, Clone, Copy)]
pub struct CorrelationConfig {
    /// Significance level of the zero-association test.
    pub alpha: f64,
    /// Coverage of the confidence interval.
    pub confidence: f64,
    /// Resamples drawn by bootstrap intervals.
    pub bootstrap_iterations: usize,
    /// Seed for the bootstrap; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            confidence: 0.95,
            bootstrap_iterations: 1000,
            seed: None,
        }
    }
}

/// Percentile bootstrap interval for a paired-column statistic.
///
/// Resamples (x, y) pairs with replacement and takes the empirical
/// (1 ± confidence)/2 quantiles of the recomputed statistic.
pub(crate) fn bootstrap_interval(
    x: &[f64],
    y: &[f64],
    config: &CorrelationConfig,
    stat: fn(&[f64], &[f64]) -> f64,
) -> (f64, f64) {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let n = x.len();
    let iters = config.bootstrap_iterations.max(2);

    let mut estimates = Vec::with_capacity(iters);
    let mut rx = vec![0.0; n];
    let mut ry = vec![0.0; n];
    for _ in 0..iters {
        for slot in 0..n {
            let pick = rng.gen_range(0..n);
            rx[slot] = x[pick];
            ry[slot] = y[pick];
        }
        estimates.push(stat(&rx, &ry));
    }
    estimates.sort_by(|a, b| a.total_cmp(b));

    let tail = (1.0 - config.confidence) / 2.0;
    let idx = |q: f64| -> usize {
        let pos = q * (iters - 1) as f64;
        pos.round() as usize
    };
    (estimates[idx(tail)], estimates[idx(1.0 - tail)])
}

/// The closed set of correlation coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationKind {
    Pearson,
    Spearman,
    Kendall,
    CorrelationRatio,
}

impl CorrelationKind {
    /// Every coefficient, in registry order.
    pub const ALL: [CorrelationKind; 4] = [
        CorrelationKind::Pearson,
        CorrelationKind::Spearman,
        CorrelationKind::Kendall,
        CorrelationKind::CorrelationRatio,
    ];

    /// Registry name of the coefficient.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pearson => "pearson",
            Self::Spearman => "spearman",
            Self::Kendall => "kendall",
            Self::CorrelationRatio => "correlation_ratio",
        }
    }

    /// Look a coefficient up by its registry name.
    pub fn from_name(name: &str) -> StatsResult<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| StatsError::UnknownName {
                name: name.to_string(),
                family: "correlation coefficient".to_string(),
            })
    }

    /// Compute the coefficient and its significance test on paired
    /// columns.
    pub fn run(
        &self,
        x: &[f64],
        y: &[f64],
        config: &CorrelationConfig,
    ) -> StatsResult<CorrelationOutcome> {
        match self {
            Self::Pearson => pearson(x, y, config),
            Self::Spearman => spearman(x, y, config),
            Self::Kendall => kendall(x, y, config),
            Self::CorrelationRatio => correlation_ratio(x, y, config),
        }
    }
}
