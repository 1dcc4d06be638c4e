//! Goodness-of-fit tests: does a sample follow a given distribution?

mod chi_squared;
mod chi_squared_2d;
mod kolmogorov;
mod ks;

pub use chi_squared::chi_squared;
pub use chi_squared_2d::chi_squared_2d;
pub use kolmogorov::{kolmogorov_cdf, kolmogorov_critical_value};
pub use ks::kolmogorov_smirnov;

use crate::distribution::DistributionFamily;
use crate::error::{StatsError, StatsResult};
use crate::result::TestSummary;

/// Configuration for goodness-of-fit tests.
#[derive(Debug, Clone, Copy)]
pub struct GofConfig {
    /// Significance level.
    pub alpha: f64,
    /// Number of classes for the chi-squared variants.
    pub bins: usize,
}

impl Default for GofConfig {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            bins: 10,
        }
    }
}

/// The closed set of goodness-of-fit tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GofTest {
    KolmogorovSmirnov,
    ChiSquared,
    /// Bivariate-normal variant; requires exactly two columns and fits
    /// its own distribution, ignoring the supplied family.
    ChiSquared2d,
}

impl GofTest {
    /// Every test, in registry order.
    pub const ALL: [GofTest; 3] = [
        GofTest::KolmogorovSmirnov,
        GofTest::ChiSquared,
        GofTest::ChiSquared2d,
    ];

    /// Registry name of the test.
    pub fn name(&self) -> &'static str {
        match self {
            Self::KolmogorovSmirnov => "kolmogorov_smirnov",
            Self::ChiSquared => "chi_squared",
            Self::ChiSquared2d => "chi_squared_2d",
        }
    }

    /// Number of data columns the test consumes.
    pub fn required_columns(&self) -> usize {
        match self {
            Self::KolmogorovSmirnov | Self::ChiSquared => 1,
            Self::ChiSquared2d => 2,
        }
    }

    /// Look a test up by its registry name.
    pub fn from_name(name: &str) -> StatsResult<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| StatsError::UnknownName {
                name: name.to_string(),
                family: "goodness-of-fit test".to_string(),
            })
    }

    /// Fit `family` to the data by moments and run the test.
    ///
    /// `columns` must carry exactly [`required_columns`](Self::required_columns)
    /// entries; anything else is a caller error.
    pub fn run(
        &self,
        columns: &[&[f64]],
        family: DistributionFamily,
        config: &GofConfig,
    ) -> StatsResult<TestSummary> {
        let required = self.required_columns();
        if columns.len() != required {
            return Err(StatsError::SampleCount {
                required: format!("exactly {}", required),
                got: columns.len(),
                context: self.name().to_string(),
            });
        }
        match self {
            Self::KolmogorovSmirnov => {
                let dist = family.fit(columns[0])?;
                kolmogorov_smirnov(columns[0], &dist, config)
            }
            Self::ChiSquared => {
                let dist = family.fit(columns[0])?;
                chi_squared(columns[0], &dist, config)
            }
            Self::ChiSquared2d => chi_squared_2d(columns[0], columns[1], config),
        }
    }
}
