//! Homogeneity tests: do two or more samples come from the same
//! population? Covers parametric (normal), rank-based, distribution-free
//! and k-sample procedures behind one dispatching enum.

mod abbe;
mod multi;
mod normal;
mod rank;
mod sign;
mod smirnov;
pub mod ttest;

pub use abbe::abbe;
pub use multi::{anova, bartlett, cochran_q, kruskal_wallis};
pub use normal::normal_homogeneity;
pub use rank::{mann_whitney, rank_mean_difference, wilcoxon_rank_sum};
pub use sign::sign_test;
pub use smirnov::smirnov;
pub use ttest::{
    t_critical_two_sided, ttest_one_sample, ttest_paired, ttest_pooled, ttest_welch, TTest,
};

use crate::error::{StatsError, StatsResult};
use crate::result::TestSummary;

/// Configuration shared by all homogeneity tests.
#[derive(Debug, Clone, Copy)]
pub struct HomogeneityConfig {
    /// Significance level.
    pub alpha: f64,
    /// Whether paired tests should treat the samples as independent.
    /// Only the normal test consults this; rank and k-sample tests
    /// always assume independence, the sign test always pairs.
    pub is_independent: bool,
}

impl Default for HomogeneityConfig {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            is_independent: true,
        }
    }
}

/// How many samples a test consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleRequirement {
    Exactly(usize),
    AtLeast(usize),
}

impl SampleRequirement {
    fn accepts(&self, got: usize) -> bool {
        match self {
            Self::Exactly(n) => got == *n,
            Self::AtLeast(n) => got >= *n,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Exactly(n) => format!("exactly {}", n),
            Self::AtLeast(n) => format!("at least {}", n),
        }
    }
}

/// The closed set of homogeneity tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomogeneityTest {
    NormalTest,
    MannWhitney,
    Wilcoxon,
    RankMeanDifference,
    SmirnovKolmogorov,
    Sign,
    Anova,
    Bartlett,
    CochranQ,
    KruskalWallis,
    Abbe,
}

impl HomogeneityTest {
    /// Every test, in registry order.
    pub const ALL: [HomogeneityTest; 11] = [
        HomogeneityTest::NormalTest,
        HomogeneityTest::MannWhitney,
        HomogeneityTest::Wilcoxon,
        HomogeneityTest::RankMeanDifference,
        HomogeneityTest::SmirnovKolmogorov,
        HomogeneityTest::Sign,
        HomogeneityTest::Anova,
        HomogeneityTest::Bartlett,
        HomogeneityTest::CochranQ,
        HomogeneityTest::KruskalWallis,
        HomogeneityTest::Abbe,
    ];

    /// Registry name of the test.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NormalTest => "normal",
            Self::MannWhitney => "mann_whitney",
            Self::Wilcoxon => "wilcoxon",
            Self::RankMeanDifference => "rank_mean_difference",
            Self::SmirnovKolmogorov => "smirnov",
            Self::Sign => "sign",
            Self::Anova => "anova",
            Self::Bartlett => "bartlett",
            Self::CochranQ => "cochran_q",
            Self::KruskalWallis => "kruskal_wallis",
            Self::Abbe => "abbe",
        }
    }

    /// Sample cardinality the test accepts.
    pub fn required_samples(&self) -> SampleRequirement {
        match self {
            Self::Abbe => SampleRequirement::Exactly(1),
            Self::NormalTest
            | Self::MannWhitney
            | Self::Wilcoxon
            | Self::RankMeanDifference
            | Self::SmirnovKolmogorov
            | Self::Sign => SampleRequirement::Exactly(2),
            Self::Anova | Self::Bartlett | Self::CochranQ | Self::KruskalWallis => {
                SampleRequirement::AtLeast(3)
            }
        }
    }

    /// Look a test up by its registry name.
    pub fn from_name(name: &str) -> StatsResult<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| StatsError::UnknownName {
                name: name.to_string(),
                family: "homogeneity test".to_string(),
            })
    }

    /// Run the test on `samples`, enforcing its cardinality first.
    pub fn run(
        &self,
        samples: &[&[f64]],
        config: &HomogeneityConfig,
    ) -> StatsResult<TestSummary> {
        let requirement = self.required_samples();
        if !requirement.accepts(samples.len()) {
            return Err(StatsError::SampleCount {
                required: requirement.describe(),
                got: samples.len(),
                context: self.name().to_string(),
            });
        }
        match self {
            Self::NormalTest => normal_homogeneity(samples[0], samples[1], config),
            Self::MannWhitney => mann_whitney(samples[0], samples[1], config),
            Self::Wilcoxon => wilcoxon_rank_sum(samples[0], samples[1], config),
            Self::RankMeanDifference => rank_mean_difference(samples[0], samples[1], config),
            Self::SmirnovKolmogorov => smirnov(samples[0], samples[1], config),
            Self::Sign => sign_test(samples[0], samples[1], config),
            Self::Anova => anova(samples, config),
            Self::Bartlett => bartlett(samples, config),
            Self::CochranQ => cochran_q(samples, config),
            Self::KruskalWallis => kruskal_wallis(samples, config),
            Self::Abbe => abbe(samples[0], config),
        }
    }
}
