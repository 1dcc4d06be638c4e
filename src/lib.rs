//! veristat - Statistical inference over one-dimensional samples
//!
//! veristat fits parametric distributions to observed data and runs the
//! classical inference toolkit around them: goodness-of-fit testing,
//! two- and k-sample homogeneity testing, correlation analysis and a
//! small simulation engine for sampling experiments.
//!
//! # Current Modules
//!
//! - [`distribution`] - Distribution families (normal, exponential, uniform,
//!   weibull, laplace) with moment-based fitting
//! - [`estimate`] - Parameter estimation (method of moments, maximum likelihood)
//! - [`gof`] - Goodness-of-fit tests (Kolmogorov-Smirnov, chi-squared,
//!   bivariate chi-squared)
//! - [`homogeneity`] - Same-population tests (normal F/t, rank tests, Smirnov,
//!   sign, ANOVA, Bartlett, Cochran's Q, Kruskal-Wallis, Abbe)
//! - [`correlation`] - Pearson, Spearman, Kendall tau-b, correlation ratio,
//!   each with significance tests and confidence intervals
//! - [`simulate`] - Inverse-CDF sampling, repeated t-test experiments,
//!   correlated multivariate generation
//! - [`registry`] - Stable string names for every family and test
//!
//! # Quick Start
//!
//! ```
//! use veristat::distribution::DistributionFamily;
//! use veristat::gof::{GofConfig, GofTest};
//!
//! let data: Vec<f64> = (0..100).map(|i| (i % 17) as f64 * 0.3 - 2.0).collect();
//! let fitted = DistributionFamily::Normal.fit(&data).unwrap();
//! let outcome = GofTest::KolmogorovSmirnov
//!     .run(&[&data], fitted.family(), &GofConfig::default())
//!     .unwrap();
//! println!("D = {}, p = {}", outcome.statistic, outcome.p_value);
//! ```
//!
//! Every fallible operation returns [`error::StatsResult`]; test outcomes
//! come back as structured [`result::TestSummary`] values with the
//! statistic, p-value and acceptance decision in one place.

pub mod continuous;
pub mod correlation;
pub mod distribution;
pub mod error;
pub mod estimate;
pub mod gof;
pub mod homogeneity;
pub mod registry;
pub mod result;
pub mod sample;
pub mod simulate;

pub use correlation::{CorrelationConfig, CorrelationKind};
pub use distribution::{
    ContinuousDistribution, Distribution, DistributionFamily, FittedDistribution, SampleFit,
};
pub use error::{StatsError, StatsResult};
pub use estimate::EstimationMethod;
pub use gof::{GofConfig, GofTest};
pub use homogeneity::{HomogeneityConfig, HomogeneityTest};
pub use result::{CorrelationOutcome, ExperimentSummary, TestSummary};
pub use simulate::ExperimentConfig;
