//! Name registries: stable string lookup for distribution families and
//! the test enums, in a deterministic order.

use crate::correlation::CorrelationKind;
use crate::distribution::DistributionFamily;
use crate::error::{StatsError, StatsResult};
use crate::estimate::EstimationMethod;
use crate::gof::GofTest;
use crate::homogeneity::HomogeneityTest;

/// A read-only name-to-value registry for one family of implementations.
#[derive(Debug, Clone)]
pub struct Registry<T: Copy> {
    family: &'static str,
    entries: Vec<(&'static str, T)>,
}

impl<T: Copy> Registry<T> {
    fn new(family: &'static str, entries: Vec<(&'static str, T)>) -> Self {
        Self { family, entries }
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    /// Look an implementation up by name.
    pub fn get(&self, name: &str) -> StatsResult<T> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
            .ok_or_else(|| StatsError::UnknownName {
                name: name.to_string(),
                family: self.family.to_string(),
            })
    }

    /// Number of registered implementations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Registry of distribution families.
pub fn distributions() -> Registry<DistributionFamily> {
    Registry::new(
        "distribution",
        DistributionFamily::ALL
            .into_iter()
            .map(|f| (f.name(), f))
            .collect(),
    )
}

/// Registry of estimation methods.
pub fn estimators() -> Registry<EstimationMethod> {
    Registry::new(
        "estimation method",
        EstimationMethod::ALL
            .into_iter()
            .map(|m| (m.name(), m))
            .collect(),
    )
}

/// Registry of goodness-of-fit tests.
pub fn gof_tests() -> Registry<GofTest> {
    Registry::new(
        "goodness-of-fit test",
        GofTest::ALL.into_iter().map(|t| (t.name(), t)).collect(),
    )
}

/// Registry of homogeneity tests.
pub fn homogeneity_tests() -> Registry<HomogeneityTest> {
    Registry::new(
        "homogeneity test",
        HomogeneityTest::ALL
            .into_iter()
            .map(|t| (t.name(), t))
            .collect(),
    )
}

/// Registry of correlation coefficients.
pub fn correlations() -> Registry<CorrelationKind> {
    Registry::new(
        "correlation coefficient",
        CorrelationKind::ALL
            .into_iter()
            .map(|k| (k.name(), k))
            .collect(),
    )
}
