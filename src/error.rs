//! Error types for statistical operations.

use std::fmt;

/// Result type for statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur during statistical operations.
#[derive(Debug, Clone)]
pub enum StatsError {
    /// Invalid parameter value for a distribution.
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    /// Input data is empty when non-empty data is required.
    EmptyData { context: String },

    /// Input data has insufficient length.
    InsufficientData {
        required: usize,
        got: usize,
        context: String,
    },

    /// Wrong number of samples passed to a test.
    SampleCount {
        required: String,
        got: usize,
        context: String,
    },

    /// Probability value out of range [0, 1].
    InvalidProbability { value: f64 },

    /// Correlation matrix failed validation.
    InvalidMatrix { reason: String },

    /// Numerical computation failed.
    NumericalError { message: String },

    /// Iterative method did not converge.
    ConvergenceError { iterations: usize, context: String },

    /// Mismatched array lengths.
    LengthMismatch {
        expected: usize,
        got: usize,
        context: String,
    },

    /// Registry lookup with a name no implementation is registered under.
    UnknownName { name: String, family: String },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                name,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{}' = {}: {}", name, value, reason)
            }
            Self::EmptyData { context } => {
                write!(f, "Empty data in {}", context)
            }
            Self::InsufficientData {
                required,
                got,
                context,
            } => {
                write!(
                    f,
                    "Insufficient data in {}: need {} elements, got {}",
                    context, required, got
                )
            }
            Self::SampleCount {
                required,
                got,
                context,
            } => {
                write!(
                    f,
                    "Wrong sample count in {}: requires {} samples, got {}",
                    context, required, got
                )
            }
            Self::InvalidProbability { value } => {
                write!(f, "Invalid probability {}: must be in [0, 1]", value)
            }
            Self::InvalidMatrix { reason } => {
                write!(f, "Invalid correlation matrix: {}", reason)
            }
            Self::NumericalError { message } => {
                write!(f, "Numerical error: {}", message)
            }
            Self::ConvergenceError {
                iterations,
                context,
            } => {
                write!(
                    f,
                    "{} did not converge after {} iterations",
                    context, iterations
                )
            }
            Self::LengthMismatch {
                expected,
                got,
                context,
            } => {
                write!(
                    f,
                    "Length mismatch in {}: expected {}, got {}",
                    context, expected, got
                )
            }
            Self::UnknownName { name, family } => {
                write!(f, "Unknown {} name '{}'", family, name)
            }
        }
    }
}

impl std::error::Error for StatsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatsError::InvalidParameter {
            name: "sigma".to_string(),
            value: -1.0,
            reason: "must be positive".to_string(),
        };
        assert!(err.to_string().contains("sigma"));
        assert!(err.to_string().contains("-1"));

        let err = StatsError::InvalidProbability { value: 1.5 };
        assert!(err.to_string().contains("1.5"));
        assert!(err.to_string().contains("[0, 1]"));

        let err = StatsError::UnknownName {
            name: "cauchy".to_string(),
            family: "distribution".to_string(),
        };
        assert!(err.to_string().contains("cauchy"));
        assert!(err.to_string().contains("distribution"));

        let err = StatsError::SampleCount {
            required: "exactly 2".to_string(),
            got: 3,
            context: "mannwhitney".to_string(),
        };
        assert!(err.to_string().contains("exactly 2"));
        assert!(err.to_string().contains("3"));
    }
}
