//! Error types for numerical integration operations.

use thiserror::Error;

/// Result type for integration operations.
pub type IntegrateResult<T> = Result<T, IntegrateError>;

/// Errors that can occur while configuring or running an integrator.
///
/// Only failures travel through this type. A converged estimate is returned
/// as an ordinary `Ok` value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrateError {
    /// Minimal iteration count is zero, or the maximal count does not exceed it.
    #[error(
        "invalid iteration bounds: minimal = {minimal}, maximal = {maximal} \
         (require 0 < minimal < maximal)"
    )]
    InvalidIterationBound { minimal: usize, maximal: usize },

    /// Maximal iteration count is above what the algorithm supports.
    #[error("maximal iteration count {requested} exceeds the ceiling of {ceiling}")]
    IterationCeilingExceeded { requested: usize, ceiling: usize },

    /// The evaluation budget of an integration call ran out.
    #[error("evaluation budget of {max} function evaluations exhausted")]
    TooManyEvaluations { max: usize },

    /// The convergence test was still failing after the last allowed iteration.
    #[error("did not converge within {iterations} iterations")]
    MaxIterationsExceeded { iterations: usize },

    /// Invalid interval provided (e.g., a >= b).
    #[error("invalid interval [{a}, {b}] in {context}: bounds must be finite and satisfy a < b")]
    InvalidInterval { a: f64, b: f64, context: String },

    /// Invalid parameter value.
    #[error("invalid parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },

    /// A policy file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for IntegrateError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for IntegrateError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IntegrateError::MaxIterationsExceeded { iterations: 12 };
        assert!(err.to_string().contains("did not converge"));
        assert!(err.to_string().contains("12"));

        let err = IntegrateError::InvalidInterval {
            a: 5.0,
            b: 3.0,
            context: "romberg".to_string(),
        };
        assert!(err.to_string().contains("invalid interval"));

        let err = IntegrateError::IterationCeilingExceeded {
            requested: 40,
            ceiling: 32,
        };
        assert!(err.to_string().contains("40"));
        assert!(err.to_string().contains("32"));

        let err = IntegrateError::TooManyEvaluations { max: 100 };
        assert!(err.to_string().contains("exhausted"));

        let err = IntegrateError::InvalidParameter {
            parameter: "stage".to_string(),
            message: "out of order".to_string(),
        };
        assert!(err.to_string().starts_with("invalid parameter 'stage'"));
    }

    #[test]
    fn test_toml_error_maps_to_config() {
        let err: IntegrateError = toml::from_str::<toml::Table>("= broken")
            .unwrap_err()
            .into();
        assert!(matches!(err, IntegrateError::Config(_)));
    }
}
