//! Accuracy and iteration policy shared by all integrators.
//!
//! A policy is validated once at construction and is read-only afterwards,
//! so a single value can be shared by any number of concurrent calls.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::integrate::error::{IntegrateError, IntegrateResult};

/// Hard ceiling on the maximal iteration count.
///
/// Stage `i` of the trapezoid refinement costs `2^(i-1)` evaluations, and the
/// Romberg table rows are sized to `maximal + 1`.
pub const ROMBERG_MAX_ITERATIONS_COUNT: usize = 32;

/// Default relative accuracy.
pub const DEFAULT_RELATIVE_ACCURACY: f64 = 1.0e-6;

/// Default absolute accuracy.
pub const DEFAULT_ABSOLUTE_ACCURACY: f64 = 1.0e-15;

/// Default minimal iteration count.
pub const DEFAULT_MIN_ITERATIONS_COUNT: usize = 1;

/// Accuracy targets and iteration bounds for an integration.
///
/// Invariants: both accuracies are finite and strictly positive,
/// `0 < min_iterations < max_iterations <= ROMBERG_MAX_ITERATIONS_COUNT`.
///
/// # Example
///
/// ```
/// use quadr::integrate::{IntegrationPolicy, IntegrateError};
///
/// let policy = IntegrationPolicy::new(1e-8, 1e-12, 3, 10).unwrap();
/// assert_eq!(policy.max_iterations(), 10);
///
/// let err = IntegrationPolicy::with_iterations(5, 5).unwrap_err();
/// assert!(matches!(err, IntegrateError::InvalidIterationBound { .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolicyConfig", into = "PolicyConfig")]
pub struct IntegrationPolicy {
    relative_accuracy: f64,
    absolute_accuracy: f64,
    min_iterations: usize,
    max_iterations: usize,
}

impl IntegrationPolicy {
    /// Build a policy from explicit accuracies and iteration bounds.
    ///
    /// # Errors
    ///
    /// - [`IntegrateError::InvalidParameter`] if an accuracy is not a finite
    ///   positive number
    /// - [`IntegrateError::InvalidIterationBound`] if `min_iterations == 0` or
    ///   `max_iterations <= min_iterations`
    /// - [`IntegrateError::IterationCeilingExceeded`] if `max_iterations` is
    ///   above [`ROMBERG_MAX_ITERATIONS_COUNT`]
    pub fn new(
        relative_accuracy: f64,
        absolute_accuracy: f64,
        min_iterations: usize,
        max_iterations: usize,
    ) -> IntegrateResult<Self> {
        check_accuracy("relative_accuracy", relative_accuracy)?;
        check_accuracy("absolute_accuracy", absolute_accuracy)?;

        if min_iterations == 0 || max_iterations <= min_iterations {
            return Err(IntegrateError::InvalidIterationBound {
                minimal: min_iterations,
                maximal: max_iterations,
            });
        }

        if max_iterations > ROMBERG_MAX_ITERATIONS_COUNT {
            return Err(IntegrateError::IterationCeilingExceeded {
                requested: max_iterations,
                ceiling: ROMBERG_MAX_ITERATIONS_COUNT,
            });
        }

        Ok(Self {
            relative_accuracy,
            absolute_accuracy,
            min_iterations,
            max_iterations,
        })
    }

    /// Build a policy with default accuracies and the given iteration bounds.
    pub fn with_iterations(min_iterations: usize, max_iterations: usize) -> IntegrateResult<Self> {
        Self::new(
            DEFAULT_RELATIVE_ACCURACY,
            DEFAULT_ABSOLUTE_ACCURACY,
            min_iterations,
            max_iterations,
        )
    }

    /// Relative accuracy of the result.
    pub fn relative_accuracy(&self) -> f64 {
        self.relative_accuracy
    }

    /// Absolute accuracy of the result.
    pub fn absolute_accuracy(&self) -> f64 {
        self.absolute_accuracy
    }

    /// Minimal number of refinements before the convergence test is applied.
    pub fn min_iterations(&self) -> usize {
        self.min_iterations
    }

    /// Maximal number of refinements.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Classical Romberg stopping rule.
    ///
    /// `current` is accepted when `|current - previous|` is within either the
    /// absolute accuracy or the relative accuracy scaled by the mean magnitude
    /// of the two estimates. Using the mean keeps an estimate that passes
    /// through zero from being accepted early.
    pub fn accepts(&self, previous: f64, current: f64) -> bool {
        let delta = (current - previous).abs();
        let relative_limit = self.relative_accuracy * (previous.abs() + current.abs()) * 0.5;
        delta <= relative_limit || delta <= self.absolute_accuracy
    }

    /// Parse a policy from TOML. Missing keys take their default values.
    pub fn from_toml_str(contents: &str) -> IntegrateResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a policy from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> IntegrateResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| {
            IntegrateError::Config(format!("failed to read {}: {}", path.display(), err))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Serialize the policy to TOML.
    pub fn to_toml_string(&self) -> IntegrateResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for IntegrationPolicy {
    /// Default accuracies, minimal count 1, maximal count at the ceiling.
    fn default() -> Self {
        Self {
            relative_accuracy: DEFAULT_RELATIVE_ACCURACY,
            absolute_accuracy: DEFAULT_ABSOLUTE_ACCURACY,
            min_iterations: DEFAULT_MIN_ITERATIONS_COUNT,
            max_iterations: ROMBERG_MAX_ITERATIONS_COUNT,
        }
    }
}

fn check_accuracy(parameter: &str, value: f64) -> IntegrateResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(IntegrateError::InvalidParameter {
            parameter: parameter.to_string(),
            message: format!("must be a finite positive number (got {})", value),
        });
    }
    Ok(())
}

/// On-disk form of [`IntegrationPolicy`], validated on conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct PolicyConfig {
    relative_accuracy: f64,
    absolute_accuracy: f64,
    min_iterations: usize,
    max_iterations: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        IntegrationPolicy::default().into()
    }
}

impl TryFrom<PolicyConfig> for IntegrationPolicy {
    type Error = IntegrateError;

    fn try_from(config: PolicyConfig) -> IntegrateResult<Self> {
        Self::new(
            config.relative_accuracy,
            config.absolute_accuracy,
            config.min_iterations,
            config.max_iterations,
        )
    }
}

impl From<IntegrationPolicy> for PolicyConfig {
    fn from(policy: IntegrationPolicy) -> Self {
        Self {
            relative_accuracy: policy.relative_accuracy,
            absolute_accuracy: policy.absolute_accuracy,
            min_iterations: policy.min_iterations,
            max_iterations: policy.max_iterations,
        }
    }
}
