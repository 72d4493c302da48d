//! Numerical integration of real functions of one variable.
//!
//! # Architecture
//!
//! Integrators are composed from three shared pieces rather than derived
//! from a common base:
//!
//! - [`IntegrationPolicy`] - accuracy targets and iteration bounds, validated
//!   once and read-only afterwards
//! - [`EvaluationBudget`] - per-call count of function evaluations against a
//!   ceiling
//! - [`StageProvider`] - successive trapezoid refinements
//!   ([`TrapezoidStages`]) reusing earlier sample points
//!
//! Every integrator implements [`UnivariateIntegrator`]. A call either
//! returns the converged estimate or fails with an [`IntegrateError`]; an
//! unconverged estimate is never handed back.
//!
//! # Quadrature Methods
//!
//! - [`RombergIntegrator`] - Romberg integration via Richardson extrapolation
//! - [`SimpsonIntegrator`] - Simpson's rule from successive trapezoid stages
//! - [`TrapezoidIntegrator`] - Trapezoidal rule with interval halving
//!
//! # Example
//!
//! ```
//! use quadr::integrate::{IntegrationPolicy, RombergIntegrator, UnivariateIntegrator};
//!
//! let policy = IntegrationPolicy::from_toml_str(
//!     "relative_accuracy = 1e-10\nmin_iterations = 3\nmax_iterations = 20\n",
//! )?;
//! let integrator = RombergIntegrator::from_policy(policy);
//!
//! let result = integrator.integrate_with_report(10_000, &|x: f64| x.cos(), 0.0, 1.0)?;
//! assert!((result.integral - 1.0_f64.sin()).abs() < 1e-10);
//! # Ok::<(), quadr::integrate::IntegrateError>(())
//! ```

mod budget;
pub mod error;
mod policy;
pub mod quadrature;
pub mod traits;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_support;

// Re-export error types
pub use error::{IntegrateError, IntegrateResult};

pub use budget::EvaluationBudget;
pub use policy::{
    DEFAULT_ABSOLUTE_ACCURACY, DEFAULT_MIN_ITERATIONS_COUNT, DEFAULT_RELATIVE_ACCURACY,
    IntegrationPolicy, ROMBERG_MAX_ITERATIONS_COUNT,
};
pub use quadrature::{
    RombergIntegrator, RombergTable, SimpsonIntegrator, TrapezoidIntegrator, TrapezoidStages,
};
pub use traits::{QuadResult, Stage, StageProvider, UnivariateFunction, UnivariateIntegrator};
