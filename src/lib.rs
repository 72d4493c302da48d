//! # quadr
//!
//! Adaptive quadrature for real functions of one variable on a finite
//! interval.
//!
//! The centrepiece is [`integrate::RombergIntegrator`], which applies
//! Richardson extrapolation to a sequence of trapezoidal refinements and stops
//! as soon as two successive estimates agree to the configured relative or
//! absolute accuracy. Work is bounded by an iteration ceiling and by a
//! per-call evaluation budget.
//!
//! ```
//! use quadr::integrate::{RombergIntegrator, UnivariateIntegrator};
//!
//! let integrator = RombergIntegrator::default();
//! let value = integrator.integrate(1000, &|x: f64| x * x, 0.0, 1.0).unwrap();
//! assert!((value - 1.0 / 3.0).abs() < 1e-10);
//! ```

pub mod integrate;
