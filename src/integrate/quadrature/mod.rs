//! Numerical quadrature (integration) methods.
//!
//! All methods refine the trapezoid rule by interval halving and stop on the
//! convergence test of an [`IntegrationPolicy`](crate::integrate::IntegrationPolicy).
//!
//! # Available Methods
//!
//! | Method | Use Case | Accuracy |
//! |--------|----------|----------|
//! | [`TrapezoidIntegrator`] | Rough estimates, periodic integrands | O(h²) |
//! | [`SimpsonIntegrator`] | Moderately smooth functions | O(h⁴) |
//! | [`RombergIntegrator`] | Smooth functions | High precision via extrapolation |

mod romberg;
mod simpson;
mod trapezoid;

// Re-export all public items
pub use romberg::{RombergIntegrator, RombergTable};
pub use simpson::SimpsonIntegrator;
pub use trapezoid::{TrapezoidIntegrator, TrapezoidStages};
