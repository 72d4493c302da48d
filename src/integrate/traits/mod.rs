//! Trait definitions shared by the integration algorithms.

mod function;
mod integrator;
mod stage;

pub use function::UnivariateFunction;
pub use integrator::{QuadResult, UnivariateIntegrator};
pub use stage::{Stage, StageProvider};

pub(crate) use integrator::verify_interval;
