use crate::integrate::error::{IntegrateError, IntegrateResult};
use crate::integrate::policy::IntegrationPolicy;
use crate::integrate::traits::UnivariateFunction;

/// Outcome of a converged integration.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadResult {
    /// Computed integral value
    pub integral: f64,
    /// Difference between the last two estimates
    pub error: f64,
    /// Number of function evaluations
    pub neval: usize,
    /// Refinement index at which the convergence test passed
    pub iterations: usize,
}

/// Common surface of the iterative one-dimensional integrators.
///
/// Implementors hold an [`IntegrationPolicy`] and nothing else; every call
/// allocates its own working state, so one integrator can serve concurrent
/// calls.
pub trait UnivariateIntegrator {
    /// Accuracy and iteration bounds used by every call.
    fn policy(&self) -> &IntegrationPolicy;

    /// Integrate `f` over `[lower, upper]` and report diagnostics.
    ///
    /// # Errors
    ///
    /// - [`IntegrateError::InvalidInterval`] if the bounds are not finite or
    ///   `lower >= upper`
    /// - [`IntegrateError::TooManyEvaluations`] if `max_evaluations` would be
    ///   exceeded
    /// - [`IntegrateError::MaxIterationsExceeded`] if the estimate has not
    ///   converged after the maximal number of iterations
    fn integrate_with_report<F>(
        &self,
        max_evaluations: usize,
        f: &F,
        lower: f64,
        upper: f64,
    ) -> IntegrateResult<QuadResult>
    where
        F: UnivariateFunction + ?Sized;

    /// Integrate `f` over `[lower, upper]`.
    ///
    /// Same failure modes as [`integrate_with_report`](Self::integrate_with_report).
    fn integrate<F>(
        &self,
        max_evaluations: usize,
        f: &F,
        lower: f64,
        upper: f64,
    ) -> IntegrateResult<f64>
    where
        F: UnivariateFunction + ?Sized,
    {
        self.integrate_with_report(max_evaluations, f, lower, upper)
            .map(|result| result.integral)
    }
}

pub(crate) fn verify_interval(a: f64, b: f64, context: &str) -> IntegrateResult<()> {
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(IntegrateError::InvalidInterval {
            a,
            b,
            context: context.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_interval() {
        assert!(verify_interval(0.0, 1.0, "test").is_ok());
        assert!(verify_interval(1.0, 1.0, "test").is_err());
        assert!(verify_interval(2.0, 1.0, "test").is_err());
        assert!(verify_interval(f64::NEG_INFINITY, 1.0, "test").is_err());
        assert!(verify_interval(0.0, f64::NAN, "test").is_err());
    }
}
