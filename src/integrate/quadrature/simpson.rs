//! Simpson's rule built on successive trapezoid stages.
//!
//! `S_i = (4 T_i - T_{i-1}) / 3` is exactly column 1 of the Romberg table,
//! giving O(h⁴) accuracy for smooth functions without the higher
//! extrapolation orders.

use tracing::debug;

use crate::integrate::budget::EvaluationBudget;
use crate::integrate::error::{IntegrateError, IntegrateResult};
use crate::integrate::policy::IntegrationPolicy;
use crate::integrate::quadrature::trapezoid::TrapezoidStages;
use crate::integrate::traits::{
    QuadResult, StageProvider, UnivariateFunction, UnivariateIntegrator, verify_interval,
};

/// Iterative Simpson integrator.
///
/// The first Simpson estimate needs stages 0 and 1, so the convergence test
/// starts at iteration `max(2, min_iterations)`.
///
/// # Example
///
/// ```
/// use quadr::integrate::{SimpsonIntegrator, UnivariateIntegrator};
///
/// let integrator = SimpsonIntegrator::default();
/// let result = integrator.integrate(10_000, &|x: f64| x.sin(), 0.0, std::f64::consts::PI).unwrap();
/// assert!((result - 2.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimpsonIntegrator {
    policy: IntegrationPolicy,
}

impl SimpsonIntegrator {
    /// Build an integrator from explicit accuracies and iteration bounds.
    pub fn new(
        relative_accuracy: f64,
        absolute_accuracy: f64,
        min_iterations: usize,
        max_iterations: usize,
    ) -> IntegrateResult<Self> {
        IntegrationPolicy::new(
            relative_accuracy,
            absolute_accuracy,
            min_iterations,
            max_iterations,
        )
        .map(Self::from_policy)
    }

    /// Build an integrator with default accuracies.
    pub fn with_iterations(min_iterations: usize, max_iterations: usize) -> IntegrateResult<Self> {
        IntegrationPolicy::with_iterations(min_iterations, max_iterations).map(Self::from_policy)
    }

    /// Wrap an existing policy.
    pub fn from_policy(policy: IntegrationPolicy) -> Self {
        Self { policy }
    }
}

impl UnivariateIntegrator for SimpsonIntegrator {
    fn policy(&self) -> &IntegrationPolicy {
        &self.policy
    }

    fn integrate_with_report<F>(
        &self,
        max_evaluations: usize,
        f: &F,
        lower: f64,
        upper: f64,
    ) -> IntegrateResult<QuadResult>
    where
        F: UnivariateFunction + ?Sized,
    {
        verify_interval(lower, upper, "simpson")?;
        debug!(lower, upper, max_evaluations, "simpson: start");

        let mut budget = EvaluationBudget::new(max_evaluations);
        let mut stages = TrapezoidStages::new(lower, upper);
        match self.refine(&mut stages, f, &mut budget) {
            Ok(result) => {
                debug!(
                    iterations = result.iterations,
                    neval = result.neval,
                    integral = result.integral,
                    "simpson: converged"
                );
                Ok(result)
            }
            Err(err) => {
                debug!(neval = budget.used(), error = %err, "simpson: failed");
                Err(err)
            }
        }
    }
}

impl SimpsonIntegrator {
    fn refine<F>(
        &self,
        stages: &mut TrapezoidStages,
        f: &F,
        budget: &mut EvaluationBudget,
    ) -> IntegrateResult<QuadResult>
    where
        F: UnivariateFunction + ?Sized,
    {
        let first_check = self.policy.min_iterations().max(2);

        let mut oldt = stages.stage(f, 0, budget)?.estimate;
        let mut olds = f64::NAN;

        for i in 1..=self.policy.max_iterations() {
            let t = stages.stage(f, i, budget)?.estimate;
            let s = (4.0 * t - oldt) / 3.0;
            if i >= first_check && self.policy.accepts(olds, s) {
                return Ok(QuadResult {
                    integral: s,
                    error: (s - olds).abs(),
                    neval: budget.used(),
                    iterations: i,
                });
            }
            olds = s;
            oldt = t;
        }

        Err(IntegrateError::MaxIterationsExceeded {
            iterations: self.policy.max_iterations(),
        })
    }
}
