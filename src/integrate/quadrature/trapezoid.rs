//! Trapezoidal rule with successive interval halving.
//!
//! [`TrapezoidStages`] produces the refinement sequence consumed by the
//! Romberg and Simpson integrators: stage `n` uses `2^n` subintervals and only
//! evaluates the midpoints introduced since stage `n - 1`. The trapezoidal
//! rule has O(h²) accuracy for smooth functions.

use tracing::{debug, trace};

use crate::integrate::budget::EvaluationBudget;
use crate::integrate::error::{IntegrateError, IntegrateResult};
use crate::integrate::policy::IntegrationPolicy;
use crate::integrate::traits::{
    QuadResult, Stage, StageProvider, UnivariateFunction, UnivariateIntegrator, verify_interval,
};

/// Incremental trapezoid estimates over a fixed interval.
///
/// # Example
///
/// ```
/// use quadr::integrate::{EvaluationBudget, StageProvider, TrapezoidStages};
///
/// let f = |x: f64| x * x;
/// let mut stages = TrapezoidStages::new(0.0, 1.0);
/// let mut budget = EvaluationBudget::new(100);
///
/// assert_eq!(stages.stage(&f, 0, &mut budget).unwrap().estimate, 0.5);
/// assert_eq!(stages.stage(&f, 1, &mut budget).unwrap().estimate, 0.375);
/// assert_eq!(budget.used(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct TrapezoidStages {
    lower: f64,
    upper: f64,
    estimate: f64,
    next: usize,
}

impl TrapezoidStages {
    /// Prepare stages for the interval `[lower, upper]`.
    pub fn new(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            estimate: 0.0,
            next: 0,
        }
    }

    /// Number of new function evaluations stage `index` performs, or `None`
    /// if it does not fit in a `usize`.
    pub fn evaluations_for(index: usize) -> Option<usize> {
        if index == 0 {
            return Some(2);
        }
        let shift = u32::try_from(index - 1).ok()?;
        1usize.checked_shl(shift)
    }
}

impl StageProvider for TrapezoidStages {
    fn stage<F>(
        &mut self,
        f: &F,
        index: usize,
        budget: &mut EvaluationBudget,
    ) -> IntegrateResult<Stage>
    where
        F: UnivariateFunction + ?Sized,
    {
        if index != 0 && index != self.next {
            return Err(IntegrateError::InvalidParameter {
                parameter: "stage".to_string(),
                message: format!(
                    "trapezoid: expected stage 0 or {}, got {}",
                    self.next, index
                ),
            });
        }

        let evaluations =
            Self::evaluations_for(index).ok_or_else(|| IntegrateError::InvalidParameter {
                parameter: "stage".to_string(),
                message: format!("trapezoid: stage {} needs too many points", index),
            })?;
        budget.consume(evaluations)?;

        let h = self.upper - self.lower;
        self.estimate = if index == 0 {
            0.5 * h * (f.value(self.lower) + f.value(self.upper))
        } else {
            // New points sit at a + (2i+1) * h_k, the midpoints of stage k-1
            let h_k = h / 2.0_f64.powi(index as i32);
            let mut sum = 0.0;
            for i in 0..evaluations {
                sum += f.value(self.lower + (2 * i + 1) as f64 * h_k);
            }
            0.5 * self.estimate + h_k * sum
        };
        self.next = index + 1;

        trace!(stage = index, evaluations, estimate = self.estimate, "trapezoid stage");
        Ok(Stage {
            estimate: self.estimate,
            evaluations,
        })
    }
}

/// Iterative trapezoid integrator.
///
/// Halves the step until two successive trapezoid estimates pass the policy's
/// convergence test.
///
/// # Example
///
/// ```
/// use quadr::integrate::{TrapezoidIntegrator, UnivariateIntegrator};
///
/// let integrator = TrapezoidIntegrator::with_iterations(3, 20).unwrap();
/// let result = integrator.integrate(100_000, &|x: f64| x.exp(), 0.0, 1.0).unwrap();
/// assert!((result - (std::f64::consts::E - 1.0)).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrapezoidIntegrator {
    policy: IntegrationPolicy,
}

impl TrapezoidIntegrator {
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

impl UnivariateIntegrator for TrapezoidIntegrator {
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
        verify_interval(lower, upper, "trapezoid")?;
        debug!(lower, upper, max_evaluations, "trapezoid: start");

        let mut budget = EvaluationBudget::new(max_evaluations);
        let mut stages = TrapezoidStages::new(lower, upper);
        match self.refine(&mut stages, f, &mut budget) {
            Ok(result) => {
                debug!(
                    iterations = result.iterations,
                    neval = result.neval,
                    integral = result.integral,
                    "trapezoid: converged"
                );
                Ok(result)
            }
            Err(err) => {
                debug!(neval = budget.used(), error = %err, "trapezoid: failed");
                Err(err)
            }
        }
    }
}

impl TrapezoidIntegrator {
    fn refine<F>(
        &self,
        stages: &mut TrapezoidStages,
        f: &F,
        budget: &mut EvaluationBudget,
    ) -> IntegrateResult<QuadResult>
    where
        F: UnivariateFunction + ?Sized,
    {
        let mut old = stages.stage(f, 0, budget)?.estimate;

        for i in 1..=self.policy.max_iterations() {
            let t = stages.stage(f, i, budget)?.estimate;
            if i >= self.policy.min_iterations() && self.policy.accepts(old, t) {
                return Ok(QuadResult {
                    integral: t,
                    error: (t - old).abs(),
                    neval: budget.used(),
                    iterations: i,
                });
            }
            old = t;
        }

        Err(IntegrateError::MaxIterationsExceeded {
            iterations: self.policy.max_iterations(),
        })
    }
}
