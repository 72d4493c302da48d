//! Romberg integration using Richardson extrapolation.
//!
//! Each trapezoid stage halves the step `h`. Because the trapezoid error
//! expands in even powers of `h`, combining two adjacent levels with weight
//! `1 / (4^j - 1)` cancels the `h^(2j)` term. Column `j` of the table therefore
//! depends only on columns `j - 1` of the current and previous rows, so two
//! rows are enough to run the whole extrapolation.

use tracing::{debug, trace};

use crate::integrate::budget::EvaluationBudget;
use crate::integrate::error::{IntegrateError, IntegrateResult};
use crate::integrate::policy::{IntegrationPolicy, ROMBERG_MAX_ITERATIONS_COUNT};
use crate::integrate::quadrature::trapezoid::TrapezoidStages;
use crate::integrate::traits::{
    QuadResult, StageProvider, UnivariateFunction, UnivariateIntegrator, verify_interval,
};

/// The two live rows of a Romberg table.
///
/// Both rows are allocated once with room for `max_iterations + 1` columns.
/// Pushing a new trapezoid estimate swaps them, so the old current row becomes
/// the previous row and its storage is reused for the new one.
///
/// # Example
///
/// ```
/// use quadr::integrate::RombergTable;
///
/// let mut table = RombergTable::new(4).unwrap();
/// table.push(0.5).unwrap();
/// let best = table.push(0.375).unwrap();
/// // Column 1 is Simpson's rule
/// assert!((best - 1.0 / 3.0).abs() < 1e-15);
/// assert_eq!(table.row().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RombergTable {
    previous: Vec<f64>,
    current: Vec<f64>,
    rows: usize,
}

impl RombergTable {
    /// Allocate a table for stages `0..=max_iterations`.
    ///
    /// # Errors
    ///
    /// [`IntegrateError::IterationCeilingExceeded`] if `max_iterations` is
    /// above [`ROMBERG_MAX_ITERATIONS_COUNT`].
    pub fn new(max_iterations: usize) -> IntegrateResult<Self> {
        if max_iterations > ROMBERG_MAX_ITERATIONS_COUNT {
            return Err(IntegrateError::IterationCeilingExceeded {
                requested: max_iterations,
                ceiling: ROMBERG_MAX_ITERATIONS_COUNT,
            });
        }

        let width = max_iterations + 1;
        Ok(Self {
            previous: vec![0.0; width],
            current: vec![0.0; width],
            rows: 0,
        })
    }

    /// Append the trapezoid estimate of the next stage and extrapolate.
    ///
    /// Returns the most extrapolated entry of the new row.
    ///
    /// # Errors
    ///
    /// [`IntegrateError::MaxIterationsExceeded`] if the table already holds
    /// `max_iterations + 1` rows.
    pub fn push(&mut self, trapezoid: f64) -> IntegrateResult<f64> {
        let i = self.rows;
        if i >= self.current.len() {
            return Err(IntegrateError::MaxIterationsExceeded {
                iterations: self.current.len() - 1,
            });
        }

        std::mem::swap(&mut self.previous, &mut self.current);
        self.current[0] = trapezoid;

        // Richardson extrapolation
        for j in 1..=i {
            let r = 4.0_f64.powi(j as i32) - 1.0;
            let t_ij_m1 = self.current[j - 1];
            self.current[j] = t_ij_m1 + (t_ij_m1 - self.previous[j - 1]) / r;
        }

        self.rows += 1;
        Ok(self.current[i])
    }

    /// Current row, one entry per extrapolation order.
    pub fn row(&self) -> &[f64] {
        &self.current[..self.rows]
    }

    /// Number of rows pushed so far.
    pub fn rows(&self) -> usize {
        self.rows
    }
}

/// Romberg integrator.
///
/// Refines the trapezoid rule stage by stage and extrapolates after each
/// stage. The call stops once two successive diagonal estimates pass the
/// policy's convergence test, and fails if the iteration ceiling or the
/// evaluation budget is reached first. No partial estimate is returned on
/// failure.
///
/// # Example
///
/// ```
/// use quadr::integrate::{RombergIntegrator, UnivariateIntegrator};
///
/// // Integrate exp(x) from 0 to 1 = e - 1
/// let integrator = RombergIntegrator::new(1e-10, 1e-12, 3, 16).unwrap();
/// let result = integrator
///     .integrate_with_report(10_000, &|x: f64| x.exp(), 0.0, 1.0)
///     .unwrap();
/// let exact = std::f64::consts::E - 1.0;
/// assert!((result.integral - exact).abs() < 1e-10);
/// assert!(result.neval <= 10_000);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RombergIntegrator {
    policy: IntegrationPolicy,
}

impl RombergIntegrator {
    /// Build an integrator from explicit accuracies and iteration bounds.
    ///
    /// `max_iterations` may not exceed
    /// [`ROMBERG_MAX_ITERATIONS_COUNT`](crate::integrate::ROMBERG_MAX_ITERATIONS_COUNT).
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

    /// Run the extrapolation over an arbitrary stage source.
    ///
    /// Stage 0 seeds the table; stages `1..=max_iterations` each add a row.
    /// Evaluations are charged to `budget` by the stage source.
    pub fn integrate_stages<S, F>(
        &self,
        stages: &mut S,
        f: &F,
        budget: &mut EvaluationBudget,
    ) -> IntegrateResult<QuadResult>
    where
        S: StageProvider,
        F: UnivariateFunction + ?Sized,
    {
        let policy = &self.policy;
        let mut table = RombergTable::new(policy.max_iterations())?;

        let mut olds = table.push(stages.stage(f, 0, budget)?.estimate)?;

        for i in 1..=policy.max_iterations() {
            let stage = stages.stage(f, i, budget)?;
            let s = table.push(stage.estimate)?;
            let delta = (s - olds).abs();
            trace!(
                iteration = i,
                estimate = s,
                delta,
                evaluations = stage.evaluations,
                "romberg row"
            );

            // Check convergence
            if i >= policy.min_iterations() && policy.accepts(olds, s) {
                return Ok(QuadResult {
                    integral: s,
                    error: delta,
                    neval: budget.used(),
                    iterations: i,
                });
            }
            olds = s;
        }

        Err(IntegrateError::MaxIterationsExceeded {
            iterations: policy.max_iterations(),
        })
    }
}

impl UnivariateIntegrator for RombergIntegrator {
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
        verify_interval(lower, upper, "romberg")?;
        debug!(lower, upper, max_evaluations, "romberg: start");

        let mut budget = EvaluationBudget::new(max_evaluations);
        let mut stages = TrapezoidStages::new(lower, upper);
        match self.integrate_stages(&mut stages, f, &mut budget) {
            Ok(result) => {
                debug!(
                    iterations = result.iterations,
                    neval = result.neval,
                    integral = result.integral,
                    "romberg: converged"
                );
                Ok(result)
            }
            Err(err) => {
                debug!(neval = budget.used(), error = %err, "romberg: failed");
                Err(err)
            }
        }
    }
}
