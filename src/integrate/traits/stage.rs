use crate::integrate::budget::EvaluationBudget;
use crate::integrate::error::IntegrateResult;
use crate::integrate::traits::UnivariateFunction;

/// One refinement level produced by a [`StageProvider`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    /// Approximation of the integral at this level.
    pub estimate: f64,
    /// Function evaluations this level performed.
    pub evaluations: usize,
}

/// Source of successively refined estimates for the extrapolation engine.
///
/// Stage `i` must use twice as many subintervals as stage `i - 1` so that
/// the leading error term shrinks by a factor of four between levels.
/// Implementations charge `budget` before evaluating the function.
pub trait StageProvider {
    /// Compute refinement level `index`.
    fn stage<F>(
        &mut self,
        f: &F,
        index: usize,
        budget: &mut EvaluationBudget,
    ) -> IntegrateResult<Stage>
    where
        F: UnivariateFunction + ?Sized;
}
