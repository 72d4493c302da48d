//! Per-call bookkeeping of function evaluations.

use crate::integrate::error::{IntegrateError, IntegrateResult};

/// Counter of function evaluations performed by one integration call.
///
/// A budget is created fresh for every call and dropped on return. Work is
/// charged before it is done, so [`used`](Self::used) never exceeds
/// [`max`](Self::max).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationBudget {
    max: usize,
    used: usize,
}

impl EvaluationBudget {
    /// Create an empty budget allowing at most `max` evaluations.
    pub fn new(max: usize) -> Self {
        Self { max, used: 0 }
    }

    /// Reserve `evaluations` more function evaluations.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrateError::TooManyEvaluations`] and leaves the counter
    /// untouched when the reservation would go past the ceiling.
    pub fn consume(&mut self, evaluations: usize) -> IntegrateResult<()> {
        match self.used.checked_add(evaluations) {
            Some(total) if total <= self.max => {
                self.used = total;
                Ok(())
            }
            _ => Err(IntegrateError::TooManyEvaluations { max: self.max }),
        }
    }

    /// Evaluations charged so far.
    pub fn used(&self) -> usize {
        self.used
    }

    /// Ceiling for this call.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Evaluations still available.
    pub fn remaining(&self) -> usize {
        self.max - self.used
    }
}
