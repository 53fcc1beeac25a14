//! Builder API for creating budget rules.

use crate::enforcement::context::DriveContext;
use crate::enforcement::rules::{BudgetCheck, BudgetRules};
use crate::enforcement::violations::{BudgetViolation, ViolationStrategy};
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Fluent construction of [`BudgetRules`].
pub struct BudgetBuilder {
    max_steps: Option<u64>,
    max_emissions: Option<u64>,
    timeout: Option<Duration>,
    required_checks: Vec<BudgetCheck>,
    on_violation: ViolationStrategy,
}

impl BudgetBuilder {
    pub fn new() -> Self {
        Self {
            max_steps: None,
            max_emissions: None,
            timeout: None,
            required_checks: Vec::new(),
            on_violation: ViolationStrategy::Abort,
        }
    }

    /// Set the maximum number of step calls
    pub fn max_steps(mut self, n: u64) -> Self {
        self.max_steps = Some(n);
        self
    }

    /// Set the maximum number of emitted values
    pub fn max_emissions(mut self, n: u64) -> Self {
        self.max_emissions = Some(n);
        self
    }

    /// Bound the wall-clock time of one drive.
    pub fn timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    /// Add a check that may report several violations at once.
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&DriveContext) -> Validation<(), NonEmptyVec<BudgetViolation>>
            + Send
            + Sync
            + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a predicate that must hold before every step; `message` is
    /// reported when it does not.
    pub fn require_pred<F>(self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&DriveContext) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        self.require(move |ctx: &DriveContext| {
            if predicate(ctx) {
                return Validation::success(());
            }
            Validation::fail(BudgetViolation::CustomCheckFailed {
                message: message.clone(),
            })
        })
    }

    /// Choose between aborting the drive and logging on violation.
    pub fn on_violation(mut self, strategy: ViolationStrategy) -> Self {
        self.on_violation = strategy;
        self
    }

    pub fn build(self) -> BudgetRules {
        BudgetRules {
            max_steps: self.max_steps,
            max_emissions: self.max_emissions,
            timeout: self.timeout,
            required_checks: self.required_checks,
            on_violation: self.on_violation,
        }
    }
}

impl Default for BudgetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
