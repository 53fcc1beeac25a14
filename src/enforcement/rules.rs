//! Budget rules for driving loops using Validation.

use crate::config::MachineConfig;
use crate::enforcement::builder::BudgetBuilder;
use crate::enforcement::context::DriveContext;
use crate::enforcement::violations::{BudgetViolation, ViolationStrategy};
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for custom budget check functions
pub type BudgetCheck =
    Box<dyn Fn(&DriveContext) -> Validation<(), NonEmptyVec<BudgetViolation>> + Send + Sync>;

/// Limits a driving loop checks before every step.
///
/// The step function itself is total and never consults these rules; they
/// only bound how long a caller keeps stepping.
pub struct BudgetRules {
    pub(crate) max_steps: Option<u64>,
    pub(crate) max_emissions: Option<u64>,
    pub(crate) timeout: Option<Duration>,
    pub(crate) required_checks: Vec<BudgetCheck>,
    pub(crate) on_violation: ViolationStrategy,
}

impl BudgetRules {
    /// Rules with no limits at all.
    pub fn unlimited() -> Self {
        BudgetBuilder::new().build()
    }

    /// Rules carrying the limits named in a config.
    pub fn from_config(config: &MachineConfig) -> Self {
        let mut builder = BudgetBuilder::new();
        if let Some(max) = config.max_steps {
            builder = builder.max_steps(max);
        }
        if let Some(max) = config.max_emissions {
            builder = builder.max_emissions(max);
        }
        builder.build()
    }

    /// Check every rule, accumulating ALL violations.
    ///
    /// `context.steps` and `context.emitted` count work already done, so a
    /// limit of `max` permits exactly `max` steps or emitted values.
    pub fn enforce(&self, context: &DriveContext) -> Validation<(), NonEmptyVec<BudgetViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BudgetViolation>>> = Vec::new();

        if let Some(max) = self.max_steps {
            let check = if context.steps >= max {
                Validation::fail(BudgetViolation::StepLimitExceeded {
                    max,
                    steps: context.steps,
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        if let Some(max) = self.max_emissions {
            let check = if context.emitted >= max {
                Validation::fail(BudgetViolation::EmissionLimitExceeded {
                    max,
                    emitted: context.emitted,
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        if let Some(timeout) = self.timeout {
            let elapsed = context.elapsed();
            let check = if elapsed > timeout {
                Validation::fail(BudgetViolation::TimeoutExceeded { timeout, elapsed })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(context));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    pub fn violation_strategy(&self) -> ViolationStrategy {
        self.on_violation
    }
}

impl Default for BudgetRules {
    fn default() -> Self {
        Self::unlimited()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn context(steps: u64, emitted: u64) -> DriveContext {
        DriveContext {
            generator: "even_fib".to_string(),
            position: "Steady",
            steps,
            emitted,
            started_at: Utc::now(),
        }
    }

    #[test]
    fn enforcement_accumulates_all_violations() {
        let rules = BudgetBuilder::new()
            .max_steps(10)
            .max_emissions(2)
            .timeout(Duration::from_secs(5))
            .require_pred(|_ctx| false, "Custom check always fails".to_string())
            .build();

        let context = DriveContext {
            started_at: Utc::now() - chrono::Duration::seconds(10),
            ..context(12, 4)
        };

        match rules.enforce(&context) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 4);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, BudgetViolation::StepLimitExceeded { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, BudgetViolation::EmissionLimitExceeded { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, BudgetViolation::TimeoutExceeded { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, BudgetViolation::CustomCheckFailed { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn enforcement_succeeds_within_budget() {
        let rules = BudgetBuilder::new()
            .max_steps(11)
            .max_emissions(4)
            .timeout(Duration::from_secs(60))
            .require_pred(|ctx| ctx.generator == "even_fib", "wrong generator".to_string())
            .build();

        assert!(rules.enforce(&context(10, 3)).is_success());
    }

    #[test]
    fn step_limit_permits_exactly_max_steps() {
        let rules = BudgetBuilder::new().max_steps(3).build();

        assert!(rules.enforce(&context(2, 0)).is_success());
        assert!(rules.enforce(&context(3, 0)).is_failure());
    }

    #[test]
    fn emission_limit_permits_exactly_max_emissions() {
        let rules = BudgetBuilder::new().max_emissions(2).build();

        assert!(rules.enforce(&context(5, 1)).is_success());
        match rules.enforce(&context(5, 2)) {
            Validation::Failure(errors) => assert_eq!(
                errors.head(),
                &BudgetViolation::EmissionLimitExceeded { max: 2, emitted: 2 }
            ),
            Validation::Success(_) => panic!("Expected emission limit violation"),
        }
    }

    #[test]
    fn custom_validation_check_works() {
        let rules = BudgetBuilder::new()
            .require(|ctx: &DriveContext| {
                if ctx.position == "Entry" {
                    Validation::success(())
                } else {
                    Validation::fail(BudgetViolation::CustomCheckFailed {
                        message: "must not leave Entry".to_string(),
                    })
                }
            })
            .build();

        assert!(rules.enforce(&context(1, 0)).is_failure());
    }

    #[test]
    fn unlimited_rules_never_fail() {
        let rules = BudgetRules::unlimited();
        assert!(rules.enforce(&context(u64::MAX, u64::MAX)).is_success());
    }

    #[test]
    fn config_limits_become_rules() {
        let config = MachineConfig::default().max_steps(5).max_emissions(1);
        let rules = BudgetRules::from_config(&config);

        assert!(rules.enforce(&context(4, 0)).is_success());
        assert!(rules.enforce(&context(4, 1)).is_failure());
        assert!(rules.enforce(&context(5, 0)).is_failure());
        assert_eq!(rules.violation_strategy(), ViolationStrategy::Abort);
    }

    #[test]
    fn violation_strategy_is_stored() {
        let rules = BudgetBuilder::new()
            .on_violation(ViolationStrategy::IgnoreAndLog)
            .build();

        assert_eq!(rules.violation_strategy(), ViolationStrategy::IgnoreAndLog);
    }
}
