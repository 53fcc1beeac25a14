//! Budget violations and handling strategies.

use std::time::Duration;
use thiserror::Error;

/// Ways a driving loop can overrun its budget.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BudgetViolation {
    #[error("Step limit ({max}) exceeded (steps: {steps})")]
    StepLimitExceeded { max: u64, steps: u64 },

    #[error("Emission limit ({max}) exceeded (emitted: {emitted})")]
    EmissionLimitExceeded { max: u64, emitted: u64 },

    #[error("Timeout ({timeout:?}) exceeded (elapsed: {elapsed:?})")]
    TimeoutExceeded {
        timeout: Duration,
        elapsed: Duration,
    },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}

/// Strategy for handling budget violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationStrategy {
    /// Stop driving and report the violations
    Abort,

    /// Keep driving but log a warning
    IgnoreAndLog,
}
