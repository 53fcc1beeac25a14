//! Step budgets for driving loops.
//!
//! A generator whose guard never fails would keep a driving loop busy
//! forever. Budget rules bound the number of steps, the number of emitted
//! values and the wall-clock time a driver spends, and report every rule
//! that was broken rather than only the first one.
//!
//! # Example
//!
//! ```rust
//! use resumable::enforcement::{BudgetBuilder, BudgetRules, ViolationStrategy};
//! use std::time::Duration;
//!
//! let rules: BudgetRules = BudgetBuilder::new()
//!     .max_steps(1_000)
//!     .timeout(Duration::from_secs(1))
//!     .on_violation(ViolationStrategy::Abort)
//!     .build();
//! ```

pub mod builder;
pub mod context;
pub mod rules;
pub mod violations;

pub use builder::BudgetBuilder;
pub use context::DriveContext;
pub use rules::{BudgetCheck, BudgetRules};
pub use violations::{BudgetViolation, ViolationStrategy};
