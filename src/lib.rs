//! Resumable: generators as explicit state machines
//!
//! A generator is a loop that yields values one at a time. Resumable runs
//! such loops without any native suspend/resume support by lowering them
//! into a persistent memory record, a closed position tag and a pure step
//! function that advances the record by one loop iteration per call.
//!
//! # Core Concepts
//!
//! - **Memory**: the only state carried between steps, a `Tag` plus slots
//! - **Position**: one closed enumeration variant per resume point
//! - **Tag::Done**: the terminal sentinel; once reached, stepping is a no-op
//! - **Step**: bounded work, at most one emitted value, explicit next tag
//!
//! The core is pure. `Machine`, the driving loops, budgets and checkpoints
//! form the shell around it.
//!
//! # Example
//!
//! ```rust
//! use resumable::core::NoInput;
//! use resumable::generators::even_fib;
//!
//! let mut fib = even_fib::init(50);
//! let mut emitted = Vec::new();
//! loop {
//!     let output = even_fib::step(&mut fib, NoInput);
//!     if output.valid() {
//!         emitted.extend(output.value().copied());
//!     }
//!     if output.done() {
//!         break;
//!     }
//! }
//!
//! assert_eq!(emitted, vec![0, 2, 8, 34]);
//! assert_eq!(fib.tag, even_fib::DONE);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod drive;
pub mod enforcement;
pub mod generators;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{step, Generator, Guard, Memory, NoInput, Output, Position, Resume, Tag};
pub use crate::machine::{Machine, Progress};
