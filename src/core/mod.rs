//! Core generator types and the step operation.
//!
//! This module contains the pure functional core:
//! - Resume points via the `Position` trait and the `Tag` sentinel
//! - Memory, input and output records
//! - The `Generator` contract and the `step` dispatch
//! - Loop guards and step traces
//!
//! Nothing in this module performs I/O or keeps hidden state. A memory
//! record is the only thing that changes between steps.

mod generator;
mod guard;
mod memory;
mod position;
mod trace;

pub use generator::{step, Generator, MemoryOf, Resume};
pub use guard::Guard;
pub use memory::{Memory, NoInput, Output};
pub use position::{Position, Tag};
pub use trace::{StepRecord, StepTrace};
