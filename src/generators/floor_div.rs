//! Floor quotients of every pair below a bound.
//!
//! Lowered from:
//!
//! ```text
//! def floor_div(n):
//!     i = 1
//!     while i < n:
//!         j = 1
//!         while j < n:
//!             yield i // j
//!             j += 1
//!         i += 1
//! ```
//!
//! Each loop head is its own resume point. A step at `Outer` either finishes
//! or enters the inner loop without emitting; a step at `Inner` either emits
//! one quotient or leaves the inner loop.

use crate::core::{Generator, Memory, MemoryOf, NoInput, Resume};
use crate::positions;
use serde::{Deserialize, Serialize};

positions! {
    pub enum NestedPosition {
        /// Head of the outer loop.
        Outer,
        /// Head of the inner loop.
        Inner,
    }
    initial: Outer
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedSlots {
    pub i: i64,
    pub j: i64,
    pub n: i64,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FloorDiv;

impl Generator for FloorDiv {
    type Params = i64;
    type Slots = NestedSlots;
    type Position = NestedPosition;
    type Input = NoInput;
    type Value = i64;

    fn name(&self) -> &str {
        "floor_div"
    }

    fn init(&self, n: i64) -> MemoryOf<Self> {
        Memory::new(NestedSlots { i: 1, j: 0, n })
    }

    fn resume(
        &self,
        at: NestedPosition,
        original: &NestedSlots,
        _: NoInput,
    ) -> Resume<NestedPosition, NestedSlots, i64> {
        let NestedSlots { i, j, n } = *original;
        match at {
            NestedPosition::Outer if i < n => {
                Resume::advance(NestedPosition::Inner, NestedSlots { i, j: 1, n })
            }
            NestedPosition::Outer => Resume::Exhausted,
            NestedPosition::Inner if j < n => {
                Resume::yielded(NestedPosition::Inner, NestedSlots { i, j: j + 1, n }, i / j)
            }
            NestedPosition::Inner => {
                Resume::advance(NestedPosition::Outer, NestedSlots { i: i + 1, j, n })
            }
        }
    }
}

/// The same sequence computed by the plain loops.
pub fn run_direct(n: i64) -> Vec<i64> {
    let mut out = Vec::new();
    let mut i = 1;
    while i < n {
        let mut j = 1;
        while j < n {
            out.push(i / j);
            j += 1;
        }
        i += 1;
    }
    out
}
