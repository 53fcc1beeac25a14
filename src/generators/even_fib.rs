//! Even Fibonacci terms below a bound.
//!
//! Lowered from:
//!
//! ```text
//! def even_fib(n):
//!     i = 0
//!     a = 0
//!     b = 1
//!     while a < n:
//!         if a % 2 == 0:
//!             yield a
//!         temp = a + b
//!         a = b
//!         b = temp
//!         i = i + 1
//! ```
//!
//! Two resume points: `Entry` runs the first iteration against the declared
//! initial values, `Steady` runs every later one against the slots.
//!
//! # Example
//!
//! ```rust
//! use resumable::core::NoInput;
//! use resumable::generators::even_fib;
//!
//! let mut fib = even_fib::init(50);
//! let mut sum = 0;
//! while fib.tag != even_fib::DONE {
//!     if let Some(value) = even_fib::step(&mut fib, NoInput).into_value() {
//!         sum += value;
//!     }
//! }
//! assert_eq!(sum, 44);
//! ```

use crate::core::{Generator, Memory, MemoryOf, NoInput, Output, Resume, Tag};
use crate::positions;
use serde::{Deserialize, Serialize};

const A0: i64 = 0;
const B0: i64 = 1;
const I0: i64 = 0;

positions! {
    /// Resume points of [`EvenFib`].
    pub enum FibPosition {
        /// Before any iteration.
        Entry,
        /// Steady iteration.
        Steady,
    }
    initial: Entry
}

/// Locals live across the yield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FibSlots {
    /// Current term.
    pub a: i64,
    /// Next term.
    pub b: i64,
    /// Completed iterations.
    pub i: i64,
    /// Exclusive upper bound on emitted terms.
    pub n: i64,
}

/// Initialization parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvenFibParams {
    pub bound: i64,
}

impl From<i64> for EvenFibParams {
    fn from(bound: i64) -> Self {
        Self { bound }
    }
}

pub type FibMemory = Memory<FibPosition, FibSlots>;

/// Terminal sentinel for [`FibMemory::tag`].
pub const DONE: Tag<FibPosition> = Tag::Done;

/// The even Fibonacci generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct EvenFib;

impl EvenFib {
    fn iterate(a: i64, b: i64, i: i64, n: i64) -> Resume<FibPosition, FibSlots, i64> {
        if a >= n {
            return Resume::Exhausted;
        }
        let slots = FibSlots {
            a: b,
            b: a.saturating_add(b),
            i: i + 1,
            n,
        };
        if a % 2 == 0 {
            Resume::yielded(FibPosition::Steady, slots, a)
        } else {
            Resume::advance(FibPosition::Steady, slots)
        }
    }
}

impl Generator for EvenFib {
    type Params = EvenFibParams;
    type Slots = FibSlots;
    type Position = FibPosition;
    type Input = NoInput;
    type Value = i64;

    fn name(&self) -> &str {
        "even_fib"
    }

    fn init(&self, params: EvenFibParams) -> MemoryOf<Self> {
        Memory::new(FibSlots {
            a: A0,
            b: B0,
            i: I0,
            n: params.bound,
        })
    }

    fn resume(
        &self,
        at: FibPosition,
        original: &FibSlots,
        _: NoInput,
    ) -> Resume<FibPosition, FibSlots, i64> {
        match at {
            FibPosition::Entry => Self::iterate(A0, B0, I0, original.n),
            FibPosition::Steady => Self::iterate(original.a, original.b, original.i, original.n),
        }
    }
}

/// Build a fresh record for terms below `bound`.
pub fn init(bound: i64) -> FibMemory {
    EvenFib.init(EvenFibParams { bound })
}

/// Advance `fib` by one loop iteration.
pub fn step(fib: &mut FibMemory, input: NoInput) -> Output<i64> {
    crate::core::step(&EvenFib, fib, input)
}

/// The same sequence computed by the plain loop.
pub fn run_direct(n: i64) -> Vec<i64> {
    let mut out = Vec::new();
    let (mut a, mut b) = (A0, B0);
    while a < n {
        if a % 2 == 0 {
            out.push(a);
        }
        let temp = a.saturating_add(b);
        a = b;
        b = temp;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(fib: &mut FibMemory) -> Vec<i64> {
        let mut out = Vec::new();
        loop {
            let output = step(fib, NoInput);
            if let Some(value) = output.value() {
                out.push(*value);
            }
            if output.done() {
                break;
            }
        }
        out
    }

    #[test]
    fn bound_fifty_emits_even_terms() {
        let mut fib = init(50);
        let emitted = drain(&mut fib);

        assert_eq!(emitted, vec![0, 2, 8, 34]);
        assert_eq!(emitted.iter().sum::<i64>(), 44);
    }

    #[test]
    fn init_sets_declared_locals() {
        let fib = EvenFib.init(EvenFibParams { bound: 50 });

        assert_eq!(fib.tag, Tag::At(FibPosition::Entry));
        assert_eq!(
            fib.slots,
            FibSlots {
                a: 0,
                b: 1,
                i: 0,
                n: 50
            }
        );
    }

    #[test]
    fn entry_moves_to_steady_after_first_iteration() {
        let mut fib = init(50);

        let output = step(&mut fib, NoInput);

        assert_eq!(output.value(), Some(&0));
        assert_eq!(fib.tag, Tag::At(FibPosition::Steady));
        assert_eq!(
            fib.slots,
            FibSlots {
                a: 1,
                b: 1,
                i: 1,
                n: 50
            }
        );
    }

    #[test]
    fn odd_term_advances_without_emitting() {
        let original = FibSlots {
            a: 0,
            b: 1,
            i: 0,
            n: 50,
        };

        let resumed = EvenFib.resume(FibPosition::Steady, &FibSlots { a: 1, ..original }, NoInput);

        assert!(matches!(
            resumed,
            Resume::Continue {
                next: FibPosition::Steady,
                emitted: None,
                ..
            }
        ));
    }

    #[test]
    fn each_step_runs_one_iteration() {
        let mut fib = init(50);
        let mut previous = fib.slots;

        while !fib.is_done() {
            step(&mut fib, NoInput);
            if fib.is_done() {
                assert_eq!(fib.slots, previous);
                break;
            }
            assert_eq!(fib.slots.i, previous.i + 1);
            assert_eq!(fib.slots.a, previous.b);
            assert_eq!(fib.slots.b, previous.a + previous.b);
            assert_eq!(fib.slots.n, previous.n);
            previous = fib.slots;
        }
    }

    #[test]
    fn bound_fifty_takes_eleven_steps() {
        let mut fib = init(50);
        let mut steps = 0;
        while fib.tag != DONE {
            step(&mut fib, NoInput);
            steps += 1;
        }

        // Ten terms below 50, plus the step that observes the guard failing.
        assert_eq!(steps, 11);
        assert_eq!(fib.slots.i, 10);
    }

    #[test]
    fn non_positive_bound_finishes_on_first_step() {
        for bound in [0, -1, i64::MIN] {
            let mut fib = init(bound);
            let output = step(&mut fib, NoInput);

            assert!(output.done());
            assert!(!output.valid());
            assert_eq!(fib.tag, DONE);
        }
    }

    #[test]
    fn termination_is_idempotent() {
        let mut fib = init(10);
        drain(&mut fib);
        let finished = fib.clone();

        for _ in 0..5 {
            let output = step(&mut fib, NoInput);
            assert!(output.done());
            assert!(!output.valid());
            assert_eq!(fib, finished);
        }
    }

    #[test]
    fn huge_bound_still_terminates() {
        let mut fib = init(i64::MAX);
        let emitted = drain(&mut fib);

        assert_eq!(emitted, run_direct(i64::MAX));
        assert!(fib.is_done());
    }

    #[test]
    fn matches_direct_loop() {
        for bound in [1, 2, 3, 9, 50, 1_000, 4_000_000] {
            let mut fib = init(bound);
            assert_eq!(drain(&mut fib), run_direct(bound), "bound {bound}");
        }
    }
}
