//! The first `n` Fibonacci terms.
//!
//! Lowered from:
//!
//! ```text
//! def fib(n):
//!     a = 0
//!     b = 1
//!     count = 0
//!     while count < n:
//!         count += 1
//!         yield a
//!         temp = a + b
//!         a = b
//!         b = temp
//! ```
//!
//! The loop has a single yield, so there is one resume point and every
//! iteration emits.

use crate::core::{Generator, Memory, MemoryOf, NoInput, Resume};
use crate::positions;
use serde::{Deserialize, Serialize};

positions! {
    pub enum CountedPosition {
        Head,
    }
    initial: Head
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountedSlots {
    pub a: i64,
    pub b: i64,
    pub count: u64,
    pub n: u64,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Fib;

impl Generator for Fib {
    type Params = u64;
    type Slots = CountedSlots;
    type Position = CountedPosition;
    type Input = NoInput;
    type Value = i64;

    fn name(&self) -> &str {
        "fib"
    }

    fn init(&self, n: u64) -> MemoryOf<Self> {
        Memory::new(CountedSlots {
            a: 0,
            b: 1,
            count: 0,
            n,
        })
    }

    fn resume(
        &self,
        at: CountedPosition,
        original: &CountedSlots,
        _: NoInput,
    ) -> Resume<CountedPosition, CountedSlots, i64> {
        match at {
            CountedPosition::Head if original.count < original.n => Resume::yielded(
                CountedPosition::Head,
                CountedSlots {
                    a: original.b,
                    b: original.a.saturating_add(original.b),
                    count: original.count + 1,
                    n: original.n,
                },
                original.a,
            ),
            CountedPosition::Head => Resume::Exhausted,
        }
    }
}

/// The same sequence computed by the plain loop.
pub fn run_direct(n: u64) -> Vec<i64> {
    let (mut a, mut b) = (0i64, 1i64);
    let mut out = Vec::new();
    for _ in 0..n {
        out.push(a);
        let temp = a.saturating_add(b);
        a = b;
        b = temp;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{step, Tag};

    #[test]
    fn emits_first_terms() {
        let mut memory = Fib.init(8);
        let mut out = Vec::new();
        while !memory.is_done() {
            if let Some(value) = step(&Fib, &mut memory, NoInput).into_value() {
                out.push(value);
            }
        }

        assert_eq!(out, vec![0, 1, 1, 2, 3, 5, 8, 13]);
    }

    #[test]
    fn every_live_step_emits() {
        let mut memory = Fib.init(5);
        for _ in 0..5 {
            let output = step(&Fib, &mut memory, NoInput);
            assert!(output.valid());
            assert_eq!(memory.tag, Tag::At(CountedPosition::Head));
        }

        let output = step(&Fib, &mut memory, NoInput);
        assert!(output.done());
        assert!(!output.valid());
    }

    #[test]
    fn zero_count_is_empty() {
        let mut memory = Fib.init(0);
        assert!(step(&Fib, &mut memory, NoInput).done());
    }

    #[test]
    fn direct_loop_agrees() {
        assert_eq!(run_direct(8), vec![0, 1, 1, 2, 3, 5, 8, 13]);
    }
}
