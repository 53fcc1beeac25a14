//! Running totals of values supplied one per step.
//!
//! Lowered from:
//!
//! ```text
//! def running_sum(count):
//!     total = 0
//!     taken = 0
//!     while taken < count:
//!         x = yield total
//!         total = total + x
//!         taken = taken + 1
//! ```
//!
//! The value sent in at each resume arrives as the step's input. It is
//! folded into `total` and then dropped; the memory record never holds an
//! input, only what the loop keeps across the yield.
//!
//! # Example
//!
//! ```rust
//! use resumable::core::{step, Generator};
//! use resumable::generators::running_sum::{RunningSum, Sample};
//!
//! let mut sums = RunningSum.init(3);
//! assert_eq!(step(&RunningSum, &mut sums, Sample(4)).into_value(), Some(4));
//! assert_eq!(step(&RunningSum, &mut sums, Sample(6)).into_value(), Some(10));
//! assert_eq!(step(&RunningSum, &mut sums, Sample(-1)).into_value(), Some(9));
//! assert!(step(&RunningSum, &mut sums, Sample(100)).done());
//! ```

use crate::core::{Generator, Memory, MemoryOf, Resume};
use crate::positions;
use serde::{Deserialize, Serialize};

positions! {
    pub enum SumPosition {
        Head,
    }
    initial: Head
}

/// One value sent into the generator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sample(pub i64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumSlots {
    pub total: i64,
    pub taken: u64,
    pub count: u64,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RunningSum;

impl Generator for RunningSum {
    type Params = u64;
    type Slots = SumSlots;
    type Position = SumPosition;
    type Input = Sample;
    type Value = i64;

    fn name(&self) -> &str {
        "running_sum"
    }

    fn init(&self, count: u64) -> MemoryOf<Self> {
        Memory::new(SumSlots {
            total: 0,
            taken: 0,
            count,
        })
    }

    fn resume(
        &self,
        at: SumPosition,
        original: &SumSlots,
        Sample(x): Sample,
    ) -> Resume<SumPosition, SumSlots, i64> {
        match at {
            SumPosition::Head if original.taken < original.count => {
                let total = original.total.saturating_add(x);
                let slots = SumSlots {
                    total,
                    taken: original.taken + 1,
                    count: original.count,
                };
                Resume::yielded(SumPosition::Head, slots, total)
            }
            SumPosition::Head => Resume::Exhausted,
        }
    }
}

/// The same totals computed by a plain loop over the first `count` values.
pub fn run_direct(values: &[i64], count: u64) -> Vec<i64> {
    let mut total = 0i64;
    values
        .iter()
        .copied()
        .chain(std::iter::repeat(0))
        .take(count as usize)
        .map(|x| {
            total = total.saturating_add(x);
            total
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{step, Tag};
    use crate::drive::{collect_until_done, collect_while_live, emissions_with};

    fn feed(values: &[i64]) -> impl FnMut() -> Sample + '_ {
        let mut values = values.iter().copied();
        move || Sample(values.next().unwrap_or_default())
    }

    #[test]
    fn each_step_folds_its_input() {
        let mut memory = RunningSum.init(4);
        let mut out = Vec::new();
        for x in [3, 5, -2, 10] {
            out.extend(step(&RunningSum, &mut memory, Sample(x)).into_value());
        }

        assert_eq!(out, vec![3, 8, 6, 16]);
        assert_eq!(
            memory.slots,
            SumSlots {
                total: 16,
                taken: 4,
                count: 4
            }
        );
    }

    #[test]
    fn input_after_count_is_ignored() {
        let mut memory = RunningSum.init(1);
        step(&RunningSum, &mut memory, Sample(7));
        let before = memory.slots;

        let output = step(&RunningSum, &mut memory, Sample(1_000));

        assert!(output.done());
        assert!(!output.valid());
        assert_eq!(memory.tag, Tag::Done);
        assert_eq!(memory.slots, before);
    }

    #[test]
    fn record_holds_no_input() {
        let mut memory = RunningSum.init(2);
        step(&RunningSum, &mut memory, Sample(42));

        let json = serde_json::to_value(&memory).unwrap();

        assert_eq!(json["slots"]["total"], 42);
        assert_eq!(json["slots"].as_object().map(|slots| slots.len()), Some(3));
    }

    #[test]
    fn same_record_different_inputs_diverge() {
        let start = RunningSum.init(2);
        let mut first = start.clone();
        let mut second = start.clone();

        let a = step(&RunningSum, &mut first, Sample(1));
        let b = step(&RunningSum, &mut second, Sample(2));

        assert_ne!(a, b);
        assert_eq!(start, RunningSum.init(2));
    }

    #[test]
    fn protocols_consume_inputs_in_order() {
        let values = [1, 2, 3, 4, 5];
        let mut first = RunningSum.init(5);
        let mut second = RunningSum.init(5);

        let by_tag = collect_while_live(&RunningSum, &mut first, feed(&values));
        let by_flag = collect_until_done(&RunningSum, &mut second, feed(&values));

        assert_eq!(by_tag, vec![1, 3, 6, 10, 15]);
        assert_eq!(by_tag, by_flag);
        assert_eq!(by_tag, run_direct(&values, 5));
    }

    #[test]
    fn emissions_with_draws_one_input_per_step() {
        let mut memory = RunningSum.init(3);
        let mut drawn = 0;
        let inputs = || {
            drawn += 1;
            Sample(10)
        };

        let totals: Vec<i64> = emissions_with(&RunningSum, &mut memory, inputs).collect();

        assert_eq!(totals, vec![10, 20, 30]);
        // Three emitting steps plus the one that observes exhaustion.
        assert_eq!(drawn, 4);
    }

    #[test]
    fn zero_count_emits_nothing() {
        let mut memory = RunningSum.init(0);
        assert!(collect_until_done(&RunningSum, &mut memory, feed(&[9])).is_empty());
    }
}
