//! Memory, input and output records.
//!
//! The memory record is the only state a generator carries between steps.
//! Input records are supplied fresh on each step and never persisted. Output
//! records describe what a single step produced.

use super::position::{Position, Tag};
use serde::{Deserialize, Serialize};

/// Complete persistent state of one generator instance.
///
/// `tag` selects the transition that runs next. `slots` holds every local
/// that is live across a yield point. Each instance owns its record; stepping
/// one record never touches another.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory<P, S> {
    pub tag: Tag<P>,
    pub slots: S,
}

impl<P: Position, S> Memory<P, S> {
    /// Create a record positioned at the generator's initial resume point.
    pub fn new(slots: S) -> Self {
        Self {
            tag: Tag::initial(),
            slots,
        }
    }

    /// Check whether the record has reached the terminal sentinel.
    pub fn is_done(&self) -> bool {
        self.tag.is_done()
    }
}

/// Input record for generators that consume nothing per step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoInput;

/// Result of one step.
///
/// A step emits at most one value. The payload is only present when the step
/// emitted, so an invalid output cannot carry a stale value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output<V> {
    value: Option<V>,
    done: bool,
}

impl<V> Output<V> {
    /// An output carrying an emitted value.
    pub fn emit(value: V) -> Self {
        Self {
            value: Some(value),
            done: false,
        }
    }

    /// An iteration ran but did not emit.
    pub fn skip() -> Self {
        Self {
            value: None,
            done: false,
        }
    }

    /// The generator is (or already was) exhausted.
    pub fn finished() -> Self {
        Self {
            value: None,
            done: true,
        }
    }

    /// Whether this step emitted a value.
    pub fn valid(&self) -> bool {
        self.value.is_some()
    }

    /// Whether the generator has reached its terminal state.
    pub fn done(&self) -> bool {
        self.done
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<V> {
        self.value
    }
}

impl<V> From<Option<V>> for Output<V> {
    fn from(emitted: Option<V>) -> Self {
        match emitted {
            Some(value) => Self::emit(value),
            None => Self::skip(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
    enum TestPosition {
        Head,
    }

    impl Position for TestPosition {
        const INITIAL: Self = Self::Head;

        fn name(&self) -> &'static str {
            "Head"
        }
    }

    #[test]
    fn new_memory_starts_at_initial_position() {
        let memory: Memory<TestPosition, u32> = Memory::new(7);
        assert_eq!(memory.tag, Tag::At(TestPosition::Head));
        assert_eq!(memory.slots, 7);
        assert!(!memory.is_done());
    }

    #[test]
    fn emitted_output_is_valid_and_live() {
        let output = Output::emit(34);
        assert!(output.valid());
        assert!(!output.done());
        assert_eq!(output.value(), Some(&34));
        assert_eq!(output.into_value(), Some(34));
    }

    #[test]
    fn skipped_output_carries_no_value() {
        let output: Output<i64> = Output::skip();
        assert!(!output.valid());
        assert!(!output.done());
        assert_eq!(output.value(), None);
    }

    #[test]
    fn finished_output_is_done_and_invalid() {
        let output: Output<i64> = Output::finished();
        assert!(output.done());
        assert!(!output.valid());
    }

    #[test]
    fn option_converts_to_output() {
        assert_eq!(Output::from(Some(2)), Output::emit(2));
        assert_eq!(Output::<i64>::from(None), Output::skip());
    }

    #[test]
    fn memory_serializes_correctly() {
        let memory: Memory<TestPosition, (i64, i64)> = Memory {
            tag: Tag::Done,
            slots: (3, 5),
        };
        let json = serde_json::to_string(&memory).unwrap();
        let deserialized: Memory<TestPosition, (i64, i64)> = serde_json::from_str(&json).unwrap();
        assert_eq!(memory, deserialized);
    }
}
