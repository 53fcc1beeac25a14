//! Step trace tracking.
//!
//! An ordered log of the tag movements a generator instance went through.
//! The trace lives outside the memory record and has no influence on the
//! step function.

use super::position::{Position, Tag};
use serde::{Deserialize, Serialize};

/// Record of a single step.
///
/// # Example
///
/// ```rust
/// use resumable::core::{StepRecord, Tag};
/// use resumable::generators::even_fib::FibPosition;
///
/// let record = StepRecord {
///     index: 0,
///     from: Tag::At(FibPosition::Entry),
///     to: Tag::At(FibPosition::Steady),
///     emitted: true,
/// };
/// assert!(!record.is_terminal_hit());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StepRecord<P: Position> {
    /// Zero-based index of the step within the instance's lifetime
    pub index: u64,
    /// Tag before the step
    pub from: Tag<P>,
    /// Tag after the step
    pub to: Tag<P>,
    /// Whether the step emitted a value
    pub emitted: bool,
}

impl<P: Position> StepRecord<P> {
    /// Whether this step is the one that moved the tag onto the sentinel.
    pub fn is_terminal_hit(&self) -> bool {
        !self.from.is_done() && self.to.is_done()
    }
}

/// Ordered trace of steps.
///
/// The trace is immutable: `record` returns a new trace with the step added.
///
/// # Example
///
/// ```rust
/// use resumable::core::{StepRecord, StepTrace, Tag};
/// use resumable::generators::even_fib::FibPosition;
///
/// let trace = StepTrace::new()
///     .record(StepRecord {
///         index: 0,
///         from: Tag::At(FibPosition::Entry),
///         to: Tag::At(FibPosition::Steady),
///         emitted: true,
///     })
///     .record(StepRecord {
///         index: 1,
///         from: Tag::At(FibPosition::Steady),
///         to: Tag::Done,
///         emitted: false,
///     });
///
/// let path = trace.get_path();
/// assert_eq!(path.len(), 3); // Entry -> Steady -> Done
/// assert_eq!(trace.emissions(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StepTrace<P: Position> {
    steps: Vec<StepRecord<P>>,
}

impl<P: Position> Default for StepTrace<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Position> StepTrace<P> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Record a step, returning a new trace.
    pub fn record(&self, step: StepRecord<P>) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    pub(crate) fn push(&mut self, step: StepRecord<P>) {
        self.steps.push(step);
    }

    /// Get the sequence of tags visited: the first step's origin, then the
    /// destination of each step.
    pub fn get_path(&self) -> Vec<&Tag<P>> {
        let mut path = Vec::new();
        if let Some(first) = self.steps.first() {
            path.push(&first.from);
        }
        for step in &self.steps {
            path.push(&step.to);
        }
        path
    }

    /// Number of steps that emitted a value.
    pub fn emissions(&self) -> usize {
        self.steps.iter().filter(|s| s.emitted).count()
    }

    pub fn steps(&self) -> &[StepRecord<P>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
