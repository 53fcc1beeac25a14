//! The generator contract and the step operation.
//!
//! A generator is described by an initialization procedure and one
//! transition procedure per resume point. [`step`] is the single place
//! that dispatches on the tag and applies a transition's result.

use super::memory::{Memory, Output};
use super::position::{Position, Tag};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Memory record type of a generator.
pub type MemoryOf<G> = Memory<<G as Generator>::Position, <G as Generator>::Slots>;

/// Result of running the transition bound to one position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resume<P, S, V> {
    /// The loop guard held: one iteration ran.
    Continue {
        /// Where execution picks up on the next step.
        next: P,
        /// Slot values after the iteration's state advance.
        slots: S,
        /// The value this iteration yielded, if any.
        emitted: Option<V>,
    },

    /// The loop guard failed; the generator is finished.
    Exhausted,
}

impl<P, S, V> Resume<P, S, V> {
    /// An iteration that advanced without yielding.
    pub fn advance(next: P, slots: S) -> Self {
        Resume::Continue {
            next,
            slots,
            emitted: None,
        }
    }

    /// An iteration that yielded `value`.
    pub fn yielded(next: P, slots: S, value: V) -> Self {
        Resume::Continue {
            next,
            slots,
            emitted: Some(value),
        }
    }
}

/// A generator lowered to an explicit state machine.
///
/// Implementations must be pure: `resume` sees only the pre-call slot values
/// and the step's input, and returns everything the step changes. No
/// implementation may keep mutable state of its own.
///
/// # Example
///
/// ```rust
/// use resumable::core::{step, Generator, Memory, NoInput, Resume};
/// use resumable::positions;
///
/// positions! {
///     pub enum Countdown {
///         Head,
///     }
///     initial: Head
/// }
///
/// struct Down;
///
/// impl Generator for Down {
///     type Params = u32;
///     type Slots = u32;
///     type Position = Countdown;
///     type Input = NoInput;
///     type Value = u32;
///
///     fn name(&self) -> &str {
///         "down"
///     }
///
///     fn init(&self, from: u32) -> Memory<Countdown, u32> {
///         Memory::new(from)
///     }
///
///     fn resume(&self, at: Countdown, n: &u32, _: NoInput) -> Resume<Countdown, u32, u32> {
///         match at {
///             Countdown::Head if *n > 0 => Resume::yielded(Countdown::Head, n - 1, *n),
///             Countdown::Head => Resume::Exhausted,
///         }
///     }
/// }
///
/// let mut memory = Down.init(2);
/// assert_eq!(step(&Down, &mut memory, NoInput).into_value(), Some(2));
/// assert_eq!(step(&Down, &mut memory, NoInput).into_value(), Some(1));
/// assert!(step(&Down, &mut memory, NoInput).done());
/// ```
pub trait Generator {
    /// Parameters consumed by initialization.
    type Params;
    /// Locals that are live across a yield point.
    type Slots: Clone + Debug + Serialize + for<'de> Deserialize<'de>;
    /// Non-terminal resume points.
    type Position: Position;
    /// Per-step external parameters.
    type Input;
    /// Emitted payload.
    type Value;

    /// Stable name, recorded in checkpoints.
    fn name(&self) -> &str;

    /// Build a fresh memory record from the declared parameters.
    fn init(&self, params: Self::Params) -> MemoryOf<Self>;

    /// Run the transition bound to `at` against the pre-call slot values.
    fn resume(
        &self,
        at: Self::Position,
        original: &Self::Slots,
        input: Self::Input,
    ) -> Resume<Self::Position, Self::Slots, Self::Value>;
}

/// Advance `memory` by one transition.
///
/// A record already at the terminal sentinel is left untouched and yields a
/// finished output, so stepping after termination is always safe. Otherwise
/// the transition bound to the current tag runs against the current slots
/// and its result is applied in place.
pub fn step<G: Generator + ?Sized>(
    generator: &G,
    memory: &mut MemoryOf<G>,
    input: G::Input,
) -> Output<G::Value> {
    let Tag::At(at) = memory.tag else {
        tracing::debug!(generator = generator.name(), "step after exhaustion");
        return Output::finished();
    };

    match generator.resume(at, &memory.slots, input) {
        Resume::Continue {
            next,
            slots,
            emitted,
        } => {
            tracing::trace!(
                generator = generator.name(),
                from = at.name(),
                to = next.name(),
                emitted = emitted.is_some(),
                "step"
            );
            memory.tag = Tag::At(next);
            memory.slots = slots;
            Output::from(emitted)
        }
        Resume::Exhausted => {
            tracing::debug!(generator = generator.name(), from = at.name(), "exhausted");
            memory.tag = Tag::Done;
            Output::finished()
        }
    }
}
