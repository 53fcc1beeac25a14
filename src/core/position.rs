//! Resume points and the position tag.
//!
//! A generator's yield points become the variants of a closed `Position`
//! enumeration. The persisted tag wraps that enumeration in [`Tag`], whose
//! `Done` variant is the terminal sentinel, so an out-of-range tag cannot be
//! represented.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for the non-terminal resume points of a generator.
///
/// Implementors are small closed enumerations, one variant per place where
/// execution can pick up again. Use the [`positions!`](crate::positions) macro
/// to declare one without boilerplate.
///
/// # Example
///
/// ```rust
/// use resumable::core::Position;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum Counter {
///     Head,
/// }
///
/// impl Position for Counter {
///     const INITIAL: Self = Self::Head;
///
///     fn name(&self) -> &'static str {
///         "Head"
///     }
/// }
///
/// assert_eq!(Counter::INITIAL.name(), "Head");
/// ```
pub trait Position:
    Copy + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// The position a freshly initialized generator starts in.
    const INITIAL: Self;

    /// Get the position's name for display/logging.
    fn name(&self) -> &'static str;
}

/// The persisted position tag of a generator instance.
///
/// `At` names the transition that runs on the next step. `Done` is the
/// terminal sentinel: once a record holds it, no further value is produced
/// and the tag never changes again.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Tag<P> {
    /// Resume at this position on the next step.
    At(P),
    /// The generator is exhausted.
    Done,
}

impl<P: Position> Tag<P> {
    /// The terminal sentinel, for callers that loop on the tag directly.
    pub const DONE: Self = Tag::Done;

    /// Tag of a freshly initialized generator.
    pub fn initial() -> Self {
        Tag::At(P::INITIAL)
    }

    /// Check whether this is the terminal sentinel.
    pub fn is_done(&self) -> bool {
        matches!(self, Tag::Done)
    }

    /// The resume position, or `None` at termination.
    pub fn position(&self) -> Option<P> {
        match self {
            Tag::At(position) => Some(*position),
            Tag::Done => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tag::At(position) => position.name(),
            Tag::Done => "Done",
        }
    }
}

impl<P: Position> fmt::Display for Tag<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
