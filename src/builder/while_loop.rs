//! Single-loop generators assembled from closures.

use crate::builder::error::BuildError;
use crate::core::{Generator, Guard, Memory, MemoryOf, NoInput, Resume};
use crate::positions;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

type Prologue<P, S> = Box<dyn Fn(P) -> S + Send + Sync>;
type Body<S, V> = Box<dyn Fn(&S) -> Option<V> + Send + Sync>;
type Advance<S> = Box<dyn Fn(&S) -> S + Send + Sync>;

positions! {
    /// The one resume point of a `while` loop with a single yield.
    pub enum LoopPosition {
        Head,
    }
    initial: Head
}

/// A generator of the shape
///
/// ```text
/// slots = prologue(params)
/// while guard(slots):
///     if let Some(v) = body(slots): yield v
///     slots = advance(slots)
/// ```
///
/// Every live step evaluates the guard once, decides emission once and
/// advances the slots once.
pub struct WhileLoop<P, S, V> {
    name: String,
    prologue: Prologue<P, S>,
    guard: Guard<S>,
    body: Option<Body<S, V>>,
    advance: Advance<S>,
}

impl<P, S, V> Debug for WhileLoop<P, S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WhileLoop")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<P, S, V> Generator for WhileLoop<P, S, V>
where
    S: Clone + Debug + Serialize + for<'de> Deserialize<'de>,
{
    type Params = P;
    type Slots = S;
    type Position = LoopPosition;
    type Input = NoInput;
    type Value = V;

    fn name(&self) -> &str {
        &self.name
    }

    fn init(&self, params: P) -> MemoryOf<Self> {
        Memory::new((self.prologue)(params))
    }

    fn resume(&self, at: LoopPosition, original: &S, _: NoInput) -> Resume<LoopPosition, S, V> {
        match at {
            LoopPosition::Head if self.guard.check(original) => Resume::Continue {
                next: LoopPosition::Head,
                emitted: self.body.as_ref().and_then(|body| body(original)),
                slots: (self.advance)(original),
            },
            LoopPosition::Head => Resume::Exhausted,
        }
    }
}

/// Builder for [`WhileLoop`] generators.
///
/// # Example
///
/// ```rust
/// use resumable::builder::LoopBuilder;
/// use resumable::drive::collect_until_done;
/// use resumable::core::{Generator, NoInput};
///
/// // Multiples of three below a bound.
/// let triples = LoopBuilder::new("triples")
///     .prologue(|bound: u32| (0u32, bound))
///     .when(|(k, bound): &(u32, u32)| k < bound)
///     .emit_when(|(k, _): &(u32, u32)| (k % 3 == 0).then_some(*k))
///     .advance(|(k, bound): &(u32, u32)| (k + 1, *bound))
///     .build()
///     .unwrap();
///
/// let mut memory = triples.init(10);
/// assert_eq!(collect_until_done(&triples, &mut memory, || NoInput), vec![0, 3, 6, 9]);
/// ```
pub struct LoopBuilder<P, S, V> {
    name: String,
    prologue: Option<Prologue<P, S>>,
    guard: Option<Guard<S>>,
    body: Option<Body<S, V>>,
    advance: Option<Advance<S>>,
}

impl<P, S, V> LoopBuilder<P, S, V> {
    /// Create a new builder for a generator called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prologue: None,
            guard: None,
            body: None,
            advance: None,
        }
    }

    /// Set the pre-loop assignments (required).
    pub fn prologue<F>(mut self, prologue: F) -> Self
    where
        F: Fn(P) -> S + Send + Sync + 'static,
    {
        self.prologue = Some(Box::new(prologue));
        self
    }

    /// Set the loop guard (required).
    pub fn guard(mut self, guard: Guard<S>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Set the loop guard using a closure.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Set the conditional yield of the loop body (optional; a loop without
    /// one never emits).
    pub fn emit_when<F>(mut self, body: F) -> Self
    where
        F: Fn(&S) -> Option<V> + Send + Sync + 'static,
    {
        self.body = Some(Box::new(body));
        self
    }

    /// Set the per-iteration state advance (required).
    pub fn advance<F>(mut self, advance: F) -> Self
    where
        F: Fn(&S) -> S + Send + Sync + 'static,
    {
        self.advance = Some(Box::new(advance));
        self
    }

    /// Build the generator.
    pub fn build(self) -> Result<WhileLoop<P, S, V>, BuildError> {
        let prologue = self.prologue.ok_or(BuildError::MissingPrologue)?;
        let guard = self.guard.ok_or(BuildError::MissingGuard)?;
        let advance = self.advance.ok_or(BuildError::MissingAdvance)?;

        Ok(WhileLoop {
            name: self.name,
            prologue,
            guard,
            body: self.body,
            advance,
        })
    }
}
