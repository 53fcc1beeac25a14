//! Loop guard predicates over slot records.
//!
//! A guard is the condition of the loop a generator was lowered from. It is
//! evaluated once per step against the current slot values.

use std::fmt;
use std::marker::PhantomData;

/// Pure predicate deciding whether a loop runs another iteration.
///
/// # Example
///
/// ```rust
/// use resumable::core::Guard;
///
/// let below_ten = Guard::new(|count: &u32| *count < 10);
///
/// assert!(below_ten.check(&3));
/// assert!(!below_ten.check(&10));
/// ```
pub struct Guard<S> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<fn(&S)>,
}

impl<S> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and must not keep state of its
    /// own between calls.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check whether the loop runs another iteration from these slots.
    pub fn check(&self, slots: &S) -> bool {
        (self.predicate)(slots)
    }
}

impl<S: 'static> Guard<S> {
    /// A guard that never fails. Generators using it only finish through an
    /// external budget.
    pub fn always() -> Self {
        Self::new(|_| true)
    }
}

impl<S> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Slots {
        a: i64,
        n: i64,
    }

    #[test]
    fn guard_reads_slot_values() {
        let guard = Guard::new(|s: &Slots| s.a < s.n);

        assert!(guard.check(&Slots { a: 0, n: 50 }));
        assert!(!guard.check(&Slots { a: 55, n: 50 }));
    }

    #[test]
    fn guard_is_deterministic() {
        let slots = Slots { a: 34, n: 50 };
        let guard = Guard::new(|s: &Slots| s.a < s.n);

        assert_eq!(guard.check(&slots), guard.check(&slots));
    }

    #[test]
    fn always_guard_never_fails() {
        let guard = Guard::<Slots>::always();
        assert!(guard.check(&Slots { a: i64::MAX, n: 0 }));
    }
}
