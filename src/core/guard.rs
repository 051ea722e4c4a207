//! Guard predicates for controlling phase transitions.
//!
//! Guards are pure boolean functions over some input (an entered code, a
//! tile arrangement) that decide whether a forward transition may happen.

use std::fmt;

/// Pure predicate that determines if a transition can execute.
///
/// Guards are evaluated by the state machine right before a forward
/// transition. They hold no state and have no side effects, so the same
/// input always produces the same answer.
///
/// # Example
///
/// ```rust
/// use stagegate::core::Guard;
///
/// let all_even = Guard::new(|values: &Vec<u8>| values.iter().all(|v| v % 2 == 0));
///
/// assert!(all_even.check(&vec![2, 4, 6]));
/// assert!(!all_even.check(&vec![2, 3]));
/// ```
pub struct Guard<T: ?Sized> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows the transition for this input.
    pub fn check(&self, input: &T) -> bool {
        (self.predicate)(input)
    }
}

impl<T: ?Sized> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
