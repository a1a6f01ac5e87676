//! The counter state record and its canonical initial value.
//!
//! The state is an immutable value describing the counter at one point in a
//! session. It is created once at session start, replaced (never mutated in
//! place) on every accepted action, and discarded when the session ends.

use serde::{Deserialize, Serialize};

/// The complete state of the counter: a single integer count.
///
/// States are immutable values. The [`transition`](crate::core::transition)
/// reducer never mutates a `CounterState` in place; every accepted action
/// produces a new record, so the presentation layer can detect change by
/// comparing the value it holds against the one it received.
///
/// The count is a finite integer, unbounded in either direction within
/// `i64`; no overflow handling is specified.
///
/// # Example
///
/// ```rust
/// use tally::core::CounterState;
///
/// let state = CounterState::INITIAL;
/// assert_eq!(state.count, 0);
///
/// let later = CounterState { count: 42 };
/// assert_ne!(state, later);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CounterState {
    /// The current count
    pub count: i64,
}

impl CounterState {
    /// The canonical initial state: a count of zero.
    ///
    /// Created once per session by [`Store::new`](crate::store::Store::new).
    /// The `reset` action returns a fresh copy of this value rather than
    /// zeroing an existing record, preserving the replace-don't-mutate
    /// invariant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::CounterState;
    ///
    /// assert_eq!(CounterState::INITIAL, CounterState { count: 0 });
    /// ```
    pub const INITIAL: CounterState = CounterState { count: 0 };
}

impl Default for CounterState {
    fn default() -> Self {
        Self::INITIAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_has_count_zero() {
        assert_eq!(CounterState::INITIAL.count, 0);
    }

    #[test]
    fn default_is_the_initial_state() {
        assert_eq!(CounterState::default(), CounterState::INITIAL);
    }

    #[test]
    fn state_is_comparable() {
        let state1 = CounterState { count: 3 };
        let state2 = CounterState { count: 3 };
        let state3 = CounterState { count: -3 };

        assert_eq!(state1, state2);
        assert_ne!(state1, state3);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = CounterState { count: -7 };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"count":-7}"#);

        let deserialized: CounterState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_copied_by_value() {
        let state = CounterState { count: 5 };
        let copy = state;
        assert_eq!(state, copy);
    }
}
