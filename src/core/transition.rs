//! The pure reducer mapping (state, action) to a new state.

use crate::core::action::Action;
use crate::core::state::CounterState;

/// Apply an action to a state, producing the next state.
///
/// This is a pure function: deterministic, no side effects, and the input
/// state is never mutated. Every branch returns a new record:
///
/// - `Increment` yields a state with `count + 1`
/// - `Decrement` yields a state with `count - 1`
/// - `Reset` yields a fresh copy of [`CounterState::INITIAL`], not merely a
///   zeroed field
///
/// The action set is closed, so the match is exhaustive and the function is
/// total; there is no failure path.
///
/// # Example
///
/// ```rust
/// use tally::core::{transition, Action, CounterState};
///
/// let s0 = CounterState::INITIAL;
/// let s1 = transition(&s0, Action::Increment);
/// let s2 = transition(&s1, Action::Increment);
/// let s3 = transition(&s2, Action::Decrement);
///
/// assert_eq!(s3.count, 1);
/// assert_eq!(s0.count, 0); // inputs are never mutated
///
/// let s4 = transition(&s3, Action::Reset);
/// assert_eq!(s4, CounterState::INITIAL);
/// ```
pub fn transition(state: &CounterState, action: Action) -> CounterState {
    match action {
        Action::Increment => CounterState {
            count: state.count + 1,
        },
        Action::Decrement => CounterState {
            count: state.count - 1,
        },
        Action::Reset => CounterState::INITIAL,
    }
}
