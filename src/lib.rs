//! Tally: a pure functional counter state machine
//!
//! Tally follows the "pure core, imperative shell" philosophy. The entire
//! counter logic is a single pure reducer over a closed action set; the
//! imperative shell is a small single-owner store that holds the current
//! state for the lifetime of a session and notifies the presentation layer
//! after every accepted dispatch.
//!
//! # Core Concepts
//!
//! - **State**: the [`CounterState`] record holding the current count
//! - **Action**: a closed tagged union of the three valid requests
//!   (increment, decrement, reset)
//! - **Transition**: the pure [`transition`] function mapping (state, action)
//!   to a new state, never mutating its input
//! - **Store**: the exclusive owner of the state cell, replacing the held
//!   value on each dispatch and re-rendering via subscriptions
//!
//! # Example
//!
//! ```rust
//! use tally::{transition, Action, CounterState, Store};
//!
//! // Pure core: the reducer returns a new state, the input is unchanged.
//! let s0 = CounterState::INITIAL;
//! let s1 = transition(&s0, Action::Increment);
//! assert_eq!(s1.count, 1);
//! assert_eq!(s0.count, 0);
//!
//! // Imperative shell: the store owns the cell and serializes dispatches.
//! let mut store = Store::new();
//! store.dispatch(Action::Increment);
//! store.dispatch(Action::Increment);
//! store.dispatch(Action::Decrement);
//! assert_eq!(store.state().count, 1);
//! ```

pub mod core;
pub mod store;

// Re-export commonly used types
pub use core::{transition, Action, CounterState, DispatchError};
pub use store::{SessionMetadata, Store};
