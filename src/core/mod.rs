//! Core counter types and logic.
//!
//! This module contains the pure functional core of the counter:
//! - The `CounterState` record and its canonical initial value
//! - The closed `Action` set and its untyped tag boundary
//! - The pure `transition` reducer
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod action;
mod error;
mod state;
mod transition;

pub use action::Action;
pub use error::DispatchError;
pub use state::CounterState;
pub use transition::transition;
