//! The imperative shell: a single-owner state cell with change notification.
//!
//! The store is the exclusive owner of the counter state for the lifetime of
//! a session. The presentation layer reads the current value, forwards
//! actions, and re-renders through subscriptions; it never mutates the count
//! itself. Dispatches are strictly serialized by `&mut self`, so no two
//! transitions ever execute concurrently and no locking is required.

use crate::core::{transition, Action, CounterState, DispatchError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Callback invoked with the new state after every accepted dispatch.
pub type Subscriber = Box<dyn Fn(CounterState) + Send + Sync>;

/// Session bookkeeping tracked by a store.
///
/// In-memory only: created with the store, discarded with the session,
/// never persisted.
#[derive(Clone, Debug, Serialize)]
pub struct SessionMetadata {
    /// When the store was created
    pub created_at: DateTime<Utc>,

    /// Last accepted dispatch time
    pub updated_at: DateTime<Utc>,

    /// Accepted dispatches per action tag (tag -> count)
    pub dispatch_counts: HashMap<String, usize>,
}

impl Default for SessionMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            dispatch_counts: HashMap::new(),
        }
    }
}

impl SessionMetadata {
    /// Total number of accepted dispatches in this session.
    pub fn total_dispatches(&self) -> usize {
        self.dispatch_counts.values().sum()
    }
}

/// Single-owner cell holding the current counter state.
///
/// The state is passed explicitly through the store rather than living in an
/// implicit global, keeping the reducer pure and independently testable.
///
/// # Example
///
/// ```rust
/// use tally::{Action, Store};
///
/// let mut store = Store::new();
/// assert_eq!(store.state().count, 0);
///
/// store.dispatch(Action::Increment);
/// store.dispatch(Action::Increment);
/// assert_eq!(store.state().count, 2);
///
/// store.dispatch(Action::Reset);
/// assert_eq!(store.state().count, 0);
/// ```
pub struct Store {
    current: CounterState,
    subscribers: Vec<Subscriber>,
    metadata: SessionMetadata,
}

impl Store {
    /// Create a store holding the canonical initial state.
    pub fn new() -> Self {
        Self {
            current: CounterState::INITIAL,
            subscribers: Vec::new(),
            metadata: SessionMetadata::default(),
        }
    }

    /// Get the current state (pure).
    pub fn state(&self) -> CounterState {
        self.current
    }

    /// Get session metadata (pure).
    pub fn metadata(&self) -> &SessionMetadata {
        &self.metadata
    }

    /// Register a callback invoked with the new state after every accepted
    /// dispatch.
    ///
    /// This is the re-render hook: the presentation layer subscribes once at
    /// session start and redraws the displayed count on each notification.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::atomic::{AtomicI64, Ordering};
    /// use std::sync::Arc;
    /// use tally::{Action, Store};
    ///
    /// let rendered = Arc::new(AtomicI64::new(0));
    /// let sink = Arc::clone(&rendered);
    ///
    /// let mut store = Store::new();
    /// store.subscribe(move |state| sink.store(state.count, Ordering::SeqCst));
    ///
    /// store.dispatch(Action::Increment);
    /// assert_eq!(rendered.load(Ordering::SeqCst), 1);
    /// ```
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(CounterState) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    /// Dispatch a typed action, replacing the held state.
    ///
    /// Runs the pure reducer, replaces the cell contents with the new record,
    /// notifies subscribers, and returns the new state. The typed path is
    /// total: with a closed action set there is nothing to reject.
    pub fn dispatch(&mut self, action: Action) -> CounterState {
        let next = transition(&self.current, action);
        self.current = next;

        self.metadata.updated_at = Utc::now();
        *self
            .metadata
            .dispatch_counts
            .entry(action.tag().to_string())
            .or_insert(0) += 1;

        for subscriber in &self.subscribers {
            subscriber(next);
        }
        next
    }

    /// Dispatch an untyped action tag.
    ///
    /// Fails with [`DispatchError::UnrecognizedAction`] for tags outside the
    /// recognized set, leaving the held state, metadata and subscribers
    /// untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::Store;
    ///
    /// let mut store = Store::new();
    /// store.dispatch_tag("increment").unwrap();
    /// assert_eq!(store.state().count, 1);
    ///
    /// assert!(store.dispatch_tag("decrementTwice").is_err());
    /// assert_eq!(store.state().count, 1);
    /// ```
    pub fn dispatch_tag(&mut self, tag: &str) -> Result<CounterState, DispatchError> {
        let action = Action::from_tag(tag)?;
        Ok(self.dispatch(action))
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
