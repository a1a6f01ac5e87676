//! The closed set of counter actions and the untyped tag boundary.
//!
//! Actions are ephemeral values: constructed by the presentation layer per
//! user gesture and consumed immediately by the reducer. The discriminator
//! set is closed, so exhaustive matching makes an "unrecognized action"
//! unreachable in the typed path; raw string tags from outside the type
//! system enter through [`Action::from_tag`], the only place that failure
//! can surface.

use crate::core::error::DispatchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A tagged request to transition the counter state.
///
/// Carries no payload beyond the discriminator. Serializes to the wire tags
/// `"increment"`, `"decrement"` and `"reset"`.
///
/// # Example
///
/// ```rust
/// use tally::core::Action;
///
/// assert_eq!(Action::Increment.tag(), "increment");
/// assert_eq!("reset".parse::<Action>().unwrap(), Action::Reset);
/// assert!("decrementTwice".parse::<Action>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Add one to the count
    Increment,
    /// Subtract one from the count
    Decrement,
    /// Return to the canonical initial state
    Reset,
}

impl Action {
    /// All actions, in a fixed order.
    pub const ALL: [Action; 3] = [Action::Increment, Action::Decrement, Action::Reset];

    /// Get the action's wire tag for display/logging.
    ///
    /// Returns a static string reference matching the serialized form.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
            Self::Reset => "reset",
        }
    }

    /// Parse an untyped tag into an action.
    ///
    /// This is a defensive boundary, not a user-facing condition: the
    /// presentation layer only ever constructs the three valid tags, so an
    /// unrecognized tag indicates a programming defect in the caller. It
    /// fails with a typed error rather than silently defaulting, leaving the
    /// caller to decide whether to treat it as fatal.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{Action, DispatchError};
    ///
    /// assert_eq!(Action::from_tag("increment").unwrap(), Action::Increment);
    ///
    /// let err = Action::from_tag("incrementTwice").unwrap_err();
    /// assert!(matches!(err, DispatchError::UnrecognizedAction { .. }));
    /// ```
    pub fn from_tag(tag: &str) -> Result<Action, DispatchError> {
        match tag {
            "increment" => Ok(Action::Increment),
            "decrement" => Ok(Action::Decrement),
            "reset" => Ok(Action::Reset),
            other => Err(DispatchError::UnrecognizedAction {
                tag: other.to_string(),
            }),
        }
    }
}

impl FromStr for Action {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::from_tag(s)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
