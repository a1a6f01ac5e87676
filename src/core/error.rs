//! Dispatch errors for the untyped action boundary.

use thiserror::Error;

/// Errors that can occur when dispatching untyped action tags.
///
/// The typed [`transition`](crate::core::transition) path cannot fail; this
/// error exists only to catch integration defects at the boundary where raw
/// discriminators arrive. Under normal operation it is never observable.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("unrecognized action tag {tag:?}. Expected one of: increment, decrement, reset")]
    UnrecognizedAction { tag: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_names_the_offending_tag() {
        let err = DispatchError::UnrecognizedAction {
            tag: "decrementTwice".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("decrementTwice"));
        assert!(message.contains("increment"));
    }
}
