//! Property-based tests for the counter core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use tally::core::{transition, Action, CounterState};
use tally::Store;

prop_compose! {
    fn arbitrary_action()(variant in 0..3u8) -> Action {
        match variant {
            0 => Action::Increment,
            1 => Action::Decrement,
            _ => Action::Reset,
        }
    }
}

prop_compose! {
    fn arbitrary_step()(increment in any::<bool>()) -> Action {
        if increment {
            Action::Increment
        } else {
            Action::Decrement
        }
    }
}

prop_compose! {
    fn arbitrary_state()(count in -1_000_000i64..1_000_000) -> CounterState {
        CounterState { count }
    }
}

proptest! {
    #[test]
    fn count_equals_increments_minus_decrements(
        steps in prop::collection::vec(arbitrary_step(), 0..64)
    ) {
        let mut state = CounterState::INITIAL;
        for &action in &steps {
            state = transition(&state, action);
        }

        let increments = steps.iter().filter(|a| **a == Action::Increment).count() as i64;
        let decrements = steps.len() as i64 - increments;
        prop_assert_eq!(state.count, increments - decrements);
    }

    #[test]
    fn reset_always_yields_the_initial_state(state in arbitrary_state()) {
        prop_assert_eq!(transition(&state, Action::Reset), CounterState::INITIAL);
    }

    #[test]
    fn reset_is_idempotent(state in arbitrary_state()) {
        let once = transition(&state, Action::Reset);
        let twice = transition(&once, Action::Reset);
        prop_assert_eq!(twice, CounterState { count: 0 });
    }

    #[test]
    fn transition_never_mutates_its_input(
        state in arbitrary_state(),
        action in arbitrary_action()
    ) {
        let before = state.count;
        let _ = transition(&state, action);
        prop_assert_eq!(state.count, before);
    }

    #[test]
    fn transition_is_deterministic(
        state in arbitrary_state(),
        action in arbitrary_action()
    ) {
        prop_assert_eq!(transition(&state, action), transition(&state, action));
    }

    #[test]
    fn increment_and_decrement_are_inverses(state in arbitrary_state()) {
        let up_down = transition(&transition(&state, Action::Increment), Action::Decrement);
        let down_up = transition(&transition(&state, Action::Decrement), Action::Increment);
        prop_assert_eq!(up_down, state);
        prop_assert_eq!(down_up, state);
    }

    #[test]
    fn store_agrees_with_folding_the_reducer(
        actions in prop::collection::vec(arbitrary_action(), 0..64)
    ) {
        let mut store = Store::new();
        let mut folded = CounterState::INITIAL;

        for &action in &actions {
            store.dispatch(action);
            folded = transition(&folded, action);
        }

        prop_assert_eq!(store.state(), folded);
        prop_assert_eq!(store.metadata().total_dispatches(), actions.len());
    }

    #[test]
    fn tag_roundtrip_is_lossless(action in arbitrary_action()) {
        prop_assert_eq!(Action::from_tag(action.tag()).unwrap(), action);
    }

    #[test]
    fn unrecognized_tags_always_fail(tag in "[a-zA-Z]{1,16}") {
        prop_assume!(!matches!(tag.as_str(), "increment" | "decrement" | "reset"));
        prop_assert!(Action::from_tag(&tag).is_err());
    }

    #[test]
    fn action_roundtrip_serialization(action in arbitrary_action()) {
        let json = serde_json::to_string(&action).unwrap();
        prop_assert_eq!(json.trim_matches('"'), action.tag());

        let deserialized: Action = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(deserialized, action);
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CounterState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
