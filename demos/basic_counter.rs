//! Scripted walkthrough of the counter contract: dispatch a fixed sequence
//! of actions and print the count after each one, the way a presentation
//! layer re-renders on state change.
//!
//! Run with: cargo run --example basic_counter

use tally::{Action, Store};

fn main() {
    let mut store = Store::new();
    store.subscribe(|state| println!("count: {}", state.count));

    println!("count: {}", store.state().count);

    let presses = [
        Action::Increment,
        Action::Increment,
        Action::Decrement,
        Action::Increment,
        Action::Reset,
    ];

    for action in presses {
        println!("-> {action}");
        store.dispatch(action);
    }

    let metadata = store.metadata();
    println!(
        "session: {} dispatches ({:?})",
        metadata.total_dispatches(),
        metadata.dispatch_counts
    );
}
