//! Interactive terminal counter: `+`, `-` and `r` stand in for the three
//! buttons of a counter widget, `q` or Esc quits. The count re-renders on
//! every state change through a store subscription.
//!
//! Run with: cargo run --example terminal_counter

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal;
use tally::{Action, Store};

fn render(count: i64) {
    // Raw mode: carriage return needed alongside the newline.
    print!("count: {count}\r\n");
    let _ = io::stdout().flush();
}

fn main() -> io::Result<()> {
    let mut store = Store::new();
    store.subscribe(|state| render(state.count));

    terminal::enable_raw_mode()?;
    print!("[+] increment  [-] decrement  [r] reset  [q] quit\r\n");
    render(store.state().count);

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let action = match key.code {
            KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::Increment),
            KeyCode::Char('-') => Some(Action::Decrement),
            KeyCode::Char('r') => Some(Action::Reset),
            KeyCode::Char('q') | KeyCode::Esc => break,
            _ => None,
        };

        if let Some(action) = action {
            store.dispatch(action);
        }
    }

    terminal::disable_raw_mode()?;
    Ok(())
}
