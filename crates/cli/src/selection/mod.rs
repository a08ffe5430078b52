//! Interactive fuzzy selection on the terminal.
//!
//! This module owns everything that touches the terminal: switching it into
//! raw mode for the length of a session, drawing the filtered list and
//! running the key loop.
//!
//! # User Interface
//!
//! The interface supports:
//! - Typing to filter candidates (fuzzy search), Backspace to undo
//! - Arrow keys or Ctrl-N/Ctrl-P to move the selection, wrapping at the ends
//! - Enter or Ctrl-Y to pick the highlighted candidate
//! - Ctrl-C to cancel

pub mod render;
pub mod session;
#[cfg(unix)]
pub mod signals;
pub mod terminal;

// Re-exports for convenience
pub use session::{run_session, select, SessionResult};
pub use terminal::{CrosstermTerminal, Terminal};
#[cfg(unix)]
pub use signals::exit_on_termination;
