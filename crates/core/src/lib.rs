//! Shell Pick Core Library
//!
//! This crate provides the terminal-free half of shell-pick, an interactive
//! fuzzy selector used to pick one entry (an alias, a `PATH` segment, an
//! environment constant, a plugin) out of a list without typing its exact name.
//!
//! # Key Features
//!
//! - **Fuzzy Scoring**: Case-insensitive subsequence matching with substring and prefix bonuses
//! - **Filtering**: Stable, deterministic ranking of every candidate for a query
//! - **Key Decoding**: Raw terminal bytes to logical key events, including split escape sequences
//! - **Selection State**: The query, filtered list and selection as a small state machine
//! - **Layout**: Display width measurement and the scrolling window of visible rows
//!
//! # Examples
//!
//! Driving a selection without a terminal:
//!
//! ```
//! use shell_pick_core::keys::KeyDecoder;
//! use shell_pick_core::state::{SelectionState, SessionState};
//!
//! let candidates = ["alpha", "beta", "alphabet"];
//! let mut state = SelectionState::new(&candidates);
//! let mut decoder = KeyDecoder::new();
//!
//! let mut outcome = SessionState::Running;
//! for event in decoder.feed(b"bet\r") {
//!     outcome = state.apply(event);
//! }
//! assert_eq!(outcome, SessionState::Selected("beta"));
//! ```

pub mod config;
pub mod error;
pub mod file_handling;
pub mod filter;
pub mod keys;
pub mod scoring;
pub mod state;
pub mod width;
