//! Shell Pick CLI Library
//!
//! This crate provides the terminal side of shell-pick: the interactive
//! selector a shell configuration manager uses to let the user pick an alias,
//! a `PATH` segment, an environment constant or a plugin from a list.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing for the `sp` binary
//! - [`selection`]: Raw-mode session, key loop and rendering
//!
//! The matching, key decoding and selection logic live in
//! `shell_pick_core` and carry no terminal dependency.
//!
//! # Examples
//!
//! The CLI binary (`sp`) can be used in several ways:
//!
//! ```bash
//! # Candidates as arguments
//! sp ll la gst
//!
//! # Candidates from a file, one per line
//! sp --input ~/.aliases --prompt "Delete alias: "
//!
//! # Candidates piped in, result captured by the shell
//! entry=$(echo "$PATH" | tr ':' '\n' | sp)
//! ```

pub mod cli_args;
pub mod selection;
