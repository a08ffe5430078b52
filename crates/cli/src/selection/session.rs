//! The interactive read, decode, apply, redraw loop.

use std::io::{self, ErrorKind, Read, Write};

use log::{debug, error, warn};

use shell_pick_core::config::Settings;
use shell_pick_core::error::{Error, Result};
use shell_pick_core::keys::KeyDecoder;
use shell_pick_core::state::{SelectionState, SessionState};
use shell_pick_core::width::Layout;

use super::render::{redraw_ui, View};
use super::terminal::{CrosstermTerminal, RawModeGuard, Terminal};

/// Bytes requested per blocking read.
const READ_BUFFER_SIZE: usize = 64;

/// How a selector session ended.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SessionResult {
    Selected(String),
    Cancelled,
}

impl SessionResult {
    #[must_use]
    pub fn is_selected(&self) -> bool {
        matches!(self, SessionResult::Selected(_))
    }

    /// The `(text, ok)` pair shell callers expect, `("", false)` when nothing
    /// was picked.
    #[must_use]
    pub fn into_pair(self) -> (String, bool) {
        match self {
            SessionResult::Selected(text) => (text, true),
            SessionResult::Cancelled => (String::new(), false),
        }
    }
}

/// Lets the user pick one of `candidates` on the process' terminal.
///
/// Reads keys from stdin and draws on stdout using the default settings.
/// On Unix a termination signal during the session restores the terminal
/// before the process exits.
pub fn select<S: AsRef<str>>(candidates: &[S], prompt: &str) -> SessionResult {
    let mut terminal = CrosstermTerminal;

    #[cfg(unix)]
    let _signals = super::signals::exit_on_termination(terminal, io::stdout())
        .inspect_err(|e| warn!("Termination signals not watched: {}", e))
        .ok();

    run_session(
        candidates,
        prompt,
        &Settings::default(),
        io::stdin(),
        io::stdout(),
        &mut terminal,
    )
}

/// Runs one selector session over the given input, output and terminal.
///
/// No candidates means an immediate cancellation without touching the
/// terminal. Otherwise the terminal is held in raw mode for the whole loop
/// and restored before returning, whatever the outcome. Read and write
/// failures end the session as cancelled.
pub fn run_session<S, R, W, T>(
    candidates: &[S],
    prompt: &str,
    settings: &Settings,
    mut input: R,
    output: W,
    terminal: &mut T,
) -> SessionResult
where
    S: AsRef<str>,
    R: Read,
    W: Write,
    T: Terminal,
{
    if candidates.is_empty() {
        debug!("{}", Error::EmptyInput);
        return SessionResult::Cancelled;
    }

    let mut guard = match RawModeGuard::acquire(terminal, output) {
        Ok(guard) => guard,
        Err(e) => {
            error!("{}", Error::Stdio(e));
            return SessionResult::Cancelled;
        }
    };

    let result = match event_loop(candidates, prompt, settings, &mut input, &mut guard) {
        Ok(result) => result,
        Err(e) => {
            error!("{}", e);
            SessionResult::Cancelled
        }
    };

    debug!("Session finished: {:?}", result);
    result
}

fn event_loop<S, R, T, W>(
    candidates: &[S],
    prompt: &str,
    settings: &Settings,
    input: &mut R,
    guard: &mut RawModeGuard<'_, T, W>,
) -> Result<SessionResult>
where
    S: AsRef<str>,
    R: Read,
    T: Terminal,
    W: Write,
{
    let mut state = SelectionState::new(candidates);
    let mut decoder = KeyDecoder::new();
    let mut buffer = [0u8; READ_BUFFER_SIZE];

    redraw(guard, prompt, settings, &state)?;

    loop {
        let read = match input.read(&mut buffer) {
            Ok(0) => {
                debug!("Input closed");
                return Ok(SessionResult::Cancelled);
            }
            Ok(read) => read,
            // A signal such as a window resize, not a broken input.
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::ReadFailure(e)),
        };

        let events = decoder.feed(&buffer[..read]);
        if events.is_empty() {
            continue;
        }

        for event in events {
            match state.apply(event) {
                SessionState::Running => {}
                SessionState::Selected(text) => return Ok(SessionResult::Selected(text.to_string())),
                SessionState::Cancelled => return Ok(SessionResult::Cancelled),
            }
        }

        redraw(guard, prompt, settings, &state)?;
    }
}

/// Draws at the terminal's current width, so a resize shows on the next key.
fn redraw<S, T, W>(
    guard: &mut RawModeGuard<'_, T, W>,
    prompt: &str,
    settings: &Settings,
    state: &SelectionState<'_, S>,
) -> io::Result<()>
where
    S: AsRef<str>,
    T: Terminal,
    W: Write,
{
    let layout = Layout::new(guard.columns().unwrap_or(0), settings.max_rows);
    let view = View {
        prompt,
        layout: &layout,
        show_footer: settings.show_footer,
    };
    redraw_ui(guard.out(), &view, state)
}
