//! Terminal mode control and the guard that restores it.

use std::fmt;
use std::io::{self, Write};

use crossterm::{cursor, queue, terminal, Command};
use log::{debug, warn};

use shell_pick_core::error::Error;

/// Switches a terminal between cooked and raw input.
pub trait Terminal {
    fn enable_raw_mode(&mut self) -> io::Result<()>;
    fn disable_raw_mode(&mut self) -> io::Result<()>;

    /// Width in columns, when it can be determined.
    fn columns(&self) -> Option<u16> {
        None
    }
}

/// The process' controlling terminal, driven through termios by crossterm.
#[derive(Clone, Copy, Default, Debug)]
pub struct CrosstermTerminal;

impl Terminal for CrosstermTerminal {
    fn enable_raw_mode(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    fn disable_raw_mode(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }

    fn columns(&self) -> Option<u16> {
        terminal::size().ok().map(|(width, _)| width)
    }
}

/// Clears the whole screen and homes the cursor with `ESC[2J` `ESC[H`.
#[derive(Clone, Copy, Debug)]
pub struct ClearAndHome;

impl Command for ClearAndHome {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[2J\x1b[H")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        terminal::Clear(terminal::ClearType::All).execute_winapi()?;
        cursor::MoveTo(0, 0).execute_winapi()
    }
}

/// Holds the terminal in raw mode with a hidden cursor.
///
/// Dropping the guard clears the screen, shows the cursor and puts the
/// terminal back into cooked mode, in that order.
pub struct RawModeGuard<'t, T: Terminal, W: Write> {
    terminal: &'t mut T,
    out: W,
}

impl<'t, T: Terminal, W: Write> RawModeGuard<'t, T, W> {
    /// Enters raw mode and hides the cursor.
    ///
    /// A terminal that refuses raw mode is logged and otherwise ignored, the
    /// session then runs with whatever line discipline is in place.
    pub fn acquire(terminal: &'t mut T, out: W) -> io::Result<Self> {
        if let Err(e) = terminal.enable_raw_mode() {
            warn!("{}", Error::NoTerminal(e));
        }

        // Constructed before hiding the cursor so a failed write still restores.
        let mut guard = Self { terminal, out };
        queue!(guard.out, cursor::Hide)?;
        guard.out.flush()?;

        Ok(guard)
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Current width of the held terminal.
    pub fn columns(&self) -> Option<u16> {
        self.terminal.columns()
    }
}

impl<T: Terminal, W: Write> Drop for RawModeGuard<'_, T, W> {
    fn drop(&mut self) {
        restore(&mut *self.terminal, &mut self.out);
    }
}

/// Clears the screen, shows the cursor and leaves raw mode.
///
/// Best effort: failures are logged, never returned, since this runs on the
/// way out.
pub fn restore<T: Terminal, W: Write>(terminal: &mut T, out: &mut W) {
    debug!("Restoring terminal");
    let _ = queue!(out, ClearAndHome, cursor::Show);
    let _ = out.flush();
    if let Err(e) = terminal.disable_raw_mode() {
        warn!("Could not restore terminal mode: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingTerminal {
        enabled: usize,
        disabled: usize,
    }

    impl Terminal for CountingTerminal {
        fn enable_raw_mode(&mut self) -> io::Result<()> {
            self.enabled += 1;
            Ok(())
        }

        fn disable_raw_mode(&mut self) -> io::Result<()> {
            self.disabled += 1;
            Ok(())
        }
    }

    #[test]
    fn test_clear_and_home_bytes() {
        let mut out: Vec<u8> = Vec::new();
        queue!(out, ClearAndHome).unwrap();
        assert_eq!(out, b"\x1b[2J\x1b[H");
    }

    #[test]
    fn test_guard_pairs_enter_and_exit() {
        let mut terminal = CountingTerminal::default();
        let mut out: Vec<u8> = Vec::new();

        {
            let mut guard = RawModeGuard::acquire(&mut terminal, &mut out).unwrap();
            guard.out().write_all(b"body").unwrap();
        }

        assert_eq!(terminal.enabled, 1);
        assert_eq!(terminal.disabled, 1);
        assert_eq!(out, b"\x1b[?25lbody\x1b[2J\x1b[H\x1b[?25h");
    }

    #[test]
    fn test_guard_restores_on_panic() {
        let mut terminal = CountingTerminal::default();
        let mut out: Vec<u8> = Vec::new();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = RawModeGuard::acquire(&mut terminal, &mut out).unwrap();
            panic!("boom");
        }));

        assert!(result.is_err());
        assert_eq!(terminal.disabled, 1);
        assert!(out.ends_with(b"\x1b[?25h"));
    }
}
