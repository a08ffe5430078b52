//! Terminal restoration when the process is told to stop.
//!
//! A session restores the terminal when its guard is dropped, which never
//! happens if a signal kills the process first. [`exit_on_termination`]
//! covers that path by catching the usual termination signals on a
//! background thread.

use std::io::{self, Write};
use std::thread::JoinHandle;

use log::{debug, warn};
use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGQUIT, SIGTERM};
use signal_hook::iterator::{Handle, Signals};

use super::terminal::{restore, Terminal};

/// Signals that would otherwise end the process with the terminal in raw mode.
pub const TERMINATION_SIGNALS: [i32; 4] = [SIGINT, SIGTERM, SIGHUP, SIGQUIT];

/// Runs a callback for each delivered signal until dropped.
#[derive(Debug)]
pub struct SignalGuard {
    handle: Handle,
    thread: Option<JoinHandle<()>>,
}

impl SignalGuard {
    pub fn install<F>(signals: &[i32], mut on_signal: F) -> io::Result<Self>
    where
        F: FnMut(i32) + Send + 'static,
    {
        let mut signals = Signals::new(signals).map_err(io::Error::other)?;
        let handle = signals.handle();
        let thread = std::thread::spawn(move || {
            for signal in signals.forever() {
                debug!("Signal {} received", signal);
                on_signal(signal);
            }
        });

        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Restores `terminal` and exits with `128 + signal` when one of the
/// [`TERMINATION_SIGNALS`] arrives while the returned guard is alive.
pub fn exit_on_termination<T, W>(mut terminal: T, mut out: W) -> io::Result<SignalGuard>
where
    T: Terminal + Send + 'static,
    W: Write + Send + 'static,
{
    SignalGuard::install(&TERMINATION_SIGNALS, move |signal| {
        warn!("Stopped by signal {}", signal);
        restore(&mut terminal, &mut out);
        std::process::exit(128 + signal);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{mpsc, Arc, Mutex};
    use std::time::Duration;

    use signal_hook::consts::signal::{SIGUSR1, SIGUSR2};
    use signal_hook::low_level::raise;

    #[derive(Clone, Default)]
    struct SharedTerminal {
        disabled: Arc<AtomicUsize>,
    }

    impl Terminal for SharedTerminal {
        fn enable_raw_mode(&mut self) -> io::Result<()> {
            Ok(())
        }

        fn disable_raw_mode(&mut self) -> io::Result<()> {
            self.disabled.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct SharedScreen(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedScreen {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_signal_restores_terminal() {
        let terminal = SharedTerminal::default();
        let screen = SharedScreen::default();
        let (sender, receiver) = mpsc::channel();

        let mut watched_terminal = terminal.clone();
        let mut watched_screen = screen.clone();
        let _guard = SignalGuard::install(&[SIGUSR1], move |signal| {
            restore(&mut watched_terminal, &mut watched_screen);
            sender.send(signal).unwrap();
        })
        .unwrap();

        raise(SIGUSR1).unwrap();

        assert_eq!(receiver.recv_timeout(Duration::from_secs(5)), Ok(SIGUSR1));
        assert_eq!(terminal.disabled.load(Ordering::SeqCst), 1);
        assert_eq!(*screen.0.lock().unwrap(), b"\x1b[2J\x1b[H\x1b[?25h");
    }

    #[test]
    fn test_dropping_guard_stops_watcher() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&calls);

        let guard = SignalGuard::install(&[SIGUSR2], move |_| {
            counted.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
        drop(guard);

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
