//! Decoding of raw terminal input bytes into logical key events.
//!
//! Two entry points are provided:
//!
//! - [`decode`] classifies one read burst as a single event.
//! - [`KeyDecoder`] walks a stream of reads and yields every event in it,
//!   holding on to an escape sequence that was split across reads.

const ESC: u8 = 0x1b;
const CTRL_C: u8 = 0x03;
const CTRL_H: u8 = 0x08;
const CTRL_N: u8 = 0x0e;
const CTRL_P: u8 = 0x10;
const CTRL_Y: u8 = 0x19;
const DEL: u8 = 0x7f;

/// Longest escape sequence prefix kept in memory.
const MAX_SEQUENCE_LEN: usize = 16;

/// A device independent key press.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LogicalEvent {
    /// Printable ASCII (`0x20..=0x7e`).
    Char(u8),
    Backspace,
    Enter,
    Cancel,
    MoveNext,
    MovePrev,
    Accept,
    ArrowUp,
    ArrowDown,
    Unknown,
}

/// Maps one byte to its event, without any escape sequence handling.
fn classify(byte: u8) -> LogicalEvent {
    match byte {
        0x20..=0x7e => LogicalEvent::Char(byte),
        DEL | CTRL_H => LogicalEvent::Backspace,
        b'\r' | b'\n' => LogicalEvent::Enter,
        CTRL_C => LogicalEvent::Cancel,
        CTRL_N => LogicalEvent::MoveNext,
        CTRL_P => LogicalEvent::MovePrev,
        CTRL_Y => LogicalEvent::Accept,
        _ => LogicalEvent::Unknown,
    }
}

/// Decodes the bytes returned by one blocking read as a single event.
///
/// An empty read means the input is closed and decodes as
/// [`LogicalEvent::Cancel`]. `ESC [ A` and `ESC [ B` are the up and down
/// arrows. Any other burst is classified by its first byte.
///
/// # Examples
///
/// ```
/// use shell_pick_core::keys::{decode, LogicalEvent};
///
/// assert_eq!(decode(b"a"), LogicalEvent::Char(b'a'));
/// assert_eq!(decode(b"\x1b[A"), LogicalEvent::ArrowUp);
/// assert_eq!(decode(b""), LogicalEvent::Cancel);
/// ```
#[must_use]
pub fn decode(bytes: &[u8]) -> LogicalEvent {
    match bytes {
        [] => LogicalEvent::Cancel,
        [ESC, b'[', b'A'] => LogicalEvent::ArrowUp,
        [ESC, b'[', b'B'] => LogicalEvent::ArrowDown,
        [first, ..] => classify(*first),
    }
}

/// Stateful decoder that survives escape sequences arriving in pieces.
///
/// A slow terminal may deliver `ESC`, `[` and `A` in separate reads. The
/// decoder keeps the unfinished prefix in `pending` until the sequence either
/// completes or turns out to be something it does not recognise.
///
/// CSI (`ESC [`) and SS3 (`ESC O`) sequences are consumed up to their final
/// byte, and only the up and down arrows of either form produce an event
/// other than [`LogicalEvent::Unknown`]. A printable byte right after `ESC`
/// is an Alt chord and is swallowed with it.
#[derive(Default, Debug)]
pub struct KeyDecoder {
    pending: Vec<u8>,
}

impl KeyDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes every event contained in `bytes`, in order.
    ///
    /// Returns an empty list when the bytes only extend a pending escape
    /// sequence.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<LogicalEvent> {
        let mut events = Vec::with_capacity(bytes.len());
        for &byte in bytes {
            self.push(byte, &mut events);
        }
        events
    }

    /// Whether an escape sequence is waiting for more bytes.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    fn push(&mut self, byte: u8, events: &mut Vec<LogicalEvent>) {
        match self.pending.len() {
            0 if byte == ESC => self.pending.push(byte),
            0 => events.push(classify(byte)),
            // Only `ESC` so far: a CSI or SS3 introducer, or an Alt chord.
            1 => match byte {
                b'[' | b'O' => self.pending.push(byte),
                ESC => self.abandon_and_retry(byte, events),
                0x20..=0x7e => {
                    log::debug!("Ignoring Alt+{}", byte as char);
                    self.pending.clear();
                    events.push(LogicalEvent::Unknown);
                }
                _ => self.abandon_and_retry(byte, events),
            },
            _ => match byte {
                // Parameter and intermediate bytes. Past the length limit they
                // are still consumed, just no longer kept.
                0x20..=0x3f => {
                    if self.pending.len() < MAX_SEQUENCE_LEN {
                        self.pending.push(byte);
                    }
                }
                // Final byte.
                0x40..=0x7e => {
                    let event = match (self.pending.as_slice(), byte) {
                        ([ESC, b'[' | b'O'], b'A') => LogicalEvent::ArrowUp,
                        ([ESC, b'[' | b'O'], b'B') => LogicalEvent::ArrowDown,
                        _ => {
                            log::debug!("Ignoring escape sequence {:?}{}", self.pending, byte);
                            LogicalEvent::Unknown
                        }
                    };
                    self.pending.clear();
                    events.push(event);
                }
                _ => self.abandon_and_retry(byte, events),
            },
        }
    }

    /// Drops the pending prefix as unknown and decodes `byte` afresh.
    fn abandon_and_retry(&mut self, byte: u8, events: &mut Vec<LogicalEvent>) {
        self.pending.clear();
        events.push(LogicalEvent::Unknown);
        self.push(byte, events);
    }
}
