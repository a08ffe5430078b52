//! Query and selection state for one selector session.
//!
//! The state only ever borrows the caller's candidates. Every change to the
//! query recomputes the filtered list from scratch and moves the selection
//! back to the top.

use log::debug;

use crate::filter::filter;
use crate::keys::LogicalEvent;

/// Where a session stands after applying an event.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionState<'a> {
    Running,
    Selected(&'a str),
    Cancelled,
}

impl SessionState<'_> {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::Running)
    }
}

/// Direction to cycle through the filtered list.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CycleDirection {
    Up,
    Down,
}

/// The live query, the candidates matching it and the highlighted row.
#[derive(Clone, Debug)]
pub struct SelectionState<'a, S> {
    candidates: &'a [S],
    query: String,
    filtered: Vec<&'a str>,
    selected_index: usize,
}

impl<'a, S: AsRef<str>> SelectionState<'a, S> {
    /// Starts with an empty query, every candidate visible and the first one
    /// selected.
    pub fn new(candidates: &'a [S]) -> Self {
        Self {
            candidates,
            query: String::new(),
            filtered: filter(candidates, ""),
            selected_index: 0,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn filtered(&self) -> &[&'a str] {
        &self.filtered
    }

    /// Index of the highlighted row, `None` while nothing matches.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        (!self.filtered.is_empty()).then_some(self.selected_index)
    }

    /// The highlighted candidate, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&'a str> {
        self.filtered.get(self.selected_index).copied()
    }

    /// Applies one decoded key press.
    pub fn apply(&mut self, event: LogicalEvent) -> SessionState<'a> {
        match event {
            LogicalEvent::Char(byte) => {
                self.query.push(char::from(byte));
                self.refilter();
            }
            LogicalEvent::Backspace => {
                if self.query.pop().is_some() {
                    self.refilter();
                }
            }
            LogicalEvent::MoveNext | LogicalEvent::ArrowDown => self.cycle(CycleDirection::Down),
            LogicalEvent::MovePrev | LogicalEvent::ArrowUp => self.cycle(CycleDirection::Up),
            LogicalEvent::Enter | LogicalEvent::Accept => {
                if let Some(selected) = self.selected() {
                    return SessionState::Selected(selected);
                }
                debug!("Ignoring confirmation with no matching candidates");
            }
            LogicalEvent::Cancel => return SessionState::Cancelled,
            LogicalEvent::Unknown => {}
        }

        SessionState::Running
    }

    fn refilter(&mut self) {
        self.filtered = filter(self.candidates, &self.query);
        self.selected_index = 0;
    }

    fn cycle(&mut self, direction: CycleDirection) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }

        self.selected_index = match direction {
            CycleDirection::Down => (self.selected_index + 1) % len,
            CycleDirection::Up => (self.selected_index + len - 1) % len,
        };
    }
}
