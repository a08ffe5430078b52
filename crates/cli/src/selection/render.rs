//! Full-screen drawing of the selector.

use std::io::{self, Write};

use crossterm::style::Color::{DarkBlue, Red, Yellow};
use crossterm::style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, queue};

use shell_pick_core::state::SelectionState;
use shell_pick_core::width::Layout;

use super::terminal::ClearAndHome;

const SELECTED_MARKER: &str = "> ";
const UNSELECTED_MARKER: &str = "  ";
const NO_MATCHES: &str = "No matches";
const KEY_HELP: &str = "↑/↓ Ctrl-N/Ctrl-P: move   Enter/Ctrl-Y: select   Ctrl-C: cancel";

/// Everything about a session's screen that does not change per key press.
#[derive(Clone, Copy, Debug)]
pub struct View<'a> {
    pub prompt: &'a str,
    pub layout: &'a Layout,
    pub show_footer: bool,
}

/// Redraws the whole selector: prompt and query, a blank line, the visible
/// rows with the selection highlighted, then the key binding footer.
pub fn redraw_ui<W: Write, S: AsRef<str>>(
    out: &mut W,
    view: &View<'_>,
    state: &SelectionState<'_, S>,
) -> io::Result<()> {
    queue!(
        out,
        ClearAndHome,
        Print(view.prompt),
        Print(state.query()),
        cursor::MoveToNextLine(1),
        cursor::MoveToNextLine(1),
    )?;

    let filtered = state.filtered();
    match state.selected_index() {
        None => {
            queue!(
                out,
                SetForegroundColor(Red),
                Print(NO_MATCHES),
                SetAttribute(Attribute::Reset),
                cursor::MoveToNextLine(1)
            )?;
        }
        Some(selected_index) => {
            let row_width = (view.layout.columns as usize).saturating_sub(SELECTED_MARKER.len());

            for index in view.layout.viewport(filtered.len(), selected_index) {
                let text = view.layout.truncate_to(filtered[index], row_width);
                write_row(out, &text, index == selected_index)?;
            }
        }
    }

    if view.show_footer {
        let position = state.selected_index().map_or(0, |i| i + 1);
        queue!(
            out,
            cursor::MoveToNextLine(1),
            SetAttribute(Attribute::Dim),
            Print(format!("{}/{}   {}", position, filtered.len(), KEY_HELP)),
            SetAttribute(Attribute::Reset),
        )?;
    }

    out.flush()
}

fn write_row<W: Write>(out: &mut W, text: &str, is_selected: bool) -> io::Result<()> {
    if is_selected {
        queue!(
            out,
            SetAttribute(Attribute::Bold),
            SetBackgroundColor(DarkBlue),
            SetForegroundColor(Yellow),
            Print(SELECTED_MARKER),
            Print(text),
            SetAttribute(Attribute::Reset),
        )?;
    } else {
        queue!(out, Print(UNSELECTED_MARKER), Print(text))?;
    }

    queue!(out, cursor::MoveToNextLine(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shell_pick_core::keys::LogicalEvent;

    const HIGHLIGHT: &str = "\x1b[1m\x1b[48;5;4m\x1b[38;5;11m> ";
    const RESET: &str = "\x1b[0m";

    fn render<S: AsRef<str>>(state: &SelectionState<'_, S>, layout: &Layout) -> String {
        let view = View {
            prompt: "Alias: ",
            layout,
            show_footer: true,
        };
        let mut out: Vec<u8> = Vec::new();
        redraw_ui(&mut out, &view, state).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_starts_with_clear_and_prompt() {
        let candidates = ["ll", "la"];
        let mut state = SelectionState::new(&candidates);
        state.apply(LogicalEvent::Char(b'l'));

        let screen = render(&state, &Layout::default());
        assert!(screen.starts_with("\x1b[2J\x1b[HAlias: l"));
    }

    #[test]
    fn test_highlights_only_selected_row() {
        let candidates = ["ll", "la", "gst"];
        let mut state = SelectionState::new(&candidates);
        state.apply(LogicalEvent::MoveNext);

        let screen = render(&state, &Layout::default());
        assert!(screen.contains("  ll"));
        assert!(screen.contains(&format!("{HIGHLIGHT}la{RESET}")));
        assert!(screen.contains("  gst"));
        assert_eq!(screen.matches(HIGHLIGHT).count(), 1);
        assert!(screen.contains("2/3"));
    }

    #[test]
    fn test_no_matches_line() {
        let candidates = ["ll", "la"];
        let mut state = SelectionState::new(&candidates);
        state.apply(LogicalEvent::Char(b'z'));

        let screen = render(&state, &Layout::default());
        assert!(screen.contains(NO_MATCHES));
        assert!(!screen.contains(HIGHLIGHT));
        assert!(screen.contains("0/0"));
    }

    #[test]
    fn test_only_viewport_rows_are_drawn() {
        let candidates: Vec<String> = (0..30).map(|i| format!("item-{i:02}")).collect();
        let mut state = SelectionState::new(&candidates);
        for _ in 0..15 {
            state.apply(LogicalEvent::MoveNext);
        }

        let screen = render(&state, &Layout::default());
        assert!(!screen.contains("item-04"));
        assert!(screen.contains("item-05"));
        assert!(screen.contains(&format!("{HIGHLIGHT}item-15{RESET}")));
        assert!(screen.contains("item-24"));
        assert!(!screen.contains("item-25"));
    }

    #[test]
    fn test_long_rows_are_truncated() {
        let candidates = ["export VERY_LONG_VARIABLE=/some/really/long/path"];
        let state = SelectionState::new(&candidates);

        let screen = render(&state, &Layout::new(12, 20));
        assert!(screen.contains(&format!("{HIGHLIGHT}export VE…{RESET}")));
    }

    #[test]
    fn test_footer_can_be_hidden() {
        let candidates = ["ll"];
        let state = SelectionState::new(&candidates);
        let layout = Layout::default();
        let view = View {
            prompt: "> ",
            layout: &layout,
            show_footer: false,
        };

        let mut out: Vec<u8> = Vec::new();
        redraw_ui(&mut out, &view, &state).unwrap();
        assert!(!String::from_utf8(out).unwrap().contains(KEY_HELP));
    }
}
