//! Display width measurement and the visible window of the filtered list.

use std::borrow::Cow;
use std::ops::Range;

use unicode_width::UnicodeWidthChar;

/// Default number of rows shown at once.
pub const DEFAULT_MAX_ROWS: usize = 20;

const ELLIPSIS: char = '…';

/// Number of terminal columns `text` occupies.
///
/// ANSI SGR sequences (`ESC [ ... m`) take no space, wide characters take two
/// columns and combining or control characters take none.
#[must_use]
pub fn visual_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            let mut rest = chars.clone();
            if rest.next() == Some('[') {
                let mut is_sgr = false;
                for next in rest.by_ref() {
                    if next == 'm' {
                        is_sgr = true;
                        break;
                    }
                    if !(next.is_ascii_digit() || next == ';') {
                        break;
                    }
                }
                if is_sgr {
                    chars = rest;
                    continue;
                }
            }
        }

        width += c.width().unwrap_or(0);
    }

    width
}

/// Geometry of one selector session.
///
/// Built once when a session starts and handed to the renderer by reference.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Layout {
    /// Terminal width in columns, `0` when unknown.
    pub columns: u16,
    /// Rows of candidates drawn at most.
    pub max_rows: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            columns: 0,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl Layout {
    #[must_use]
    pub fn new(columns: u16, max_rows: usize) -> Self {
        Self { columns, max_rows }
    }

    /// Index range of the rows to draw for a list of `len` entries.
    ///
    /// The window starts half its height above the selection and is clipped
    /// to the end of the list.
    ///
    /// ```
    /// use shell_pick_core::width::Layout;
    ///
    /// let layout = Layout::default();
    /// assert_eq!(layout.viewport(50, 4), 0..20);
    /// assert_eq!(layout.viewport(50, 25), 15..35);
    /// assert_eq!(layout.viewport(30, 29), 19..30);
    /// ```
    #[must_use]
    pub fn viewport(&self, len: usize, selected_index: usize) -> Range<usize> {
        let start = selected_index.saturating_sub(self.max_rows / 2).min(len);
        let end = len.min(start + self.max_rows);
        start..end
    }

    /// Shortens `text` so it fits in `width` columns, marking the cut with `…`.
    #[must_use]
    pub fn truncate_to<'a>(&self, text: &'a str, width: usize) -> Cow<'a, str> {
        if self.columns == 0 || visual_width(text) <= width {
            return Cow::Borrowed(text);
        }

        let budget = width.saturating_sub(ELLIPSIS.width().unwrap_or(1));
        let mut used = 0;
        let mut truncated = String::with_capacity(text.len());

        for c in text.chars() {
            let char_width = c.width().unwrap_or(0);
            if used + char_width > budget {
                break;
            }
            used += char_width;
            truncated.push(c);
        }

        if width > 0 {
            truncated.push(ELLIPSIS);
        }
        Cow::Owned(truncated)
    }

    /// Shortens `text` to the full terminal width.
    #[must_use]
    pub fn truncate<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.truncate_to(text, self.columns as usize)
    }
}
