//! The text buffer engine: content store, row index, tab index.
//!
//! [`TextBuffer`] keeps the character content of one editor buffer
//! together with the derived state the rendering collaborator queries:
//! an ordered row index (one [`RowEnding`] per row, each holding the
//! start position of the *next* row), a sorted list of tab positions,
//! the widest row observed at construction, and a bounded undo history.
//! Row and tab indexes are maintained incrementally by the edit
//! dispatcher (see [`perform_edit`](TextBuffer::perform_edit)); they are
//! rebuilt from scratch only at construction.
//!
//! # Examples
//!
//! ```
//! use editbuf::TextBuffer;
//!
//! let buffer = TextBuffer::from_text("line1\r\nline2");
//! assert_eq!(buffer.row_count(), 2);
//! assert_eq!(buffer.row_length(0, false), 5);
//! assert_eq!(buffer.row_length(0, true), 7);
//! assert_eq!(buffer.all_text(), "line1\r\nline2");
//! ```

use std::ops::Range;

use uuid::Uuid;

use crate::text::character::{CharKind, DecoratedChar, Decoration};
use crate::text::cursor::Cursor;
use crate::text::history::{EditBlock, EditHistory, EditKind};
use crate::text::row::{RowEnding, RowEndingKind};

/// Tab stop width, in columns, for the rendering collaborator's layout
/// math. The engine itself stores tabs as single characters.
pub const TAB_WIDTH: usize = 4;

/// Opaque identity distinguishing buffer instances held by an external
/// owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BufferKey(Uuid);

impl BufferKey {
    /// Generate a fresh key.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BufferKey {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory mutable text buffer with row/tab indexing, decoration
/// painting, and bounded undo checkpoints.
///
/// The buffer assumes single-threaded, serialized access: it carries no
/// internal synchronization, and every operation completes synchronously
/// in the calling context. Ownership is exclusive to the holder for the
/// duration of any call.
#[derive(Clone, Debug)]
pub struct TextBuffer {
    key: BufferKey,
    pub(super) content: Vec<DecoratedChar>,
    pub(super) row_endings: Vec<RowEnding>,
    pub(super) tab_positions: Vec<usize>,
    pub(super) history: EditHistory,
    max_row_width: usize,
}

impl TextBuffer {
    /// Build a buffer from initial text with a fresh identity key.
    ///
    /// One left-to-right scan populates the content store, the row index
    /// (a CR followed by an LF upgrades the CR's entry to one CRLF entry
    /// in place), the tab index, and the maximum row width. The terminal
    /// `EndOfFile` entry is appended unconditionally, so even an empty
    /// buffer has one row.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::with_key(text, BufferKey::new())
    }

    /// Build a buffer from initial text under a caller-supplied key.
    #[must_use]
    pub fn with_key(text: &str, key: BufferKey) -> Self {
        let mut content = Vec::with_capacity(text.len());
        let mut row_endings = Vec::new();
        let mut tab_positions = Vec::new();
        let mut max_row_width = 0usize;
        let mut row_width = 0usize;
        let mut previous = '\0';

        for (index, character) in text.chars().enumerate() {
            match character {
                '\r' => {
                    row_endings.push(RowEnding::new(index + 1, RowEndingKind::CarriageReturn));
                    max_row_width = max_row_width.max(row_width);
                    row_width = 0;
                }
                '\n' => {
                    if previous == '\r' {
                        // CRLF is one logical ending: widen the CR entry
                        // instead of adding a second one.
                        if let Some(last) = row_endings.last_mut() {
                            *last = RowEnding::new(
                                last.position + 1,
                                RowEndingKind::CarriageReturnNewLine,
                            );
                        }
                    } else {
                        row_endings.push(RowEnding::new(index + 1, RowEndingKind::NewLine));
                        max_row_width = max_row_width.max(row_width);
                        row_width = 0;
                    }
                }
                '\t' => {
                    tab_positions.push(index);
                    row_width += 1;
                }
                _ => row_width += 1,
            }

            previous = character;
            content.push(DecoratedChar::plain(character));
        }

        max_row_width = max_row_width.max(row_width);
        row_endings.push(RowEnding::new(content.len(), RowEndingKind::EndOfFile));

        Self {
            key,
            content,
            row_endings,
            tab_positions,
            history: EditHistory::new(),
            max_row_width,
        }
    }

    /// This buffer's identity key.
    #[must_use]
    pub const fn key(&self) -> BufferKey {
        self.key
    }

    /// Number of rows. Always at least 1.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_endings.len()
    }

    /// Number of characters in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the buffer holds no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Widest row (in characters, endings excluded) observed when the
    /// buffer was constructed. Used for horizontal-scroll sizing.
    #[must_use]
    pub const fn max_row_width(&self) -> usize {
        self.max_row_width
    }

    /// The row index entries, oldest row first. The final entry is always
    /// `{len(), EndOfFile}`.
    #[must_use]
    pub fn row_endings(&self) -> &[RowEnding] {
        &self.row_endings
    }

    /// Sorted absolute positions of every tab character in the content.
    #[must_use]
    pub fn tab_positions(&self) -> &[usize] {
        &self.tab_positions
    }

    /// The undo blocks recorded so far, oldest first (read-only, for
    /// history UIs).
    #[must_use]
    pub fn edit_blocks(&self) -> &[EditBlock] {
        self.history.blocks()
    }

    /// The entry bounding the start of a row: row 0 starts at position 0
    /// with kind `StartOfFile`; any other row starts where the previous
    /// row's ending entry points. Rows past the end clamp to the final
    /// entry.
    #[must_use]
    pub fn start_of_row(&self, row: usize) -> RowEnding {
        let row = row.min(self.row_endings.len());
        if row > 0 {
            self.row_endings[row - 1]
        } else {
            RowEnding::new(0, RowEndingKind::StartOfFile)
        }
    }

    /// Length of a row in characters. Line-ending characters are excluded
    /// unless `include_endings` is true. Out-of-range rows have length 0.
    #[must_use]
    pub fn row_length(&self, row: usize, include_endings: bool) -> usize {
        let Some(end) = self.row_endings.get(row) else {
            return 0;
        };
        let start = self.start_of_row(row).position;
        let with_endings = end.position - start;

        if include_endings {
            with_endings
        } else {
            with_endings - end.kind.width_in_chars()
        }
    }

    /// Absolute position of a (row, column) coordinate.
    #[must_use]
    pub fn position_index(&self, row: usize, column: usize) -> usize {
        self.start_of_row(row).position + column
    }

    /// Absolute position of a cursor.
    #[must_use]
    pub fn cursor_position_index(&self, cursor: &Cursor) -> usize {
        self.position_index(cursor.row, cursor.column)
    }

    /// Slice the buffer into per-row character lists.
    ///
    /// `count` is clamped to the rows remaining from `start`; `count == 0`
    /// (or an out-of-range `start`) yields no rows. Each row includes its
    /// line-ending characters.
    #[must_use]
    pub fn rows(&self, start: usize, count: usize) -> Vec<Vec<DecoratedChar>> {
        let available = self.row_endings.len().saturating_sub(start);
        let count = count.min(available);

        (start..start + count)
            .map(|row| {
                let from = self.start_of_row(row).position;
                let to = self.row_endings[row].position;
                self.content[from..to].to_vec()
            })
            .collect()
    }

    /// The character at an absolute position.
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<DecoratedChar> {
        self.content.get(position).copied()
    }

    /// Extract the full text.
    #[must_use]
    pub fn all_text(&self) -> String {
        self.content.iter().map(|c| c.value).collect()
    }

    /// Extract `count` characters starting at an absolute position,
    /// clamped to the buffer bounds.
    #[must_use]
    pub fn text_range(&self, start: usize, count: usize) -> String {
        self.content
            .iter()
            .skip(start)
            .take(count)
            .map(|c| c.value)
            .collect()
    }

    /// Locate the row containing an absolute position.
    ///
    /// Returns `(row, row start position, row ending entry)`: the row is
    /// one past the last entry the position has reached, so a position at
    /// the very end of the buffer reports the row after the final ending.
    /// Positions before the first row ending resolve to row 0.
    #[must_use]
    pub fn find_row_at_position(&self, position: usize) -> (usize, usize, RowEnding) {
        for index in (0..self.row_endings.len()).rev() {
            let ending = self.row_endings[index];
            if position >= ending.position {
                let row_ending = if index == self.row_endings.len() - 1 {
                    ending
                } else {
                    self.row_endings[index + 1]
                };
                return (index + 1, ending.position, row_ending);
            }
        }

        (0, 0, self.row_endings[0])
    }

    /// Count the tab characters on `row` strictly before `column`.
    ///
    /// Combined with [`TAB_WIDTH`] this gives the rendering collaborator
    /// its tab-stop offsets.
    #[must_use]
    pub fn tabs_on_row_before_column(&self, row: usize, column: usize) -> usize {
        let start = self.start_of_row(row).position;

        self.tab_positions
            .iter()
            .skip_while(|&&position| position < start)
            .take_while(|&&position| position < start + column)
            .count()
    }

    /// Paint a decoration over half-open spans of absolute positions.
    ///
    /// Last write wins; overlapping spans are not merged. Spans are
    /// clamped to the buffer bounds.
    pub fn apply_decoration(&mut self, decoration: Decoration, spans: &[Range<usize>]) {
        for span in spans {
            let start = span.start.min(self.content.len());
            let end = span.end.min(self.content.len());

            for cell in &mut self.content[start..end] {
                cell.decoration = decoration;
            }
        }
    }

    /// Scan along a row for the first character of a different coarse
    /// kind (whitespace / punctuation / word).
    ///
    /// The scan starts at `column` (stepped back one first when moving
    /// backwards) and runs while the character kind matches the starting
    /// kind. Returns the column of the first differing character; for a
    /// backward scan, the column just after it. Returns `None` when the
    /// scan leaves the row without finding one.
    #[must_use]
    pub fn column_of_differing_kind(
        &self,
        row: usize,
        column: usize,
        backwards: bool,
    ) -> Option<usize> {
        let start_of_row = self.start_of_row(row).position;
        let last_on_row = self.row_endings.get(row)?.position.checked_sub(1)?;

        let mut position = start_of_row + column;

        if backwards {
            if position <= start_of_row {
                return None;
            }
            position -= 1;
        }

        let starting_kind = self.kind_at(position)?;

        loop {
            if position > last_on_row || position < start_of_row {
                return None;
            }

            let Some(kind) = self.kind_at(position) else {
                return None;
            };
            if kind != starting_kind {
                break;
            }

            if backwards {
                if position == 0 {
                    return None;
                }
                position -= 1;
            } else {
                position += 1;
            }
        }

        if backwards {
            position += 1;
        }

        Some(position - start_of_row)
    }

    fn kind_at(&self, position: usize) -> Option<CharKind> {
        self.content.get(position).map(|c| c.kind())
    }

    /// Snapshot the current text into the undo log if the incoming edit
    /// starts a new run of a different kind.
    pub(super) fn ensure_edit_block(&mut self, kind: EditKind) {
        if self.history.latest_kind() != Some(kind) {
            let snapshot = self.all_text();
            tracing::debug!(kind = kind.as_str(), chars = snapshot.len(), "undo checkpoint");
            self.history.push_checkpoint(kind, snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_has_one_row() {
        let buffer = TextBuffer::from_text("");
        assert_eq!(buffer.row_count(), 1);
        assert_eq!(
            buffer.row_endings(),
            &[RowEnding::new(0, RowEndingKind::EndOfFile)]
        );
        assert_eq!(buffer.all_text(), "");
    }

    #[test]
    fn test_construction_round_trip() {
        let text = "one\r\ntwo\rthree\nfour\t.";
        let buffer = TextBuffer::from_text(text);
        assert_eq!(buffer.all_text(), text);
    }

    #[test]
    fn test_crlf_is_one_entry() {
        let buffer = TextBuffer::from_text("line1\r\nline2");
        assert_eq!(buffer.row_count(), 2);
        assert_eq!(
            buffer.row_endings()[0],
            RowEnding::new(7, RowEndingKind::CarriageReturnNewLine)
        );
        assert_eq!(buffer.row_length(0, false), 5);
        assert_eq!(buffer.row_length(0, true), 7);
    }

    #[test]
    fn test_mixed_endings_index() {
        let buffer = TextBuffer::from_text("a\rb\nc\r\nd");
        assert_eq!(
            buffer.row_endings(),
            &[
                RowEnding::new(2, RowEndingKind::CarriageReturn),
                RowEnding::new(4, RowEndingKind::NewLine),
                RowEnding::new(7, RowEndingKind::CarriageReturnNewLine),
                RowEnding::new(8, RowEndingKind::EndOfFile),
            ]
        );
    }

    #[test]
    fn test_tab_positions_recorded() {
        let buffer = TextBuffer::from_text("\ta\tb\n\tc");
        assert_eq!(buffer.tab_positions(), &[0, 2, 5]);
    }

    #[test]
    fn test_max_row_width() {
        let buffer = TextBuffer::from_text("ab\nlongest\ncd");
        assert_eq!(buffer.max_row_width(), 7);

        // The final, unterminated row participates.
        let buffer = TextBuffer::from_text("ab\nwidest row here");
        assert_eq!(buffer.max_row_width(), 15);
    }

    #[test]
    fn test_start_of_row() {
        let buffer = TextBuffer::from_text("ab\ncd");
        assert_eq!(
            buffer.start_of_row(0),
            RowEnding::new(0, RowEndingKind::StartOfFile)
        );
        assert_eq!(
            buffer.start_of_row(1),
            RowEnding::new(3, RowEndingKind::NewLine)
        );
    }

    #[test]
    fn test_position_index() {
        let buffer = TextBuffer::from_text("ab\ncd");
        assert_eq!(buffer.position_index(0, 1), 1);
        assert_eq!(buffer.position_index(1, 1), 4);
        assert_eq!(buffer.cursor_position_index(&Cursor::new(1, 1)), 4);
    }

    #[test]
    fn test_rows_slicing_and_clamping() {
        let buffer = TextBuffer::from_text("ab\ncd\nef");

        let rows = buffer.rows(1, 10);
        assert_eq!(rows.len(), 2);
        let second: String = rows[0].iter().map(|c| c.value).collect();
        assert_eq!(second, "cd\n");

        assert!(buffer.rows(0, 0).is_empty());
        assert!(buffer.rows(9, 3).is_empty());
    }

    #[test]
    fn test_text_range_clamps() {
        let buffer = TextBuffer::from_text("abcdef");
        assert_eq!(buffer.text_range(2, 3), "cde");
        assert_eq!(buffer.text_range(4, 10), "ef");
        assert_eq!(buffer.text_range(10, 3), "");
    }

    #[test]
    fn test_find_row_at_position() {
        let buffer = TextBuffer::from_text("ab\ncd\nef");

        let (row, start, ending) = buffer.find_row_at_position(1);
        assert_eq!((row, start), (0, 0));
        assert_eq!(ending, RowEnding::new(3, RowEndingKind::NewLine));

        let (row, start, ending) = buffer.find_row_at_position(4);
        assert_eq!((row, start), (1, 3));
        assert_eq!(ending, RowEnding::new(6, RowEndingKind::NewLine));

        // Past the end reports the row after the final ending.
        let (row, start, ending) = buffer.find_row_at_position(100);
        assert_eq!((row, start), (3, 8));
        assert_eq!(ending, RowEnding::new(8, RowEndingKind::EndOfFile));
    }

    #[test]
    fn test_tabs_on_row_before_column() {
        let buffer = TextBuffer::from_text("\ta\tbc\n\td");
        assert_eq!(buffer.tabs_on_row_before_column(0, 0), 0);
        assert_eq!(buffer.tabs_on_row_before_column(0, 1), 1);
        assert_eq!(buffer.tabs_on_row_before_column(0, 3), 2);
        assert_eq!(buffer.tabs_on_row_before_column(1, 1), 1);
    }

    #[test]
    fn test_apply_decoration_last_write_wins() {
        let mut buffer = TextBuffer::from_text("abcd");
        buffer.apply_decoration(Decoration::Selection, &[0..2]);
        buffer.apply_decoration(Decoration::None, &[1..3]);

        assert_eq!(buffer.char_at(0).unwrap().decoration, Decoration::Selection);
        assert_eq!(buffer.char_at(1).unwrap().decoration, Decoration::None);
        assert_eq!(buffer.char_at(2).unwrap().decoration, Decoration::None);
    }

    #[test]
    fn test_apply_decoration_clamps_out_of_bounds() {
        let mut buffer = TextBuffer::from_text("ab");
        buffer.apply_decoration(Decoration::Selection, &[0..100, 50..60]);
        assert_eq!(buffer.char_at(0).unwrap().decoration, Decoration::Selection);
        assert_eq!(buffer.char_at(1).unwrap().decoration, Decoration::Selection);
    }

    #[test]
    fn test_differing_kind_forward() {
        let buffer = TextBuffer::from_text("foo bar");
        assert_eq!(buffer.column_of_differing_kind(0, 0, false), Some(3));
        assert_eq!(buffer.column_of_differing_kind(0, 3, false), Some(4));
    }

    #[test]
    fn test_differing_kind_backward() {
        let buffer = TextBuffer::from_text("foo bar");
        // From the end of "bar", back to its first column.
        assert_eq!(buffer.column_of_differing_kind(0, 7, true), Some(4));
        assert_eq!(buffer.column_of_differing_kind(0, 4, true), Some(3));
    }

    #[test]
    fn test_differing_kind_stays_on_row() {
        let buffer = TextBuffer::from_text("aaa\nbbb");
        assert_eq!(buffer.column_of_differing_kind(0, 0, false), Some(3));
        assert_eq!(buffer.column_of_differing_kind(1, 0, false), None);
        assert_eq!(buffer.column_of_differing_kind(0, 0, true), None);
        assert_eq!(buffer.column_of_differing_kind(1, 0, true), None);
    }

    #[test]
    fn test_differing_kind_punctuation() {
        let buffer = TextBuffer::from_text("ab;;cd");
        assert_eq!(buffer.column_of_differing_kind(0, 0, false), Some(2));
        assert_eq!(buffer.column_of_differing_kind(0, 2, false), Some(4));
    }

    #[test]
    fn test_keys_distinguish_buffers() {
        let a = TextBuffer::from_text("");
        let b = TextBuffer::from_text("");
        assert_ne!(a.key(), b.key());

        let key = BufferKey::new();
        let c = TextBuffer::with_key("x", key);
        assert_eq!(c.key(), key);
    }
}
