//! The edit dispatcher: keystroke-driven insertion and deletion.
//!
//! A single edit action is a *batch*: one [`KeyInput`] applied at one or
//! more caller-owned cursors. The dispatcher classifies the input
//! (deletion meta key, literal or whitespace-code insertion, or no-op),
//! applies it once per cursor, and keeps the row index, tab index, undo
//! log, and cursor coordinates consistent in one synchronous call.
//!
//! # Examples
//!
//! ```
//! use editbuf::{Cursor, KeyInput, TextBuffer};
//!
//! let mut buffer = TextBuffer::from_text("ab\ncd");
//! let mut cursors = [Cursor::new(0, 1)];
//!
//! buffer.perform_edit(&KeyInput::char('X'), &mut cursors)?;
//! assert_eq!(buffer.all_text(), "aXb\ncd");
//! assert_eq!(cursors[0].column, 2);
//! # Ok::<(), editbuf::Error>(())
//! ```

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::input::{self, KeyInput, meta_keys};
use crate::text::buffer::TextBuffer;
use crate::text::character::DecoratedChar;
use crate::text::cursor::Cursor;
use crate::text::history::EditKind;
use crate::text::row::{RowEnding, RowEndingKind};

impl TextBuffer {
    /// Apply one key input at every cursor in the batch.
    ///
    /// Backspace and Delete take the deletion path; other meta keys
    /// (movement, shortcuts) are no-ops for this dispatcher. Everything
    /// else inserts: the key's literal character, or the character its
    /// whitespace code (Tab/Enter/Space/CarriageReturn) resolves to.
    ///
    /// Cursors are processed in caller-supplied order, each applied at
    /// its own pre-batch coordinates; only the state after the full
    /// batch is a valid observation point. Unrecognized input is
    /// rejected with [`Error::UnrecognizedInput`] before any mutation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedInput`] when the input resolves to
    /// neither a known meta key, a whitespace code, nor a literal
    /// character.
    pub fn perform_edit(&mut self, input: &KeyInput, cursors: &mut [Cursor]) -> Result<()> {
        debug!(
            key = input.key.as_str(),
            code = input.code.as_str(),
            cursors = cursors.len(),
            "edit"
        );

        if input.is_meta_key() {
            match input.key.as_str() {
                meta_keys::BACKSPACE | meta_keys::DELETE => self.perform_deletions(input, cursors),
                _ => Ok(()),
            }
        } else {
            self.perform_insertions(input, cursors)
        }
    }

    fn perform_insertions(&mut self, input: &KeyInput, cursors: &mut [Cursor]) -> Result<()> {
        // Resolve the character first so unrecognized input is rejected
        // before the undo log or content is touched.
        let character = match input::whitespace_code_to_char(&input.code) {
            Some(c) => c,
            None => input
                .key
                .chars()
                .next()
                .ok_or_else(|| Error::UnrecognizedInput {
                    key: input.key.clone(),
                    code: input.code.clone(),
                })?,
        };

        self.ensure_edit_block(EditKind::Insertion);

        for cursor in cursors.iter_mut() {
            let before = *cursor;
            if !self.is_valid_coordinate(before) {
                continue;
            }

            let position = self.position_index(before.row, before.column);
            let splits_row = input::is_line_ending_char(character);

            trace!(row = before.row, column = before.column, ?character, "insert");

            if splits_row {
                // A literal CR keeps its own ending kind so the row
                // index always matches the stored character.
                let kind = if character == '\r' {
                    RowEndingKind::CarriageReturn
                } else {
                    RowEndingKind::NewLine
                };

                self.content.insert(position, DecoratedChar::plain(character));
                self.row_endings
                    .insert(before.row, RowEnding::new(position + 1, kind));

                cursor.row = before.row + 1;
                cursor.column = 0;
                cursor.preferred_column = 0;
            } else {
                if character == '\t' {
                    self.insert_tab_position(position);
                }

                self.content.insert(position, DecoratedChar::plain(character));

                cursor.column = before.column + 1;
                cursor.preferred_column = cursor.column;
            }

            // Every row ending at or after the edit shifts right by one.
            // For a row split the new entry itself must not shift, so the
            // shift starts one row later.
            let first_row = if splits_row { before.row + 1 } else { before.row };
            self.shift_row_endings(first_row, 1);

            if character != '\t' {
                self.shift_tab_positions_at(position, 1);
            }
        }

        Ok(())
    }

    fn perform_deletions(&mut self, input: &KeyInput, cursors: &mut [Cursor]) -> Result<()> {
        self.ensure_edit_block(EditKind::Deletion);

        let backwards = input.key == meta_keys::BACKSPACE;

        for cursor in cursors.iter_mut() {
            let before = *cursor;
            if !self.is_valid_coordinate(before) {
                continue;
            }

            let cursor_position = self.position_index(before.row, before.column);

            // Backspace removes the character before the cursor; Delete
            // removes the character at it. Out of bounds is a silent
            // no-op for this cursor.
            let target = if backwards {
                match cursor_position.checked_sub(1) {
                    Some(index) => index,
                    None => continue,
                }
            } else {
                cursor_position
            };
            if target >= self.content.len() {
                continue;
            }

            let character = self.content[target].value;
            let mut rows_removed = 0usize;

            let (range_start, range_len) = if input::is_line_ending_char(character) {
                // The ending's entry points one past its last character,
                // so it sits at target+1 (CR, LF, or the LF half of a
                // CRLF) or target+2 (the CR half of a CRLF).
                let Some(entry_index) = self
                    .row_endings
                    .iter()
                    .position(|e| e.position == target + 1 || e.position == target + 2)
                else {
                    continue;
                };

                let ending = self.row_endings.remove(entry_index);
                rows_removed += 1;

                // A CRLF is removed as one two-character unit no matter
                // which direction triggered the delete.
                let width = ending.kind.width_in_chars();
                let start = if backwards { target + 1 - width } else { target };
                (start, width)
            } else {
                if character == '\t' {
                    self.remove_tab_position(target);
                }
                (target, 1)
            };

            let chars_removed = range_len;
            self.content.drain(range_start..range_start + range_len);

            trace!(
                row = before.row,
                column = before.column,
                chars_removed,
                rows_removed,
                backwards,
                "delete"
            );

            if backwards {
                let row = before.row.saturating_sub(rows_removed);
                // Row entries have not shifted yet, so the new row's
                // start is still in pre-removal coordinates, matching
                // cursor_position.
                let row_start = self.start_of_row(row).position;
                cursor.row = row;
                cursor.column = (cursor_position - chars_removed).saturating_sub(row_start);
            }

            let first_row = if backwards {
                before.row.saturating_sub(rows_removed)
            } else {
                before.row
            };
            self.shift_row_endings(first_row, -(chars_removed as isize));
            self.shift_tab_positions_at(target, -(chars_removed as isize));
        }

        Ok(())
    }

    /// A cursor must sit on an existing row, at or before the row's last
    /// editable column. Cursors that do not are skipped as silent
    /// no-ops, keeping the indexes intact.
    fn is_valid_coordinate(&self, cursor: Cursor) -> bool {
        cursor.row < self.row_count() && cursor.column <= self.row_length(cursor.row, false)
    }

    /// Record a tab at `position`, shifting the tabs at or after it.
    fn insert_tab_position(&mut self, position: usize) {
        match self.tab_positions.iter().position(|&p| p >= position) {
            None => self.tab_positions.push(position),
            Some(index) => {
                for p in &mut self.tab_positions[index..] {
                    *p += 1;
                }
                self.tab_positions.insert(index, position);
            }
        }
    }

    fn remove_tab_position(&mut self, position: usize) {
        if let Some(index) = self.tab_positions.iter().position(|&p| p == position) {
            self.tab_positions.remove(index);
        }
    }

    fn shift_row_endings(&mut self, first_row: usize, delta: isize) {
        let first_row = first_row.min(self.row_endings.len());
        for entry in &mut self.row_endings[first_row..] {
            entry.position = entry.position.wrapping_add_signed(delta);
        }
    }

    fn shift_tab_positions_at(&mut self, position: usize, delta: isize) {
        if let Some(index) = self.tab_positions.iter().position(|&p| p >= position) {
            for p in &mut self.tab_positions[index..] {
                *p = p.wrapping_add_signed(delta);
            }
        }
    }
}
