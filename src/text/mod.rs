//! The buffer engine: content, row index, tab index, undo, editing.
//!
//! Key types:
//!
//! - [`TextBuffer`]: character content with row/tab indexing, decoration
//!   painting, undo checkpoints, and the query surface the rendering
//!   collaborator draws from
//! - [`Cursor`]: caller-owned (row, column) coordinates the edit
//!   dispatcher updates in place
//! - [`EditBlock`]: one undo checkpoint in the bounded history
//!
//! # Examples
//!
//! ## Construction and queries
//!
//! ```
//! use editbuf::TextBuffer;
//!
//! let buffer = TextBuffer::from_text("fn main() {}\n");
//! assert_eq!(buffer.row_count(), 2);
//! assert_eq!(buffer.row_length(0, false), 12);
//! ```
//!
//! ## Keystroke editing with undo checkpoints
//!
//! ```
//! use editbuf::{Cursor, KeyInput, TextBuffer};
//!
//! let mut buffer = TextBuffer::from_text("");
//! let mut cursors = [Cursor::origin()];
//!
//! for c in ['h', 'i'] {
//!     buffer.perform_edit(&KeyInput::char(c), &mut cursors)?;
//! }
//! assert_eq!(buffer.all_text(), "hi");
//! // Two same-kind edits coalesce into one checkpoint.
//! assert_eq!(buffer.edit_blocks().len(), 1);
//! # Ok::<(), editbuf::Error>(())
//! ```

mod buffer;
mod character;
mod cursor;
mod edit;
mod history;
mod row;

pub use buffer::{BufferKey, TAB_WIDTH, TextBuffer};
pub use character::{CharKind, DecoratedChar, Decoration};
pub use cursor::Cursor;
pub use history::{EditBlock, EditHistory, EditKind, MAX_EDIT_BLOCKS};
pub use row::{RowEnding, RowEndingKind};
