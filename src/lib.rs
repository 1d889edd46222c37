//! `editbuf` - In-memory text buffer engine for interactive editors
//!
//! A mutable character buffer with incremental row/line-ending indexing,
//! tab-stop tracking, per-character decoration, bounded undo checkpoints,
//! and keystroke-driven multi-cursor editing over (row, column)
//! coordinates. The rendering layer, application state container, and key
//! capture are external collaborators: they feed [`KeyInput`] actions in
//! and read rows back out through the query surface.

#![allow(clippy::module_name_repetitions)] // Allow TextBuffer, RowEndingKind etc
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::cast_possible_wrap)] // Intentional index-delta conversions
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::option_if_let_else)] // if-let-else is clearer than map_or

pub mod error;
pub mod input;
pub mod text;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use input::{KeyInput, KeyModifiers};
pub use text::{
    BufferKey, CharKind, Cursor, DecoratedChar, Decoration, EditBlock, EditHistory, EditKind,
    MAX_EDIT_BLOCKS, RowEnding, RowEndingKind, TAB_WIDTH, TextBuffer,
};
