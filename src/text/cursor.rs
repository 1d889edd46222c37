//! Caller-owned cursor coordinates.

/// A cursor position in (row, column) coordinates.
///
/// Cursors are owned by the caller and handed to the edit dispatcher as a
/// mutable slice; the dispatcher updates each cursor's coordinates in
/// place as it applies that cursor's edit. `preferred_column` is the
/// column the cursor returns to during vertical movement across rows of
/// differing length; horizontal edits keep it tracking the new column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub column: usize,
    pub preferred_column: usize,
}

impl Cursor {
    /// Create a cursor with its preferred column tracking `column`.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            preferred_column: column,
        }
    }

    /// Create a cursor at the start of the buffer.
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Derive a copy at different coordinates, keeping the preferred column.
    #[must_use]
    pub const fn at(self, row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            preferred_column: self.preferred_column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tracks_preferred_column() {
        let cursor = Cursor::new(2, 5);
        assert_eq!(cursor.preferred_column, 5);
    }

    #[test]
    fn test_derived_copy_keeps_preferred_column() {
        let cursor = Cursor::new(0, 8).at(1, 3);
        assert_eq!(cursor.row, 1);
        assert_eq!(cursor.column, 3);
        assert_eq!(cursor.preferred_column, 8);
    }
}
