//! Row ending kinds and the row index entry type.

use std::fmt;

/// The kind of ending that terminates a row.
///
/// `CarriageReturnNewLine` is one logical ending spanning two characters.
/// `StartOfFile` and `EndOfFile` are the zero-width virtual endings
/// bounding the first and last rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowEndingKind {
    StartOfFile,
    CarriageReturn,
    NewLine,
    CarriageReturnNewLine,
    EndOfFile,
}

impl RowEndingKind {
    /// The literal characters of this ending.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CarriageReturn => "\r",
            Self::NewLine => "\n",
            Self::CarriageReturnNewLine => "\r\n",
            Self::StartOfFile | Self::EndOfFile => "",
        }
    }

    /// Character width of this ending.
    #[must_use]
    pub const fn width_in_chars(self) -> usize {
        self.as_str().len()
    }
}

impl fmt::Display for RowEndingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StartOfFile => "start of file",
            Self::CarriageReturn => "CR",
            Self::NewLine => "LF",
            Self::CarriageReturnNewLine => "CRLF",
            Self::EndOfFile => "end of file",
        };
        write!(f, "{name}")
    }
}

/// A row index entry: the absolute position where the NEXT row starts,
/// tagged with the kind of ending that closed this row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowEnding {
    pub position: usize,
    pub kind: RowEndingKind,
}

impl RowEnding {
    #[must_use]
    pub const fn new(position: usize, kind: RowEndingKind) -> Self {
        Self { position, kind }
    }

    /// Derive a copy of this entry at a different position.
    #[must_use]
    pub const fn at_position(self, position: usize) -> Self {
        Self {
            position,
            kind: self.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ending_widths() {
        assert_eq!(RowEndingKind::CarriageReturn.width_in_chars(), 1);
        assert_eq!(RowEndingKind::NewLine.width_in_chars(), 1);
        assert_eq!(RowEndingKind::CarriageReturnNewLine.width_in_chars(), 2);
        assert_eq!(RowEndingKind::StartOfFile.width_in_chars(), 0);
        assert_eq!(RowEndingKind::EndOfFile.width_in_chars(), 0);
    }

    #[test]
    fn test_derived_copy() {
        let entry = RowEnding::new(3, RowEndingKind::NewLine);
        let shifted = entry.at_position(4);
        assert_eq!(shifted.position, 4);
        assert_eq!(shifted.kind, RowEndingKind::NewLine);
    }
}
