//! Keyboard input values and key classification facts.

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Alt/Option key.
        const ALT = 0b0000_0010;
        /// Control key.
        const CTRL = 0b0000_0100;
    }
}

/// Key labels for the non-printable command keys the engine recognizes.
pub mod meta_keys {
    pub const BACKSPACE: &str = "Backspace";
    pub const DELETE: &str = "Delete";
    pub const ESCAPE: &str = "Escape";
}

/// Physical codes that resolve to whitespace characters.
pub mod whitespace_codes {
    pub const TAB: &str = "Tab";
    pub const ENTER: &str = "Enter";
    pub const SPACE: &str = "Space";
    pub const CARRIAGE_RETURN: &str = "CarriageReturn";
}

/// A keyboard input value.
///
/// Mirrors the key event a hosting UI layer captures: `key` is the logical
/// label ("a", "Backspace"), `code` the physical code ("KeyA", "Enter"),
/// plus the modifiers held. Inputs with multi-character labels that do not
/// resolve to a whitespace code are *meta keys* (commands, not literal
/// character entry).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyInput {
    /// Logical key label.
    pub key: String,
    /// Physical key code.
    pub code: String,
    /// Modifier keys held.
    pub modifiers: KeyModifiers,
}

impl KeyInput {
    /// Create a key input with no modifiers.
    #[must_use]
    pub fn new(key: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            code: code.into(),
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Create a literal character key input.
    #[must_use]
    pub fn char(c: char) -> Self {
        let code = match c {
            'a'..='z' | 'A'..='Z' => format!("Key{}", c.to_ascii_uppercase()),
            '0'..='9' => format!("Digit{c}"),
            ' ' => whitespace_codes::SPACE.to_string(),
            _ => c.to_string(),
        };
        Self::new(c.to_string(), code)
    }

    /// Create a Backspace key input.
    #[must_use]
    pub fn backspace() -> Self {
        Self::new(meta_keys::BACKSPACE, meta_keys::BACKSPACE)
    }

    /// Create a Delete key input.
    #[must_use]
    pub fn delete() -> Self {
        Self::new(meta_keys::DELETE, meta_keys::DELETE)
    }

    /// Create an Enter key input.
    #[must_use]
    pub fn enter() -> Self {
        Self::new(whitespace_codes::ENTER, whitespace_codes::ENTER)
    }

    /// Create a Tab key input.
    #[must_use]
    pub fn tab() -> Self {
        Self::new(whitespace_codes::TAB, whitespace_codes::TAB)
    }

    /// Create a Space key input.
    #[must_use]
    pub fn space() -> Self {
        Self::new(" ", whitespace_codes::SPACE)
    }

    /// Add modifier flags to this input.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check whether this input is a meta key.
    #[must_use]
    pub fn is_meta_key(&self) -> bool {
        is_meta_key(&self.key, &self.code)
    }
}

/// A key with a multi-character label is a meta key unless its code
/// resolves to whitespace (Enter, Tab, Space).
#[must_use]
pub fn is_meta_key(key: &str, code: &str) -> bool {
    key.chars().count() > 1 && !is_whitespace_code(code)
}

/// Check whether a physical code names a whitespace character.
#[must_use]
pub fn is_whitespace_code(code: &str) -> bool {
    matches!(
        code,
        whitespace_codes::TAB
            | whitespace_codes::ENTER
            | whitespace_codes::SPACE
            | whitespace_codes::CARRIAGE_RETURN
    )
}

/// Convert a whitespace code to the character it inserts.
#[must_use]
pub fn whitespace_code_to_char(code: &str) -> Option<char> {
    match code {
        whitespace_codes::TAB => Some('\t'),
        whitespace_codes::ENTER => Some('\n'),
        whitespace_codes::SPACE => Some(' '),
        whitespace_codes::CARRIAGE_RETURN => Some('\r'),
        _ => None,
    }
}

/// Check whether a character is whitespace (tab, CR, LF, space).
#[must_use]
pub fn is_whitespace_char(c: char) -> bool {
    matches!(c, '\t' | '\r' | '\n' | ' ')
}

/// Check whether a character terminates a row.
#[must_use]
pub fn is_line_ending_char(c: char) -> bool {
    matches!(c, '\r' | '\n')
}

/// Check whether a character is punctuation for token-boundary scanning.
#[must_use]
pub fn is_punctuation_char(c: char) -> bool {
    matches!(
        c,
        '{' | '}'
            | '('
            | ')'
            | '['
            | ']'
            | '.'
            | ';'
            | '='
            | '"'
            | '\''
            | '<'
            | '>'
            | '/'
            | '\\'
    )
}
