//! Key input values and classification tables.
//!
//! The engine consumes keyboard input as an abstract [`KeyInput`] value
//! (key label, physical code, modifier flags) and classifies it with the
//! fact tables in [`keyboard`]: meta keys, whitespace codes, and the
//! whitespace / punctuation / line-ending character sets. Key *capture* is
//! the job of the hosting UI layer, not this crate.

mod keyboard;

pub use keyboard::{
    KeyInput, KeyModifiers, is_line_ending_char, is_meta_key, is_punctuation_char,
    is_whitespace_char, is_whitespace_code, meta_keys, whitespace_code_to_char, whitespace_codes,
};
