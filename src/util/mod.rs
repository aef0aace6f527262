//! Utility modules

pub mod text;

pub use text::{char_type, is_punctuation, is_word_char, word_bounds, CharType};
