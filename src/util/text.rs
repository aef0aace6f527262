//! Character classification for word navigation and word search

/// Check if a character is a punctuation/symbol boundary (not whitespace)
pub fn is_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '/' | ':'
            | ','
            | '.'
            | '-'
            | '('
            | ')'
            | '{'
            | '}'
            | '['
            | ']'
            | ';'
            | '"'
            | '\''
            | '<'
            | '>'
            | '='
            | '+'
            | '*'
            | '&'
            | '|'
            | '!'
            | '@'
            | '#'
            | '$'
            | '%'
            | '^'
            | '~'
            | '`'
            | '\\'
            | '?'
    )
}

/// Character type for word navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharType {
    /// Whitespace characters
    Whitespace,
    /// Identifier characters (alphanumerics and underscore)
    WordChar,
    /// Punctuation and symbols
    Punctuation,
}

/// Get the character type for word navigation
pub fn char_type(ch: char) -> CharType {
    if ch.is_whitespace() {
        CharType::Whitespace
    } else if is_punctuation(ch) {
        CharType::Punctuation
    } else {
        CharType::WordChar
    }
}

/// Check if a character can be part of an identifier (word search, completion prefix)
pub fn is_word_char(ch: char) -> bool {
    char_type(ch) == CharType::WordChar
}

/// Bounds `(start, end)` of the run of same-typed characters around `column`.
///
/// A column past the end of the line snaps to the last character.
pub fn word_bounds(chars: &[char], column: usize) -> Option<(usize, usize)> {
    if chars.is_empty() {
        return None;
    }
    let col = column.min(chars.len() - 1);
    let target = char_type(chars[col]);

    let mut start = col;
    while start > 0 && char_type(chars[start - 1]) == target {
        start -= 1;
    }
    let mut end = col;
    while end < chars.len() && char_type(chars[end]) == target {
        end += 1;
    }
    Some((start, end))
}
