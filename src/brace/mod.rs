//! Brace matching for the character just before the cursor.
//!
//! Matching is single-line: a delimiter whose partner is on another line is
//! reported as unmatched. Each delimiter kind is tracked on its own, so `(`
//! never pairs with `]`.

mod highlight;

pub use highlight::{BraceHighlighter, HighlightSink, MarkerSet};

use crate::source::TextSource;

/// One of the three delimiter pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Paren,
    Bracket,
    Brace,
}

impl Delimiter {
    pub const fn open(self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Bracket => '[',
            Delimiter::Brace => '{',
        }
    }

    pub const fn close(self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Bracket => ']',
            Delimiter::Brace => '}',
        }
    }
}

/// Scan direction along the line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward end-of-line (from an opening delimiter)
    Forward,
    /// Toward start-of-line (from a closing delimiter)
    Backward,
}

/// A delimiter character: its kind and whether it opens or closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brace {
    pub delimiter: Delimiter,
    pub opening: bool,
}

impl Brace {
    /// None for anything that is not one of `()[]{}`
    pub fn from_char(ch: char) -> Option<Self> {
        let (delimiter, opening) = match ch {
            '(' => (Delimiter::Paren, true),
            ')' => (Delimiter::Paren, false),
            '[' => (Delimiter::Bracket, true),
            ']' => (Delimiter::Bracket, false),
            '{' => (Delimiter::Brace, true),
            '}' => (Delimiter::Brace, false),
            _ => return None,
        };
        Some(Self { delimiter, opening })
    }

    pub fn as_char(self) -> char {
        if self.opening {
            self.delimiter.open()
        } else {
            self.delimiter.close()
        }
    }

    pub fn partner(self) -> char {
        if self.opening {
            self.delimiter.close()
        } else {
            self.delimiter.open()
        }
    }

    /// Openers look forward for their closer, closers look backward
    pub fn direction(self) -> Direction {
        if self.opening {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// Outcome of matching the delimiter before the cursor (document char offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BraceMatch {
    Matched { at: usize, partner: usize },
    Unmatched { at: usize },
}

impl BraceMatch {
    /// Offsets that carry a highlight
    pub fn offsets(&self) -> impl Iterator<Item = usize> {
        let (first, second) = match *self {
            BraceMatch::Matched { at, partner } => (at, Some(partner)),
            BraceMatch::Unmatched { at } => (at, None),
        };
        std::iter::once(first).chain(second)
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, BraceMatch::Matched { .. })
    }
}

/// Find the partner of the delimiter at `column` within `line`.
///
/// `delimiter` must be the character at `column` and `direction` must agree
/// with it (forward for openers, backward for closers); otherwise there is
/// nothing to match and None is returned. Same-kind pairs in between nest.
/// Returns the partner's column.
pub fn find_partner(line: &str, column: usize, delimiter: char, direction: Direction) -> Option<usize> {
    let brace = Brace::from_char(delimiter)?;
    if brace.direction() != direction {
        return None;
    }

    let chars: Vec<char> = line.chars().collect();
    if chars.get(column) != Some(&delimiter) {
        return None;
    }

    match direction {
        Direction::Forward => scan(
            chars.iter().enumerate().skip(column + 1),
            delimiter,
            brace.partner(),
        ),
        Direction::Backward => scan(
            chars[..column].iter().enumerate().rev(),
            delimiter,
            brace.partner(),
        ),
    }
}

/// Walk away from the starting delimiter; every further `same` must be
/// closed by a `partner` before one can pair with the start.
fn scan<'a>(
    chars: impl Iterator<Item = (usize, &'a char)>,
    same: char,
    partner: char,
) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, &ch) in chars {
        if ch == same {
            depth += 1;
        } else if ch == partner {
            if depth == 0 {
                return Some(idx);
            }
            depth -= 1;
        }
    }
    None
}

/// Match the character immediately before the cursor.
///
/// None when the cursor is at the start of the document or the previous
/// character is not a delimiter.
pub fn match_at_cursor<S: TextSource + ?Sized>(source: &S) -> Option<BraceMatch> {
    let at = source.cursor_offset().checked_sub(1)?;
    let ch = source.char_at_offset(at)?;
    let brace = Brace::from_char(ch)?;

    let line = source.line_of_offset(at);
    let line_start = source.line_start_offset(line);
    let text = source.line_text(line);

    let result = match find_partner(&text, at - line_start, ch, brace.direction()) {
        Some(column) => BraceMatch::Matched {
            at,
            partner: line_start + column,
        },
        None => BraceMatch::Unmatched { at },
    };
    Some(result)
}
