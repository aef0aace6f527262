//! Text buffer traits and implementations.
//!
//! `TextBuffer` is the read side used by navigation, brace matching and
//! rendering; `TextBufferMut` adds the edits. Offsets are always char
//! indices, never bytes.

use ropey::Rope;
use std::borrow::Cow;
use std::ops::Range;

/// Read-only view into a text buffer.
pub trait TextBuffer {
    /// Number of lines (always >= 1)
    fn line_count(&self) -> usize;

    /// Length of a line in characters (excluding the line terminator)
    fn line_length(&self, line: usize) -> usize;

    /// Total length in characters
    fn len_chars(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Character at (line, column), None if out of bounds or on the terminator
    fn char_at(&self, line: usize, column: usize) -> Option<char>;

    /// Character at an absolute char offset, None past the end
    fn char_at_offset(&self, offset: usize) -> Option<char>;

    /// Line content (without trailing newline)
    fn line(&self, line: usize) -> Option<Cow<'_, str>>;

    /// Char offset of the first character of `line` (len_chars past the last line)
    fn line_start_offset(&self, line: usize) -> usize;

    /// Convert (line, column) to char offset, clamping the column to the line
    fn position_to_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.line_count() {
            return self.len_chars();
        }
        self.line_start_offset(line) + column.min(self.line_length(line))
    }

    /// Convert char offset to (line, column)
    fn offset_to_position(&self, offset: usize) -> (usize, usize);

    /// Text in a char range
    fn slice(&self, range: Range<usize>) -> String;

    /// Full content (may be expensive for large buffers)
    fn content(&self) -> String;
}

/// Mutable buffer operations.
pub trait TextBufferMut: TextBuffer {
    /// Insert text at char offset
    fn insert(&mut self, offset: usize, text: &str);

    /// Insert a single character at char offset
    fn insert_char(&mut self, offset: usize, ch: char);

    /// Remove text in a char range
    fn remove(&mut self, range: Range<usize>);

    fn replace(&mut self, range: Range<usize>, text: &str) {
        self.remove(range.clone());
        self.insert(range.start, text);
    }

    fn clear(&mut self) {
        let len = self.len_chars();
        if len > 0 {
            self.remove(0..len);
        }
    }

    fn set_content(&mut self, text: &str) {
        self.clear();
        self.insert(0, text);
    }
}

// =============================================================================
// StringBuffer - single-line inputs
// =============================================================================

/// TextBuffer backed by a `String`. Used for single-line inputs.
#[derive(Debug, Clone, Default)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

impl TextBuffer for StringBuffer {
    fn line_count(&self) -> usize {
        1
    }

    fn line_length(&self, line: usize) -> usize {
        if line == 0 {
            self.text.chars().count()
        } else {
            0
        }
    }

    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    fn char_at(&self, line: usize, column: usize) -> Option<char> {
        if line != 0 {
            return None;
        }
        self.text.chars().nth(column)
    }

    fn char_at_offset(&self, offset: usize) -> Option<char> {
        self.text.chars().nth(offset)
    }

    fn line(&self, line: usize) -> Option<Cow<'_, str>> {
        (line == 0).then(|| Cow::Borrowed(self.text.as_str()))
    }

    fn line_start_offset(&self, line: usize) -> usize {
        if line == 0 {
            0
        } else {
            self.len_chars()
        }
    }

    fn offset_to_position(&self, offset: usize) -> (usize, usize) {
        (0, offset.min(self.len_chars()))
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        self.text
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }

    fn content(&self) -> String {
        self.text.clone()
    }
}

impl TextBufferMut for StringBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let byte_offset = self.char_to_byte(offset);
        self.text.insert_str(byte_offset, text);
    }

    fn insert_char(&mut self, offset: usize, ch: char) {
        let byte_offset = self.char_to_byte(offset);
        self.text.insert(byte_offset, ch);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start_byte = self.char_to_byte(range.start);
        let end_byte = self.char_to_byte(range.end);
        if start_byte < end_byte {
            self.text.replace_range(start_byte..end_byte, "");
        }
    }
}

// =============================================================================
// RopeBuffer - multi-line documents and console transcripts
// =============================================================================

/// TextBuffer backed by `ropey::Rope`.
#[derive(Debug, Clone, Default)]
pub struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }
}

impl TextBuffer for RopeBuffer {
    fn line_count(&self) -> usize {
        self.rope.len_lines().max(1)
    }

    fn line_length(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let line_slice = self.rope.line(line);
        let mut len = line_slice.len_chars();
        if len > 0 && line_slice.char(len - 1) == '\n' {
            len -= 1;
            if len > 0 && line_slice.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        len
    }

    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn char_at(&self, line: usize, column: usize) -> Option<char> {
        if line >= self.rope.len_lines() || column >= self.line_length(line) {
            return None;
        }
        Some(self.rope.char(self.rope.line_to_char(line) + column))
    }

    fn char_at_offset(&self, offset: usize) -> Option<char> {
        (offset < self.rope.len_chars()).then(|| self.rope.char(offset))
    }

    fn line(&self, line: usize) -> Option<Cow<'_, str>> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let start = self.rope.line_to_char(line);
        let end = start + self.line_length(line);
        Some(Cow::Owned(self.rope.slice(start..end).to_string()))
    }

    fn line_start_offset(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(line)
    }

    /// An offset between `\r` and `\n` maps to the start of the next line
    fn offset_to_position(&self, offset: usize) -> (usize, usize) {
        let clamped = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(clamped);
        let column = clamped - self.rope.line_to_char(line);
        if column > self.line_length(line) && self.rope.char(clamped) == '\n' {
            return (line + 1, 0);
        }
        (line, column)
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    fn content(&self) -> String {
        self.rope.to_string()
    }
}

impl TextBufferMut for RopeBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let clamped = offset.min(self.len_chars());
        self.rope.insert(clamped, text);
    }

    fn insert_char(&mut self, offset: usize, ch: char) {
        let clamped = offset.min(self.len_chars());
        self.rope.insert_char(clamped, ch);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start < end {
            self.rope.remove(start..end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_buffer_counts_chars_not_bytes() {
        let buf = StringBuffer::from_text("f(é)");
        assert_eq!(buf.len_chars(), 4);
        assert_eq!(buf.char_at(0, 2), Some('é'));
        assert_eq!(buf.char_at_offset(3), Some(')'));
        assert_eq!(buf.char_at_offset(4), None);
    }

    #[test]
    fn test_string_buffer_edit() {
        let mut buf = StringBuffer::from_text("print()");
        buf.insert(6, "x");
        assert_eq!(buf.content(), "print(x)");
        buf.remove(0..5);
        assert_eq!(buf.content(), "(x)");
        buf.replace(1..2, "yz");
        assert_eq!(buf.content(), "(yz)");
    }

    #[test]
    fn test_rope_buffer_lines() {
        let buf = RopeBuffer::from_text(">>> a = [1,\n... 2]\n");
        assert_eq!(buf.line_count(), 3);
        assert_eq!(buf.line(0).unwrap(), ">>> a = [1,");
        assert_eq!(buf.line(1).unwrap(), "... 2]");
        assert_eq!(buf.line(2).unwrap(), "");
        assert_eq!(buf.line_start_offset(1), 12);
        assert_eq!(buf.line_start_offset(9), buf.len_chars());
    }

    #[test]
    fn test_rope_buffer_crlf_line_length() {
        let buf = RopeBuffer::from_text("ab\r\ncd");
        assert_eq!(buf.line_length(0), 2);
        assert_eq!(buf.char_at(0, 2), None);
    }

    #[test]
    fn test_rope_buffer_offset_inside_crlf() {
        let buf = RopeBuffer::from_text("ab\r\ncd");
        assert_eq!(buf.offset_to_position(2), (0, 2));
        assert_eq!(buf.offset_to_position(3), (1, 0));
        assert_eq!(buf.position_to_offset(1, 0), 4);
    }

    #[test]
    fn test_rope_buffer_position_conversion() {
        let buf = RopeBuffer::from_text("def f(x):\n    return x\n");
        assert_eq!(buf.offset_to_position(10), (1, 0));
        assert_eq!(buf.position_to_offset(1, 4), 14);
        // Column past the end of the line clamps to the terminator
        assert_eq!(buf.position_to_offset(0, 99), 9);
        assert_eq!(buf.position_to_offset(7, 0), buf.len_chars());
    }

    #[test]
    fn test_rope_buffer_set_content() {
        let mut buf = RopeBuffer::from_text("old");
        buf.set_content("new\ntext");
        assert_eq!(buf.content(), "new\ntext");
        assert_eq!(buf.line_count(), 2);
    }
}
