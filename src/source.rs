//! Read access to the text around the cursor.
//!
//! Brace matching and calltip bookkeeping only need a handful of queries, so
//! they depend on this trait instead of a concrete widget. Any GUI binding
//! can implement it over its own document model.

use std::borrow::Cow;

use crate::editable::{EditableState, TextBuffer};

/// The capabilities a widget exposes to cursor-driven helpers.
pub trait TextSource {
    /// Char offset of the cursor
    fn cursor_offset(&self) -> usize;

    /// Character at a char offset, None past the end of the document
    fn char_at_offset(&self, offset: usize) -> Option<char>;

    /// Line index containing a char offset
    fn line_of_offset(&self, offset: usize) -> usize;

    /// Text of a line without its terminator (empty for lines past the end)
    fn line_text(&self, line: usize) -> Cow<'_, str>;

    /// Char offset where a line starts
    fn line_start_offset(&self, line: usize) -> usize;

    /// Character immediately before the cursor, if any
    fn char_before_cursor(&self) -> Option<char> {
        self.cursor_offset()
            .checked_sub(1)
            .and_then(|offset| self.char_at_offset(offset))
    }
}

impl<B: TextBuffer> TextSource for EditableState<B> {
    fn cursor_offset(&self) -> usize {
        EditableState::cursor_offset(self)
    }

    fn char_at_offset(&self, offset: usize) -> Option<char> {
        self.buffer.char_at_offset(offset)
    }

    fn line_of_offset(&self, offset: usize) -> usize {
        self.buffer.offset_to_position(offset).0
    }

    fn line_text(&self, line: usize) -> Cow<'_, str> {
        self.buffer.line(line).unwrap_or_default()
    }

    fn line_start_offset(&self, line: usize) -> usize {
        self.buffer.line_start_offset(line)
    }
}
