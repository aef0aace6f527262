//! EditableState - editable text with a cursor, a selection and history.

use std::ops::Range;

use crate::util::{char_type, word_bounds, CharType};

use super::buffer::{TextBuffer, TextBufferMut};
use super::constraints::EditConstraints;
use super::cursor::{Cursor, Position, Selection};
use super::history::{EditHistory, EditOperation};

/// Editable text with a single cursor, its selection and undo history.
///
/// Generic over the buffer type (`StringBuffer` for single-line inputs,
/// `RopeBuffer` for documents and console transcripts).
#[derive(Debug, Clone)]
pub struct EditableState<B: TextBuffer> {
    pub buffer: B,
    cursor: Cursor,
    selection: Selection,
    pub constraints: EditConstraints,
    history: EditHistory,
}

impl<B: TextBuffer> EditableState<B> {
    pub fn new(buffer: B, constraints: EditConstraints) -> Self {
        Self {
            buffer,
            cursor: Cursor::new(0, 0),
            selection: Selection::collapsed(Position::zero()),
            constraints,
            history: EditHistory::new(),
        }
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Char offset of the cursor
    pub fn cursor_offset(&self) -> usize {
        self.offset_of(self.cursor.to_position())
    }

    pub fn offset_of(&self, pos: Position) -> usize {
        self.buffer.position_to_offset(pos.line, pos.column)
    }

    pub fn position_of(&self, offset: usize) -> Position {
        let (line, column) = self.buffer.offset_to_position(offset);
        Position::new(line, column)
    }

    pub fn text(&self) -> String {
        self.buffer.content()
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Selected char range (empty range at the cursor without a selection)
    pub fn selection_range(&self) -> Range<usize> {
        self.offset_of(self.selection.start())..self.offset_of(self.selection.end())
    }

    /// Selected text (empty string if no selection)
    pub fn selected_text(&self) -> String {
        if !self.has_selection() {
            return String::new();
        }
        self.buffer.slice(self.selection_range())
    }

    pub fn can_undo(&self) -> bool {
        self.constraints.enable_undo && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.constraints.enable_undo && self.history.can_redo()
    }

    pub fn collapse_selection(&mut self) {
        self.selection = Selection::collapsed(self.cursor.to_position());
    }

    /// Move the cursor to a char offset, keeping the anchor if `extend`
    pub fn set_cursor_offset(&mut self, offset: usize, extend: bool) {
        let pos = self.position_of(offset);
        self.cursor.move_to(pos);
        self.finish_move(extend);
    }

    /// Select from `anchor` to `head` (char offsets); the cursor lands on `head`
    pub fn select_offsets(&mut self, anchor: usize, head: usize) {
        if !self.constraints.allow_selection {
            self.set_cursor_offset(head, false);
            return;
        }
        let anchor = self.position_of(anchor);
        let head = self.position_of(head);
        self.cursor.move_to(head);
        self.selection = Selection::new(anchor, head);
    }

    fn finish_move(&mut self, extend_selection: bool) {
        if extend_selection && self.constraints.allow_selection {
            self.selection.head = self.cursor.to_position();
        } else {
            self.collapse_selection();
        }
    }

    /// Collapse a selection onto one of its edges instead of moving.
    /// Returns true if the selection was collapsed.
    fn collapse_onto(&mut self, extend_selection: bool, to_start: bool) -> bool {
        if extend_selection || self.selection.is_empty() {
            return false;
        }
        let edge = if to_start {
            self.selection.start()
        } else {
            self.selection.end()
        };
        self.cursor.move_to(edge);
        self.collapse_selection();
        true
    }
}

// =============================================================================
// Movement
// =============================================================================

impl<B: TextBuffer> EditableState<B> {
    pub fn move_left(&mut self, extend_selection: bool) {
        if self.collapse_onto(extend_selection, true) {
            return;
        }
        if self.cursor.column > 0 {
            self.cursor.column -= 1;
        } else if self.cursor.line > 0 && self.constraints.allow_multiline {
            self.cursor.line -= 1;
            self.cursor.column = self.buffer.line_length(self.cursor.line);
        }
        self.cursor.desired_column = None;
        self.finish_move(extend_selection);
    }

    pub fn move_right(&mut self, extend_selection: bool) {
        if self.collapse_onto(extend_selection, false) {
            return;
        }
        let line_len = self.buffer.line_length(self.cursor.line);
        if self.cursor.column < line_len {
            self.cursor.column += 1;
        } else if self.cursor.line + 1 < self.buffer.line_count()
            && self.constraints.allow_multiline
        {
            self.cursor.line += 1;
            self.cursor.column = 0;
        }
        self.cursor.desired_column = None;
        self.finish_move(extend_selection);
    }

    pub fn move_up(&mut self, extend_selection: bool) {
        if !self.constraints.allow_multiline || self.cursor.line == 0 {
            return;
        }
        self.cursor.set_desired_column();
        self.cursor.line -= 1;
        let line_len = self.buffer.line_length(self.cursor.line);
        self.cursor.column = self.cursor.effective_column().min(line_len);
        self.finish_move(extend_selection);
    }

    pub fn move_down(&mut self, extend_selection: bool) {
        if !self.constraints.allow_multiline || self.cursor.line + 1 >= self.buffer.line_count() {
            return;
        }
        self.cursor.set_desired_column();
        self.cursor.line += 1;
        let line_len = self.buffer.line_length(self.cursor.line);
        self.cursor.column = self.cursor.effective_column().min(line_len);
        self.finish_move(extend_selection);
    }

    pub fn move_line_start(&mut self, extend_selection: bool) {
        self.cursor.move_to(Position::new(self.cursor.line, 0));
        self.finish_move(extend_selection);
    }

    pub fn move_line_end(&mut self, extend_selection: bool) {
        let line_len = self.buffer.line_length(self.cursor.line);
        self.cursor.move_to(Position::new(self.cursor.line, line_len));
        self.finish_move(extend_selection);
    }

    pub fn move_document_start(&mut self, extend_selection: bool) {
        self.cursor.move_to(Position::zero());
        self.finish_move(extend_selection);
    }

    pub fn move_document_end(&mut self, extend_selection: bool) {
        let last_line = self.buffer.line_count().saturating_sub(1);
        let last_col = self.buffer.line_length(last_line);
        self.cursor.move_to(Position::new(last_line, last_col));
        self.finish_move(extend_selection);
    }

    /// Move to the start of the previous word (crossing to the previous line at column 0)
    pub fn move_word_left(&mut self, extend_selection: bool) {
        if self.collapse_onto(extend_selection, true) {
            return;
        }
        if self.cursor.column == 0 {
            self.move_left(extend_selection);
            return;
        }

        let line = self.cursor.line;
        let mut pos = self.cursor.column.min(self.buffer.line_length(line));

        // Skip whitespace/punctuation, then the word itself
        while pos > 0 && !self.is_word_at(line, pos - 1) {
            pos -= 1;
        }
        while pos > 0 && self.is_word_at(line, pos - 1) {
            pos -= 1;
        }

        self.cursor.move_to(Position::new(line, pos));
        self.finish_move(extend_selection);
    }

    /// Move past the current run of same-typed characters and any following whitespace
    pub fn move_word_right(&mut self, extend_selection: bool) {
        if self.collapse_onto(extend_selection, false) {
            return;
        }
        let line = self.cursor.line;
        let line_len = self.buffer.line_length(line);
        if self.cursor.column >= line_len {
            self.move_right(extend_selection);
            return;
        }

        let mut pos = self.cursor.column;
        if let Some(first) = self.buffer.char_at(line, pos) {
            let start_type = char_type(first);
            while pos < line_len
                && self.buffer.char_at(line, pos).map(char_type) == Some(start_type)
            {
                pos += 1;
            }
        }
        while pos < line_len
            && self.buffer.char_at(line, pos).map(char_type) == Some(CharType::Whitespace)
        {
            pos += 1;
        }

        self.cursor.move_to(Position::new(line, pos));
        self.finish_move(extend_selection);
    }

    fn is_word_at(&self, line: usize, column: usize) -> bool {
        self.buffer.char_at(line, column).map(char_type) == Some(CharType::WordChar)
    }

    pub fn select_all(&mut self) {
        let end = self.buffer.len_chars();
        self.select_offsets(0, end);
    }

    /// Select the word under the cursor; returns the selected text
    pub fn select_word(&mut self) -> String {
        let line = self.cursor.line;
        let content = self.buffer.line(line).unwrap_or_default();
        let chars: Vec<char> = content.chars().collect();
        let Some((start, end)) = word_bounds(&chars, self.cursor.column) else {
            return String::new();
        };
        let line_start = self.buffer.line_start_offset(line);
        self.select_offsets(line_start + start, line_start + end);
        self.selected_text()
    }
}

// =============================================================================
// Editing (requires TextBufferMut)
// =============================================================================

impl<B: TextBuffer + TextBufferMut> EditableState<B> {
    /// Replace a char range with text, record it, and leave the cursor after the new text
    pub fn replace_range(&mut self, range: Range<usize>, text: &str) {
        let len = self.buffer.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        let cursor_before = self.cursor;

        let deleted = self.buffer.slice(start..end);
        if start < end {
            self.buffer.remove(start..end);
        }
        if !text.is_empty() {
            self.buffer.insert(start, text);
        }
        self.set_cursor_offset(start + text.chars().count(), false);

        if self.constraints.enable_undo && !(deleted.is_empty() && text.is_empty()) {
            self.history.push(EditOperation::replace(
                start,
                deleted,
                text.to_string(),
                cursor_before,
                self.cursor,
            ));
        }
    }

    /// Insert a character, replacing the selection.
    /// Returns false if the constraints reject it.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if !self.constraints.is_char_allowed(ch) {
            return false;
        }
        let range = self.selection_range();
        self.replace_range(range, ch.encode_utf8(&mut [0; 4]));
        true
    }

    /// Insert text at the cursor, replacing the selection.
    /// Returns false (and inserts nothing) if any character is rejected.
    pub fn insert_text(&mut self, text: &str) -> bool {
        if !text.chars().all(|ch| self.constraints.is_char_allowed(ch)) {
            return false;
        }
        let range = self.selection_range();
        self.replace_range(range, text);
        true
    }

    /// Delete the selection, if any
    pub fn delete_selection(&mut self) -> bool {
        if !self.has_selection() {
            return false;
        }
        let range = self.selection_range();
        self.replace_range(range, "");
        true
    }

    /// Backspace
    pub fn delete_backward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let offset = self.cursor_offset();
        if offset == 0 {
            return false;
        }
        self.replace_range(offset - 1..offset, "");
        true
    }

    /// Delete key
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let offset = self.cursor_offset();
        if offset >= self.buffer.len_chars() {
            return false;
        }
        self.replace_range(offset..offset + 1, "");
        true
    }

    pub fn undo(&mut self) -> bool {
        if !self.constraints.enable_undo {
            return false;
        }
        match self.history.pop_undo() {
            Some(op) => {
                self.revert(&op);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        if !self.constraints.enable_undo {
            return false;
        }
        match self.history.pop_redo() {
            Some(op) => {
                self.revert(&op);
                true
            }
            None => false,
        }
    }

    /// Undo `op` without touching history (redo passes an inverse, which re-applies it)
    fn revert(&mut self, op: &EditOperation) {
        if !op.inserted_text.is_empty() {
            let end = op.offset + op.inserted_text.chars().count();
            self.buffer.remove(op.offset..end);
        }
        if !op.deleted_text.is_empty() {
            self.buffer.insert(op.offset, &op.deleted_text);
        }
        self.cursor = op.cursor_before;
        self.collapse_selection();
    }

    /// Replace everything, put the cursor at the end and forget history
    pub fn set_content(&mut self, text: &str) {
        self.buffer.set_content(text);
        self.history.clear();
        self.move_document_end(false);
    }

    /// Clear the buffer (recorded, so it can be undone)
    pub fn clear(&mut self) {
        let len = self.buffer.len_chars();
        self.replace_range(0..len, "");
    }
}

#[cfg(test)]
mod tests {
    use super::super::buffer::{RopeBuffer, StringBuffer};
    use super::*;

    fn line_state(text: &str, column: usize) -> EditableState<StringBuffer> {
        let mut state =
            EditableState::new(StringBuffer::from_text(text), EditConstraints::single_line());
        state.set_cursor_offset(column, false);
        state
    }

    fn doc_state(text: &str) -> EditableState<RopeBuffer> {
        EditableState::new(RopeBuffer::from_text(text), EditConstraints::editor())
    }

    #[test]
    fn test_left_right_collapse_selection_first() {
        let mut state = line_state("hello", 1);
        state.set_cursor_offset(4, true);
        assert_eq!(state.selected_text(), "ell");

        state.move_left(false);
        assert_eq!(state.cursor_offset(), 1);
        assert!(!state.has_selection());
    }

    #[test]
    fn test_word_movement() {
        let mut state = line_state("foo(bar, baz)", 0);
        state.move_word_right(false);
        assert_eq!(state.cursor_offset(), 3);
        state.move_word_right(false);
        assert_eq!(state.cursor_offset(), 4);

        state.set_cursor_offset(13, false);
        state.move_word_left(false);
        assert_eq!(state.cursor_offset(), 9);
    }

    #[test]
    fn test_vertical_movement_keeps_desired_column() {
        let mut state = doc_state("long line here\nab\nanother long one");
        state.set_cursor_offset(10, false);
        state.move_down(false);
        assert_eq!(state.cursor().to_position(), Position::new(1, 2));
        state.move_down(false);
        assert_eq!(state.cursor().to_position(), Position::new(2, 10));
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut state = line_state("print(x)", 6);
        state.set_cursor_offset(7, true);
        assert!(state.insert_text("value"));
        assert_eq!(state.text(), "print(value)");
        assert_eq!(state.cursor_offset(), 11);
    }

    #[test]
    fn test_single_line_rejects_newline_text() {
        let mut state = line_state("abc", 3);
        assert!(!state.insert_text("d\ne"));
        assert_eq!(state.text(), "abc");
    }

    #[test]
    fn test_delete_backward_and_forward() {
        let mut state = line_state("ab", 1);
        assert!(state.delete_backward());
        assert_eq!(state.text(), "b");
        assert!(!state.delete_backward());
        assert!(state.delete_forward());
        assert_eq!(state.text(), "");
        assert!(!state.delete_forward());
    }

    #[test]
    fn test_undo_redo_restores_text_and_cursor() {
        let mut state = doc_state("");
        state.insert_char('a');
        state.insert_text("bc");
        assert_eq!(state.text(), "abc");

        assert!(state.undo());
        assert_eq!(state.text(), "a");
        assert_eq!(state.cursor_offset(), 1);

        assert!(state.redo());
        assert_eq!(state.text(), "abc");
        assert_eq!(state.cursor_offset(), 3);
        assert!(!state.can_redo());
    }

    #[test]
    fn test_console_constraints_skip_history() {
        let mut state = EditableState::new(RopeBuffer::new(), EditConstraints::console());
        state.insert_text(">>> ");
        assert!(!state.can_undo());
        assert!(!state.undo());
        assert_eq!(state.text(), ">>> ");
    }

    #[test]
    fn test_select_word() {
        let mut state = line_state("x = some_name + 1", 7);
        assert_eq!(state.select_word(), "some_name");
        assert_eq!(state.selection_range(), 4..13);
    }

    #[test]
    fn test_select_all_and_clear_undoable() {
        let mut state = doc_state("one\ntwo");
        state.select_all();
        assert_eq!(state.selected_text(), "one\ntwo");
        state.clear();
        assert_eq!(state.text(), "");
        assert!(state.undo());
        assert_eq!(state.text(), "one\ntwo");
    }

    #[test]
    fn test_set_content_moves_to_end() {
        let mut state = doc_state("x");
        state.insert_char('y');
        state.set_content("first\nsecond");
        assert_eq!(state.cursor().to_position(), Position::new(1, 6));
        assert!(!state.can_undo());
    }
}
