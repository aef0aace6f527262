//! Edit history (undo/redo).

use super::cursor::Cursor;

/// A single edit that can be undone/redone. Offsets are in chars.
#[derive(Debug, Clone, PartialEq)]
pub struct EditOperation {
    pub offset: usize,
    /// Text removed by the edit (empty for pure inserts)
    pub deleted_text: String,
    /// Text added by the edit (empty for pure deletes)
    pub inserted_text: String,
    pub cursor_before: Cursor,
    pub cursor_after: Cursor,
}

impl EditOperation {
    pub fn insert(offset: usize, text: String, cursor_before: Cursor, cursor_after: Cursor) -> Self {
        Self::replace(offset, String::new(), text, cursor_before, cursor_after)
    }

    pub fn delete(offset: usize, text: String, cursor_before: Cursor, cursor_after: Cursor) -> Self {
        Self::replace(offset, text, String::new(), cursor_before, cursor_after)
    }

    pub fn replace(
        offset: usize,
        deleted_text: String,
        inserted_text: String,
        cursor_before: Cursor,
        cursor_after: Cursor,
    ) -> Self {
        Self {
            offset,
            deleted_text,
            inserted_text,
            cursor_before,
            cursor_after,
        }
    }

    /// The operation that reverts this one
    pub fn inverse(&self) -> Self {
        Self {
            offset: self.offset,
            deleted_text: self.inserted_text.clone(),
            inserted_text: self.deleted_text.clone(),
            cursor_before: self.cursor_after,
            cursor_after: self.cursor_before,
        }
    }
}

/// Bounded undo/redo stacks.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo_stack: Vec<EditOperation>,
    redo_stack: Vec<EditOperation>,
    max_size: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::with_max_size(1000)
    }
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size,
        }
    }

    /// Record an operation (clears the redo stack)
    pub fn push(&mut self, op: EditOperation) {
        self.redo_stack.clear();
        self.undo_stack.push(op);
        if self.undo_stack.len() > self.max_size {
            let excess = self.undo_stack.len() - self.max_size;
            self.undo_stack.drain(..excess);
        }
    }

    /// Take the operation to revert. Its inverse moves to the redo stack.
    pub fn pop_undo(&mut self) -> Option<EditOperation> {
        let op = self.undo_stack.pop()?;
        self.redo_stack.push(op.inverse());
        Some(op)
    }

    /// Take the operation to re-apply (an inverse of an undone edit).
    pub fn pop_redo(&mut self) -> Option<EditOperation> {
        let op = self.redo_stack.pop()?;
        self.undo_stack.push(op.inverse());
        Some(op)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }
}
