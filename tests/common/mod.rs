//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use codepane::keys::{KeyCode, Keystroke, Modifiers};
use codepane::widget::{Anchor, TextEdit};

/// Editor holding `text` with the cursor at `offset` and no pending events
pub fn edit_at(text: &str, offset: usize) -> TextEdit {
    let mut edit = TextEdit::new();
    edit.set_text(text);
    edit.set_cursor_position(Anchor::Offset(offset));
    edit.take_events();
    edit
}

/// Editor holding `text` with the cursor at the end
pub fn edit_with(text: &str) -> TextEdit {
    let len = text.chars().count();
    edit_at(text, len)
}

/// Type each character of `text` through the key handler
pub fn type_text(edit: &mut TextEdit, text: &str) {
    for ch in text.chars() {
        edit.handle_key(&Keystroke::char(ch));
    }
}

pub fn press(edit: &mut TextEdit, key: KeyCode) -> bool {
    edit.handle_key(&Keystroke::key(key))
}

pub fn ctrl(c: char) -> Keystroke {
    Keystroke::new(KeyCode::Char(c), Modifiers::CTRL)
}

/// Owned strings for completion lists
pub fn items(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
