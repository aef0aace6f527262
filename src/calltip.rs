//! Calltip content and the rules for dismissing it.

use crate::keys::{KeyCode, Keystroke};
use crate::source::TextSource;
use crate::style::{Color, FontSpec};

/// Default title color
pub const DEFAULT_CALLTIP_COLOR: Color = Color::rgb(0x2D, 0x62, 0xFF);

/// Calltip body: one string, or several lines shown as an indented list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalltipText {
    Single(String),
    Lines(Vec<String>),
}

impl CalltipText {
    fn is_empty(&self) -> bool {
        match self {
            CalltipText::Single(text) => text.is_empty(),
            CalltipText::Lines(lines) => lines.is_empty(),
        }
    }

    fn into_body(self) -> String {
        match self {
            CalltipText::Single(text) => text,
            CalltipText::Lines(lines) => lines.join("\n    "),
        }
    }
}

impl From<&str> for CalltipText {
    fn from(text: &str) -> Self {
        CalltipText::Single(text.to_string())
    }
}

impl From<String> for CalltipText {
    fn from(text: String) -> Self {
        CalltipText::Single(text)
    }
}

impl From<Vec<String>> for CalltipText {
    fn from(lines: Vec<String>) -> Self {
        CalltipText::Lines(lines)
    }
}

/// What the host renders in the tooltip
#[derive(Debug, Clone, PartialEq)]
pub struct CalltipContent {
    pub title: String,
    pub body: String,
    pub color: Color,
    pub font: FontSpec,
    /// Char offset of the cursor when the calltip was shown
    pub anchor: usize,
}

#[derive(Debug, Clone)]
pub struct Calltip {
    /// Longest body in chars before truncation
    pub size: usize,
    pub font: FontSpec,
    shown: Option<CalltipContent>,
}

impl Default for Calltip {
    fn default() -> Self {
        Self::new(600, FontSpec::default())
    }
}

impl Calltip {
    pub fn new(size: usize, font: FontSpec) -> Self {
        Self {
            size,
            font,
            shown: None,
        }
    }

    /// Show a calltip anchored at `anchor`. Empty text shows nothing.
    pub fn show(
        &mut self,
        title: &str,
        text: impl Into<CalltipText>,
        color: Color,
        anchor: usize,
    ) -> Option<&CalltipContent> {
        let text = text.into();
        if text.is_empty() {
            return None;
        }

        let mut body = text.into_body();
        if let Some((cut, _)) = body.char_indices().nth(self.size) {
            body.truncate(cut);
            body.push_str(" ...");
        }

        tracing::debug!(title, anchor, "calltip shown");
        self.shown = Some(CalltipContent {
            title: title.to_string(),
            body,
            color,
            font: self.font.clone(),
            anchor,
        });
        self.shown.as_ref()
    }

    pub fn current(&self) -> Option<&CalltipContent> {
        self.shown.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.shown.is_some()
    }

    pub fn hide(&mut self) {
        self.shown = None;
    }

    /// Hide after `key` when the calltip no longer applies.
    ///
    /// It stays only while the character at the anchor is `?` or `(`, the
    /// cursor has not moved back before it, and the key is not `)`, `.` or Tab.
    /// Returns true if the calltip was hidden.
    pub fn hide_if_necessary<S: TextSource + ?Sized>(&mut self, source: &S, key: &Keystroke) -> bool {
        let Some(anchor) = self.shown.as_ref().map(|tip| tip.anchor) else {
            return false;
        };

        let opener = matches!(source.char_at_offset(anchor), Some('?' | '('));
        let before = source.char_at_offset(anchor + 1).is_some()
            && source.cursor_offset() < anchor + 1;
        let closing_key = matches!(key.key, KeyCode::Char(')' | '.') | KeyCode::Tab);

        if !opener || before || closing_key {
            self.hide();
            return true;
        }
        false
    }
}
