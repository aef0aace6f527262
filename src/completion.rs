//! Completion popup state: sorted items, the current row, key routing and
//! placement next to the cursor.
//!
//! The list never edits text itself. `handle_key` tells the owning
//! [`TextEdit`](crate::widget::TextEdit) what to do with a keystroke and the
//! editor feeds the typed prefix back through `update_current`.

use crate::geometry::{Point, Rect};
use crate::keys::{KeyCode, Keystroke};
use crate::style::FontSpec;

/// Rows moved by PageUp/PageDown
const PAGE_ROWS: usize = 8;

/// What the editor should do with a keystroke while the list is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKeyAction {
    /// Insert the current item
    Select,
    /// List was hidden; the editor handles the key
    HideAndForward,
    /// The editor handles the key, then calls `update_current` if `refresh`
    Forward { refresh: bool },
    /// The list moved its current row; the editor does nothing
    Navigate,
    /// List was hidden; the key is dropped
    Hide,
}

#[derive(Debug, Clone)]
pub struct CompletionList {
    items: Vec<String>,
    current: usize,
    visible: bool,
    pub case_sensitive: bool,
    pub show_single: bool,
    pub enter_select: bool,
    size: (f32, f32),
    font: FontSpec,
    screen_height: f32,
    position: Point,
}

impl Default for CompletionList {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: 0,
            visible: false,
            case_sensitive: false,
            show_single: true,
            enter_select: false,
            size: (300.0, 180.0),
            font: FontSpec::default(),
            screen_height: 1080.0,
            position: Point::default(),
        }
    }
}

impl CompletionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn setup(&mut self, case_sensitive: bool, show_single: bool, size: (f32, f32), font: FontSpec) {
        self.case_sensitive = case_sensitive;
        self.show_single = show_single;
        self.size = size;
        self.font = font;
    }

    pub fn set_enter_select(&mut self, state: bool) {
        self.enter_select = state;
    }

    /// Height of the available screen area, used for placement
    pub fn set_screen_height(&mut self, height: f32) {
        self.screen_height = height;
    }

    /// Show `items` sorted, with the first row current, next to `cursor_rect`.
    ///
    /// The popup goes below the cursor unless it would run past the bottom of
    /// the screen, in which case it goes above.
    pub fn show_list(&mut self, mut items: Vec<String>, cursor_rect: Rect) {
        items.sort();
        self.items = items;
        self.current = 0;
        self.visible = true;

        let below = cursor_rect.bottom_right();
        self.position = if self.screen_height - below.y - self.size.1 < 0.0 {
            let above = cursor_rect.top_right();
            Point::new(above.x, above.y - self.size.1)
        } else {
            below
        };
        tracing::debug!(count = self.items.len(), position = ?self.position, "completion list shown");
    }

    pub fn hide(&mut self) {
        if self.visible {
            tracing::trace!("completion list hidden");
        }
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn current_row(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> Option<&str> {
        self.items.get(self.current).map(String::as_str)
    }

    /// Top-left corner of the popup
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> (f32, f32) {
        self.size
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    /// Route a keystroke received while the list is visible
    pub fn handle_key(&mut self, key: &Keystroke) -> CompletionKeyAction {
        let text = key.text();
        match key.key {
            KeyCode::Enter if self.enter_select => CompletionKeyAction::Select,
            KeyCode::Tab => CompletionKeyAction::Select,
            KeyCode::Enter | KeyCode::Char('.') | KeyCode::Left | KeyCode::Right => {
                self.hide();
                CompletionKeyAction::HideAndForward
            }
            _ if key.mods.shift() => CompletionKeyAction::Forward {
                refresh: text.is_some(),
            },
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Home
            | KeyCode::End => {
                self.navigate(key.key);
                CompletionKeyAction::Navigate
            }
            KeyCode::Backspace => CompletionKeyAction::Forward { refresh: true },
            _ if text.is_some() => CompletionKeyAction::Forward { refresh: true },
            _ => {
                self.hide();
                CompletionKeyAction::Hide
            }
        }
    }

    fn navigate(&mut self, key: KeyCode) {
        let Some(last) = self.items.len().checked_sub(1) else {
            return;
        };
        self.current = match key {
            KeyCode::Up => self.current.saturating_sub(1),
            KeyCode::Down => (self.current + 1).min(last),
            KeyCode::PageUp => self.current.saturating_sub(PAGE_ROWS),
            KeyCode::PageDown => (self.current + PAGE_ROWS).min(last),
            KeyCode::Home => 0,
            KeyCode::End => last,
            _ => self.current,
        };
    }

    /// Make the first item starting with `completion_text` current.
    /// Hides the list when the text is empty or nothing matches.
    pub fn update_current(&mut self, completion_text: &str) {
        if completion_text.is_empty() {
            self.hide();
            return;
        }
        let found = if self.case_sensitive {
            self.items
                .iter()
                .position(|item| item.starts_with(completion_text))
        } else {
            let typed = completion_text.to_lowercase();
            self.items
                .iter()
                .position(|item| item.to_lowercase().starts_with(&typed))
        };
        match found {
            Some(row) => self.current = row,
            None => self.hide(),
        }
    }

    /// Take the current item and hide
    pub fn select(&mut self) -> Option<String> {
        let item = self.current_item().map(str::to_string);
        self.hide();
        item
    }

    pub fn focus_out(&mut self) {
        self.hide();
    }
}
