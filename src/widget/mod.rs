//! The code-editing text widget.
//!
//! [`TextEdit`] is the toolkit-independent half of an editor or shell input
//! widget. A GUI binding forwards keystrokes and focus changes, renders the
//! buffer, the brace markers, the completion popup and the calltip, and
//! drains [`WidgetEvent`]s after each call.

mod search;

pub use search::{find_in, FindOptions};

use std::borrow::Cow;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::brace::{BraceHighlighter, BraceMatch, MarkerSet};
use crate::calltip::{Calltip, CalltipContent, CalltipText};
use crate::completion::{CompletionKeyAction, CompletionList};
use crate::config::EditorConfig;
use crate::editable::{EditConstraints, EditableState, RopeBuffer, TextBuffer};
use crate::events::{EventQueue, WidgetEvent};
use crate::geometry::Rect;
use crate::keys::{KeyCode, Keystroke};
use crate::source::TextSource;
use crate::style::Color;
use crate::tracing::SelectionSnapshot;
use crate::util::{is_word_char, word_bounds};

/// Symbolic document positions, resolved against the current cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Cursor,
    /// Start of the cursor's line
    LineStart,
    /// End of the cursor's line (before the terminator)
    LineEnd,
    DocumentStart,
    DocumentEnd,
    /// Absolute char offset
    Offset(usize),
}

impl From<usize> for Anchor {
    fn from(offset: usize) -> Self {
        Anchor::Offset(offset)
    }
}

/// Line wrapping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapMode {
    #[default]
    None,
    Word,
    Character,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextUnit {
    Character,
    Word,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
}

/// A buffer edit, reported to views that keep per-character data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextChange {
    /// `removed` chars at `start` were replaced by `inserted` chars
    Splice {
        start: usize,
        removed: usize,
        inserted: usize,
    },
    /// The whole buffer changed (set_text, undo, redo)
    Reset,
}

#[derive(Debug, Clone)]
pub struct TextEdit {
    state: EditableState<RopeBuffer>,
    prompt: String,
    modified: bool,
    codecompletion: bool,
    codecompletion_enter: bool,
    calltips: bool,
    caret_width: u32,
    wrap_mode: WrapMode,
    focused: bool,
    completion: CompletionList,
    calltip: Calltip,
    highlighter: BraceHighlighter,
    markers: MarkerSet,
    events: EventQueue,
    undo_available: bool,
    redo_available: bool,
    /// Character cell (width, height) in pixels, for popup placement
    cell_size: (f32, f32),
    track_changes: bool,
    changes: Vec<TextChange>,
    snapshot: SelectionSnapshot,
}

impl Default for TextEdit {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEdit {
    /// Empty multi-line editor with undo
    pub fn new() -> Self {
        Self::with_constraints(EditConstraints::editor())
    }

    pub fn with_constraints(constraints: EditConstraints) -> Self {
        let state = EditableState::new(RopeBuffer::new(), constraints);
        let snapshot = SelectionSnapshot::from_state(&state);
        Self {
            state,
            prompt: String::new(),
            modified: false,
            codecompletion: true,
            codecompletion_enter: false,
            calltips: true,
            caret_width: 2,
            wrap_mode: WrapMode::None,
            focused: false,
            completion: CompletionList::new(),
            calltip: Calltip::default(),
            highlighter: BraceHighlighter::default(),
            markers: MarkerSet::new(),
            events: EventQueue::default(),
            undo_available: false,
            redo_available: false,
            cell_size: (8.0, 16.0),
            track_changes: false,
            changes: Vec::new(),
            snapshot,
        }
    }

    /// Apply calltip, completion, brace and caret settings
    pub fn setup(&mut self, config: &EditorConfig) {
        self.calltips = config.calltips.enabled;
        self.calltip = Calltip::new(config.calltips.size, config.calltips.font.clone());

        let completion = &config.completion;
        self.codecompletion = completion.enabled;
        self.completion.setup(
            completion.case_sensitive,
            completion.show_single,
            completion.size,
            completion.font.clone(),
        );
        self.set_codecompletion_enter(completion.enter_selects);

        self.highlighter.set_style(config.brace_match);
        self.caret_width = config.caret_width;
        self.wrap_mode = config.wrap_mode;
        tracing::debug!(
            wrap_mode = ?config.wrap_mode,
            caret_width = config.caret_width,
            "text edit configured"
        );
    }

    pub fn state(&self) -> &EditableState<RopeBuffer> {
        &self.state
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    /// The highlighted brace match, if any
    pub fn brace_match(&self) -> Option<BraceMatch> {
        self.highlighter.current()
    }

    pub fn completion(&self) -> &CompletionList {
        &self.completion
    }

    pub fn calltip(&self) -> Option<&CalltipContent> {
        self.calltip.current()
    }

    /// Read-only text before the editable part of a line (shell prompts)
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: &str) {
        self.prompt = prompt.to_string();
    }

    /// Drain pending notifications
    pub fn take_events(&mut self) -> Vec<WidgetEvent> {
        self.events.take()
    }

    /// Record buffer edits for `take_changes`
    pub fn set_track_changes(&mut self, enabled: bool) {
        self.track_changes = enabled;
        self.changes.clear();
    }

    pub fn take_changes(&mut self) -> Vec<TextChange> {
        std::mem::take(&mut self.changes)
    }

    /// Resolve a symbolic position to a char offset (clamped to the document)
    pub fn position(&self, anchor: impl Into<Anchor>) -> usize {
        let buffer = &self.state.buffer;
        let line = self.state.cursor().line;
        match anchor.into() {
            Anchor::Cursor => self.state.cursor_offset(),
            Anchor::LineStart => buffer.line_start_offset(line),
            Anchor::LineEnd => buffer.position_to_offset(line, buffer.line_length(line)),
            Anchor::DocumentStart => 0,
            Anchor::DocumentEnd => buffer.len_chars(),
            Anchor::Offset(offset) => offset.min(buffer.len_chars()),
        }
    }

    fn range_between(&self, from: impl Into<Anchor>, to: impl Into<Anchor>) -> Range<usize> {
        let a = self.position(from);
        let b = self.position(to);
        a.min(b)..a.max(b)
    }
}

// =============================================================================
// Text
// =============================================================================

impl TextEdit {
    pub fn text(&self) -> String {
        self.state.text()
    }

    /// Replace the whole document; clears history and the modified flag
    pub fn set_text(&mut self, text: &str) {
        self.state.set_content(text);
        if self.track_changes {
            self.changes.push(TextChange::Reset);
        }
        self.set_modified(false);
        self.sync_history_events();
        self.cursor_position_changed();
    }

    /// Text between two positions, without trailing newlines
    pub fn get_text(&self, from: impl Into<Anchor>, to: impl Into<Anchor>) -> String {
        let mut text = self.state.buffer.slice(self.range_between(from, to));
        while text.ends_with('\n') {
            text.pop();
        }
        text
    }

    /// Character at a position, None at the end of the document
    pub fn get_character(&self, at: impl Into<Anchor>) -> Option<char> {
        self.state.buffer.char_at_offset(self.position(at))
    }

    /// Insert at the cursor, replacing the selection.
    /// Returns false if the constraints reject any character.
    pub fn insert_text(&mut self, text: &str) -> bool {
        if !text.chars().all(|ch| self.state.constraints.is_char_allowed(ch)) {
            return false;
        }
        let range = self.state.selection_range();
        self.splice(range, text);
        true
    }

    /// Same as `insert_text`
    pub fn replace_selection(&mut self, text: &str) -> bool {
        self.insert_text(text)
    }

    pub fn replace_text(&mut self, from: impl Into<Anchor>, to: impl Into<Anchor>, text: &str) {
        let range = self.range_between(from, to);
        self.splice(range, text);
    }

    pub fn remove_text(&mut self, from: impl Into<Anchor>, to: impl Into<Anchor>) {
        let range = self.range_between(from, to);
        self.splice(range, "");
    }

    /// Word under (or immediately before) the cursor; empty if none
    pub fn get_current_word(&self) -> String {
        let line = self.state.cursor().line;
        let column = self.state.cursor().column;
        let content = self.state.buffer.line(line).unwrap_or_default();
        let chars: Vec<char> = content.chars().collect();

        let at = if chars.get(column).is_some_and(|&ch| is_word_char(ch)) {
            column
        } else if column > 0 && chars.get(column - 1).is_some_and(|&ch| is_word_char(ch)) {
            column - 1
        } else {
            return String::new();
        };
        match word_bounds(&chars, at) {
            Some((start, end)) => chars[start..end].iter().collect(),
            None => String::new(),
        }
    }

    /// Text of the cursor's line
    pub fn get_current_line(&self) -> String {
        self.state
            .buffer
            .line(self.state.cursor().line)
            .map(Cow::into_owned)
            .unwrap_or_default()
    }

    /// Single edit path: replace, record, notify
    fn splice(&mut self, range: Range<usize>, text: &str) {
        let len = self.state.buffer.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        if start == end && text.is_empty() {
            return;
        }

        self.state.replace_range(start..end, text);
        if self.track_changes {
            self.changes.push(TextChange::Splice {
                start,
                removed: end - start,
                inserted: text.chars().count(),
            });
        }
        self.after_edit();
    }

    fn after_edit(&mut self) {
        self.set_modified(true);
        self.sync_history_events();
        self.cursor_position_changed();
    }

    fn sync_history_events(&mut self) {
        let undo = self.state.can_undo();
        if undo != self.undo_available {
            self.undo_available = undo;
            self.events.push(WidgetEvent::UndoAvailable(undo));
        }
        let redo = self.state.can_redo();
        if redo != self.redo_available {
            self.redo_available = redo;
            self.events.push(WidgetEvent::RedoAvailable(redo));
        }
    }
}

// =============================================================================
// Selection and cursor
// =============================================================================

impl TextEdit {
    pub fn has_selected_text(&self) -> bool {
        self.state.has_selection()
    }

    pub fn selected_text(&self) -> String {
        self.state.selected_text()
    }

    pub fn remove_selected_text(&mut self) {
        if self.state.has_selection() {
            let range = self.state.selection_range();
            self.splice(range, "");
        }
    }

    pub fn clear_selection(&mut self) {
        self.state.collapse_selection();
        self.cursor_position_changed();
    }

    /// Select from `start` to `end`; the cursor lands on `end`
    pub fn set_selection(&mut self, start: impl Into<Anchor>, end: impl Into<Anchor>) {
        let anchor = self.position(start);
        let head = self.position(end);
        self.state.select_offsets(anchor, head);
        self.cursor_position_changed();
    }

    pub fn select_all(&mut self) {
        self.state.select_all();
        self.cursor_position_changed();
    }

    pub fn cursor_position(&self) -> usize {
        self.state.cursor_offset()
    }

    pub fn set_cursor_position(&mut self, at: impl Into<Anchor>) {
        let offset = self.position(at);
        self.state.set_cursor_offset(offset, false);
        self.cursor_position_changed();
    }

    /// Move by `chars` characters (negative moves left), clearing the selection
    pub fn move_cursor(&mut self, chars: isize) {
        let len = self.state.buffer.len_chars();
        let target = self
            .state
            .cursor_offset()
            .saturating_add_signed(chars)
            .min(len);
        self.state.set_cursor_offset(target, false);
        self.cursor_position_changed();
    }

    pub fn move_cursor_to_next(&mut self, unit: TextUnit, direction: HorizontalDirection) {
        self.move_by(unit, direction, false);
    }

    pub fn extend_selection_to_next(&mut self, unit: TextUnit, direction: HorizontalDirection) {
        self.move_by(unit, direction, true);
    }

    fn move_by(&mut self, unit: TextUnit, direction: HorizontalDirection, extend: bool) {
        match (unit, direction) {
            (TextUnit::Character, HorizontalDirection::Left) => self.state.move_left(extend),
            (TextUnit::Character, HorizontalDirection::Right) => self.state.move_right(extend),
            (TextUnit::Word, HorizontalDirection::Left) => self.state.move_word_left(extend),
            (TextUnit::Word, HorizontalDirection::Right) => self.state.move_word_right(extend),
        }
        self.cursor_position_changed();
    }

    pub fn is_cursor_on_last_line(&self) -> bool {
        self.state.cursor().line + 1 >= self.state.buffer.line_count()
    }

    pub fn is_cursor_at_end(&self) -> bool {
        self.state.cursor_offset() == self.state.buffer.len_chars()
    }

    /// True if the cursor is before `at + char_offset`, which must lie
    /// inside the document
    pub fn is_cursor_before(&self, at: impl Into<Anchor>, char_offset: usize) -> bool {
        let position = self.position(at) + char_offset;
        position < self.state.buffer.len_chars() && self.state.cursor_offset() < position
    }

    /// Re-highlight braces after any cursor change. Hosts call this after
    /// moving the cursor by means the widget does not see.
    pub fn cursor_position_changed(&mut self) {
        let snapshot = SelectionSnapshot::from_state(&self.state);
        if let Some(diff) = self.snapshot.diff(&snapshot) {
            tracing::trace!("{}", diff);
        }
        self.snapshot = snapshot;
        self.highlighter.update(&self.state, &mut self.markers);
    }
}

// =============================================================================
// Search
// =============================================================================

impl TextEdit {
    /// Find and select `text`.
    ///
    /// Forward search continues after the current selection, then from the
    /// next word, then wraps to the start of the document. With `changed`
    /// (the search text was just edited) it first steps back a word so the
    /// current match can grow. Backward search wraps to the end.
    pub fn find_text(
        &mut self,
        text: &str,
        changed: bool,
        forward: bool,
        case_sensitive: bool,
        whole_words: bool,
    ) -> bool {
        if text.is_empty() {
            return false;
        }
        let options = FindOptions {
            forward,
            case_sensitive,
            whole_words,
        };
        let haystack: Vec<char> = self.state.buffer.rope().chars().collect();

        if forward && changed {
            self.state.move_word_left(false);
        }
        let mut found = self.find_from_cursor(&haystack, text, options);
        if found.is_none() {
            found = if forward {
                self.state.move_word_right(false);
                self.find_from_cursor(&haystack, text, options)
                    .or_else(|| find_in(&haystack, text, 0, options))
            } else {
                find_in(&haystack, text, haystack.len(), options)
            };
        }

        match found {
            Some(range) => {
                tracing::debug!(?range, "find_text match");
                self.state.select_offsets(range.start, range.end);
                self.cursor_position_changed();
                true
            }
            None => {
                self.cursor_position_changed();
                false
            }
        }
    }

    fn find_from_cursor(&self, haystack: &[char], text: &str, options: FindOptions) -> Option<Range<usize>> {
        let selection = self.state.selection_range();
        let from = if options.forward {
            selection.end
        } else {
            selection.start
        };
        find_in(haystack, text, from, options)
    }
}

// =============================================================================
// State and options
// =============================================================================

impl TextEdit {
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn set_modified(&mut self, modified: bool) {
        if self.modified != modified {
            self.modified = modified;
            self.events.push(WidgetEvent::ModificationChanged(modified));
        }
    }

    pub fn is_undo_available(&self) -> bool {
        self.state.can_undo()
    }

    pub fn is_redo_available(&self) -> bool {
        self.state.can_redo()
    }

    pub fn undo(&mut self) -> bool {
        self.apply_history(|state| state.undo())
    }

    pub fn redo(&mut self) -> bool {
        self.apply_history(|state| state.redo())
    }

    fn apply_history(&mut self, step: impl FnOnce(&mut EditableState<RopeBuffer>) -> bool) -> bool {
        if !step(&mut self.state) {
            return false;
        }
        if self.track_changes {
            self.changes.push(TextChange::Reset);
        }
        self.after_edit();
        true
    }

    pub fn codecompletion(&self) -> bool {
        self.codecompletion
    }

    /// Turning completion off also hides a visible list
    pub fn set_codecompletion(&mut self, state: bool) {
        self.codecompletion = state;
        if !state {
            self.completion.hide();
        }
    }

    pub fn codecompletion_enter(&self) -> bool {
        self.codecompletion_enter
    }

    /// Enable Enter to accept a completion
    pub fn set_codecompletion_enter(&mut self, state: bool) {
        self.codecompletion_enter = state;
        self.completion.set_enter_select(state);
    }

    pub fn calltips_enabled(&self) -> bool {
        self.calltips
    }

    pub fn set_calltips(&mut self, state: bool) {
        self.calltips = state;
    }

    pub fn caret_width(&self) -> u32 {
        self.caret_width
    }

    pub fn set_caret_width(&mut self, width: u32) {
        self.caret_width = width;
    }

    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap_mode
    }

    pub fn set_wrap_mode(&mut self, mode: WrapMode) {
        self.wrap_mode = mode;
    }

    pub fn toggle_wrap_mode(&mut self, enable: bool) {
        self.set_wrap_mode(if enable { WrapMode::Word } else { WrapMode::None });
    }

    pub fn set_cell_size(&mut self, width: f32, height: f32) {
        self.cell_size = (width, height);
    }

    pub fn set_screen_height(&mut self, height: f32) {
        self.completion.set_screen_height(height);
    }

    /// Caret rectangle in widget pixels
    pub fn cursor_rect(&self) -> Rect {
        let (width, height) = self.cell_size;
        let cursor = self.state.cursor();
        Rect::new(
            cursor.column as f32 * width,
            cursor.line as f32 * height,
            self.caret_width as f32,
            height,
        )
    }
}

// =============================================================================
// Standard keys
// =============================================================================

impl TextEdit {
    /// Delete the selection, or the character after the cursor
    pub fn stdkey_clear(&mut self) {
        let range = if self.state.has_selection() {
            self.state.selection_range()
        } else {
            let offset = self.state.cursor_offset();
            offset..offset + 1
        };
        self.splice(range, "");
    }

    /// Delete the selection, or the character before the cursor
    pub fn stdkey_backspace(&mut self) {
        let range = if self.state.has_selection() {
            self.state.selection_range()
        } else {
            let offset = self.state.cursor_offset();
            offset.saturating_sub(1)..offset
        };
        self.splice(range, "");
    }

    pub fn stdkey_up(&mut self, shift: bool) {
        self.state.move_up(shift);
        self.cursor_position_changed();
    }

    pub fn stdkey_down(&mut self, shift: bool) {
        self.state.move_down(shift);
        self.cursor_position_changed();
    }

    pub fn stdkey_tab(&mut self) {
        self.insert_text("    ");
    }

    /// Start of line, skipping the prompt
    pub fn stdkey_home(&mut self, shift: bool) {
        let line = self.state.cursor().line;
        let prompt_len = self.prompt.chars().count();
        let column = prompt_len.min(self.state.buffer.line_length(line));
        let target = self.state.buffer.line_start_offset(line) + column;
        self.state.set_cursor_offset(target, shift);
        self.cursor_position_changed();
    }

    pub fn stdkey_end(&mut self, shift: bool) {
        self.state.move_line_end(shift);
        self.cursor_position_changed();
    }

    pub fn stdkey_pageup(&mut self) {}

    pub fn stdkey_pagedown(&mut self) {}

    pub fn stdkey_escape(&mut self) {}

    /// Route a keystroke, through the completion list first when it is
    /// visible. Returns false if the key was not used.
    pub fn handle_key(&mut self, key: &Keystroke) -> bool {
        tracing::trace!(%key, completion = self.completion.is_visible(), "key");
        let handled = if self.completion.is_visible() {
            match self.completion.handle_key(key) {
                CompletionKeyAction::Select => {
                    self.select_completion_list();
                    true
                }
                CompletionKeyAction::HideAndForward => self.default_key(key),
                CompletionKeyAction::Forward { refresh } => {
                    let handled = self.default_key(key);
                    if refresh {
                        let typed = self.completion_text();
                        self.completion.update_current(&typed);
                    }
                    handled
                }
                CompletionKeyAction::Navigate => true,
                CompletionKeyAction::Hide => false,
            }
        } else {
            self.default_key(key)
        };
        self.hide_calltip_if_necessary(key);
        handled
    }

    fn default_key(&mut self, key: &Keystroke) -> bool {
        let shift = key.mods.shift();
        let unit = if key.mods.ctrl() || key.mods.alt() {
            TextUnit::Word
        } else {
            TextUnit::Character
        };
        match key.key {
            KeyCode::Enter => return self.insert_text("\n"),
            KeyCode::Tab => self.stdkey_tab(),
            KeyCode::Backspace => self.stdkey_backspace(),
            KeyCode::Delete => self.stdkey_clear(),
            KeyCode::Up => self.stdkey_up(shift),
            KeyCode::Down => self.stdkey_down(shift),
            KeyCode::Left => self.move_by(unit, HorizontalDirection::Left, shift),
            KeyCode::Right => self.move_by(unit, HorizontalDirection::Right, shift),
            KeyCode::Home => self.stdkey_home(shift),
            KeyCode::End => self.stdkey_end(shift),
            KeyCode::PageUp => self.stdkey_pageup(),
            KeyCode::PageDown => self.stdkey_pagedown(),
            KeyCode::Escape => self.stdkey_escape(),
            KeyCode::Char(c) if key.mods.ctrl() || key.mods.meta() => {
                return self.command_key(c)
            }
            KeyCode::Char(c) => return self.insert_text(c.encode_utf8(&mut [0; 4])),
        }
        true
    }

    fn command_key(&mut self, c: char) -> bool {
        match c.to_ascii_lowercase() {
            'z' => self.undo(),
            'y' => self.redo(),
            'a' => {
                self.select_all();
                true
            }
            _ => false,
        }
    }
}

// =============================================================================
// Completion and calltips
// =============================================================================

impl TextEdit {
    /// Identifier characters typed just before the cursor
    pub fn completion_text(&self) -> String {
        let cursor = self.state.cursor();
        let content = self.state.buffer.line(cursor.line).unwrap_or_default();
        let before: Vec<char> = content.chars().take(cursor.column).collect();
        let start = before
            .iter()
            .rposition(|&ch| !is_word_char(ch))
            .map_or(0, |i| i + 1);
        before[start..].iter().collect()
    }

    /// Show the completion popup at the cursor.
    ///
    /// Nothing is shown for an empty list or when completion is off. A single
    /// candidate is inserted directly unless `show_single` is set.
    pub fn show_completion_widget(&mut self, items: Vec<String>) {
        if !self.codecompletion || items.is_empty() {
            self.completion.hide();
            return;
        }
        if items.len() == 1 && !self.completion.show_single {
            self.insert_completion(&items[0]);
            return;
        }
        let rect = self.cursor_rect();
        self.completion.show_list(items, rect);
    }

    pub fn hide_completion_widget(&mut self) {
        self.completion.hide();
    }

    pub fn is_completion_widget_visible(&self) -> bool {
        self.completion.is_visible()
    }

    /// Accept the current completion item
    pub fn select_completion_list(&mut self) {
        if let Some(item) = self.completion.select() {
            self.insert_completion(&item);
        }
    }

    /// Replace the typed prefix with `text`
    pub fn insert_completion(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let typed = self.completion_text().chars().count();
        let cursor = self.state.cursor_offset();
        self.splice(cursor - typed..cursor, text);
        self.events
            .push(WidgetEvent::CompletionActivated(text.to_string()));
    }

    /// Show a calltip anchored at the cursor (ignored when calltips are off)
    pub fn show_calltip(
        &mut self,
        title: &str,
        text: impl Into<CalltipText>,
        color: Color,
    ) -> Option<&CalltipContent> {
        if !self.calltips {
            return None;
        }
        let anchor = self.state.cursor_offset();
        self.calltip.show(title, text, color, anchor)
    }

    pub fn hide_calltip(&mut self) {
        self.calltip.hide();
    }

    pub fn hide_calltip_if_necessary(&mut self, key: &Keystroke) -> bool {
        self.calltip.hide_if_necessary(&self.state, key)
    }
}

// =============================================================================
// Focus
// =============================================================================

impl TextEdit {
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn focus_in(&mut self) {
        self.focused = true;
        self.events.push(WidgetEvent::FocusChanged);
        self.events.push(WidgetEvent::FocusIn);
    }

    pub fn focus_out(&mut self) {
        self.focused = false;
        self.completion.focus_out();
        self.events.push(WidgetEvent::FocusChanged);
    }
}

impl TextSource for TextEdit {
    fn cursor_offset(&self) -> usize {
        self.state.cursor_offset()
    }

    fn char_at_offset(&self, offset: usize) -> Option<char> {
        self.state.char_at_offset(offset)
    }

    fn line_of_offset(&self, offset: usize) -> usize {
        self.state.line_of_offset(offset)
    }

    fn line_text(&self, line: usize) -> Cow<'_, str> {
        self.state.line_text(line)
    }

    fn line_start_offset(&self, line: usize) -> usize {
        self.state.line_start_offset(line)
    }
}
