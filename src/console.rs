//! Console/shell transcript view with styled output regions.
//!
//! Output is appended at the end of the document in one of four styles.
//! Undo is disabled. Each character carries the style it was written with;
//! text typed by the user gets the default style.

use std::ops::Range;

use anyhow::{Context, Result};

use crate::config::{ConsoleConfig, EditorConfig};
use crate::editable::EditConstraints;
use crate::keys::Keystroke;
use crate::style::{FontSpec, TextStyle};
use crate::widget::{Anchor, TextChange, TextEdit};

/// Prefix of a traceback line that names a source location
const TRACEBACK_FILE_PREFIX: &str = "  File";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ConsoleStyle {
    #[default]
    Default,
    Prompt,
    Error,
    TracebackLink,
}

/// A maximal run of equally styled characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub range: Range<usize>,
    pub style: ConsoleStyle,
}

#[derive(Debug, Clone)]
pub struct ConsoleView {
    edit: TextEdit,
    styles: Vec<ConsoleStyle>,
    palette: ConsoleConfig,
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleView {
    pub fn new() -> Self {
        let mut edit = TextEdit::with_constraints(EditConstraints::console());
        edit.set_track_changes(true);
        Self {
            edit,
            styles: Vec::new(),
            palette: ConsoleConfig::default(),
        }
    }

    pub fn with_config(config: &EditorConfig) -> Self {
        let mut console = Self::new();
        console.edit.setup(config);
        console.palette = config.console.clone();
        console
    }

    pub fn edit(&self) -> &TextEdit {
        &self.edit
    }

    /// Run `f` against the underlying widget; text it inserts gets the
    /// default style
    pub fn with_edit<R>(&mut self, f: impl FnOnce(&mut TextEdit) -> R) -> R {
        let result = f(&mut self.edit);
        self.sync_styles(ConsoleStyle::Default);
        result
    }

    pub fn text(&self) -> String {
        self.edit.text()
    }

    pub fn set_prompt(&mut self, prompt: &str) {
        self.edit.set_prompt(prompt);
    }

    /// Append output at the end of the document.
    ///
    /// Error text is written line by line: traceback lines starting with
    /// `"  File"` become two default spaces plus a link, the rest use the
    /// error style. Prompt text uses the prompt style. The cursor ends up at
    /// the end of the document.
    pub fn append_text(&mut self, text: &str, error: bool, prompt: bool) {
        self.edit.set_cursor_position(Anchor::DocumentEnd);
        if error {
            for line in text.split_inclusive('\n') {
                if line.starts_with(TRACEBACK_FILE_PREFIX) {
                    self.write("  ", ConsoleStyle::Default);
                    self.write(&line[2..], ConsoleStyle::TracebackLink);
                } else {
                    self.write(line, ConsoleStyle::Error);
                }
            }
        } else if prompt {
            self.write(text, ConsoleStyle::Prompt);
        } else {
            self.write(text, ConsoleStyle::Default);
        }
        self.edit.set_cursor_position(Anchor::DocumentEnd);
        tracing::trace!(len = text.len(), error, prompt, "console append");
    }

    /// Insert at the cursor in the default style, replacing the selection
    pub fn insert_text(&mut self, text: &str) {
        self.write(text, ConsoleStyle::Default);
    }

    pub fn paste_text(&mut self, text: &str) {
        if self.edit.has_selected_text() {
            self.edit.remove_selected_text();
        }
        self.insert_text(text);
    }

    /// Paste from the system clipboard
    pub fn paste(&mut self) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("Clipboard unavailable")?;
        let text = clipboard.get_text().context("Clipboard holds no text")?;
        self.paste_text(&text);
        Ok(())
    }

    pub fn handle_key(&mut self, key: &Keystroke) -> bool {
        self.with_edit(|edit| edit.handle_key(key))
    }

    pub fn set_selection(&mut self, start: impl Into<Anchor>, end: impl Into<Anchor>) {
        self.edit.set_selection(start, end);
    }

    /// Drop the part of the selection that lies before `from` (the prompt
    /// and earlier output). The selection is rebuilt from its start to its
    /// end, so the cursor ends up at the end.
    pub fn truncate_selection(&mut self, from: impl Into<Anchor>) {
        if !self.edit.has_selected_text() {
            return;
        }
        let from = self.edit.position(from);
        let range = self.edit.state().selection_range();
        self.edit.set_selection(range.start.max(from), range.end.max(from));
    }

    /// Keep the cursor inside `from..=to`, jumping to `to` otherwise
    pub fn restrict_cursor_position(&mut self, from: impl Into<Anchor>, to: impl Into<Anchor>) {
        let from = self.edit.position(from);
        let to = self.edit.position(to);
        let cursor = self.edit.cursor_position();
        if cursor < from || cursor > to {
            self.edit.set_cursor_position(to);
        }
    }

    pub fn font(&self) -> &FontSpec {
        &self.palette.font
    }

    /// Font shared by every console style
    pub fn set_font(&mut self, font: FontSpec) {
        self.palette.font = font;
    }

    pub fn set_palette(&mut self, palette: ConsoleConfig) {
        self.palette = palette;
    }

    pub fn style(&self, kind: ConsoleStyle) -> TextStyle {
        match kind {
            ConsoleStyle::Default => self.palette.default,
            ConsoleStyle::Prompt => self.palette.prompt,
            ConsoleStyle::Error => self.palette.error,
            ConsoleStyle::TracebackLink => self.palette.traceback_link,
        }
    }

    pub fn style_at(&self, offset: usize) -> Option<ConsoleStyle> {
        self.styles.get(offset).copied()
    }

    /// Contiguous styled runs covering the whole document
    pub fn styled_runs(&self) -> Vec<StyledRun> {
        let mut runs: Vec<StyledRun> = Vec::new();
        for (offset, &style) in self.styles.iter().enumerate() {
            match runs.last_mut() {
                Some(run) if run.style == style => run.range.end = offset + 1,
                _ => runs.push(StyledRun {
                    range: offset..offset + 1,
                    style,
                }),
            }
        }
        runs
    }

    fn write(&mut self, text: &str, style: ConsoleStyle) {
        self.edit.insert_text(text);
        self.sync_styles(style);
    }

    /// Mirror pending buffer edits into the style table
    fn sync_styles(&mut self, style: ConsoleStyle) {
        for change in self.edit.take_changes() {
            match change {
                TextChange::Splice {
                    start,
                    removed,
                    inserted,
                } => {
                    let end = (start + removed).min(self.styles.len());
                    let start = start.min(end);
                    self.styles
                        .splice(start..end, std::iter::repeat(style).take(inserted));
                }
                TextChange::Reset => {
                    let len = self.edit.state().buffer.rope().len_chars();
                    self.styles = vec![ConsoleStyle::Default; len];
                }
            }
        }
    }
}
