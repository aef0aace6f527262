//! Tracing setup and cursor/selection snapshots for trace logs
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=codepane::widget=trace` - cursor moves and brace highlights
//!
//! # Log Files
//!
//! Logs are written to `~/.config/codepane/logs/codepane.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::{EditableState, TextBuffer};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). The file layer always
/// logs at debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "codepane.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    // A host may already have installed a subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of cursor/selection state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub line: usize,
    pub column: usize,
    pub anchor: (usize, usize),
    pub head: (usize, usize),
    pub selection_empty: bool,
}

impl SelectionSnapshot {
    pub fn from_state<B: TextBuffer>(state: &EditableState<B>) -> Self {
        let cursor = state.cursor();
        let selection = state.selection();
        Self {
            line: cursor.line,
            column: cursor.column,
            anchor: (selection.anchor.line, selection.anchor.column),
            head: (selection.head.line, selection.head.column),
            selection_empty: selection.is_empty(),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.line != other.line || self.column != other.column {
            changes.push(format!(
                "cursor ({},{}) → ({},{})",
                self.line, self.column, other.line, other.column
            ));
        }
        if self.selection_empty != other.selection_empty {
            let status = if other.selection_empty {
                "cleared"
            } else {
                "active"
            };
            changes.push(format!("selection {}", status));
        } else if !other.selection_empty && (self.anchor != other.anchor || self.head != other.head) {
            changes.push(format!(
                "selection {:?}..{:?} → {:?}..{:?}",
                self.anchor, self.head, other.anchor, other.head
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::{EditConstraints, RopeBuffer};

    #[test]
    fn test_snapshot_diff() {
        let mut state = EditableState::new(RopeBuffer::from_text("abc\ndef"), EditConstraints::editor());
        let before = SelectionSnapshot::from_state(&state);
        assert_eq!(before.diff(&before), None);

        state.set_cursor_offset(5, true);
        let after = SelectionSnapshot::from_state(&state);
        assert_eq!(
            before.diff(&after).as_deref(),
            Some("cursor (0,0) → (1,1); selection active")
        );
    }
}
