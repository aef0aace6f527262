//! Edit constraints: which operations an editing context allows.

/// Character filter function type
pub type CharFilter = fn(char) -> bool;

/// Constraints that limit what operations are allowed in an editing context.
#[derive(Debug, Clone)]
pub struct EditConstraints {
    /// Enter inserts a newline (vs. being rejected)
    pub allow_multiline: bool,

    pub allow_selection: bool,

    /// Record edits for undo/redo
    pub enable_undo: bool,

    /// Returns true if the character may be inserted
    pub char_filter: Option<CharFilter>,
}

impl Default for EditConstraints {
    fn default() -> Self {
        Self::editor()
    }
}

impl EditConstraints {
    /// Code editor: everything enabled
    pub fn editor() -> Self {
        Self {
            allow_multiline: true,
            allow_selection: true,
            enable_undo: true,
            char_filter: None,
        }
    }

    /// Console transcript: multi-line, but undo/redo makes no sense there
    pub fn console() -> Self {
        Self {
            allow_multiline: true,
            allow_selection: true,
            enable_undo: false,
            char_filter: None,
        }
    }

    /// Single-line inputs
    pub fn single_line() -> Self {
        Self {
            allow_multiline: false,
            allow_selection: true,
            enable_undo: true,
            char_filter: None,
        }
    }

    pub fn is_char_allowed(&self, ch: char) -> bool {
        if ch == '\n' && !self.allow_multiline {
            return false;
        }
        self.char_filter.map_or(true, |filter| filter(ch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_disables_undo() {
        let c = EditConstraints::console();
        assert!(c.allow_multiline);
        assert!(!c.enable_undo);
    }

    #[test]
    fn test_single_line_rejects_newline() {
        let c = EditConstraints::single_line();
        assert!(!c.is_char_allowed('\n'));
        assert!(c.is_char_allowed('x'));
        assert!(EditConstraints::editor().is_char_allowed('\n'));
    }

    #[test]
    fn test_char_filter() {
        let c = EditConstraints {
            char_filter: Some(|c| c.is_ascii_digit()),
            ..EditConstraints::single_line()
        };
        assert!(c.is_char_allowed('7'));
        assert!(!c.is_char_allowed('x'));
    }
}
