//! Applying brace matches as colored markers.

use std::collections::BTreeMap;

use crate::source::TextSource;
use crate::style::{BraceMatchStyle, Color};

use super::{match_at_cursor, BraceMatch};

/// Receiver for single-character highlight markers (document char offsets).
pub trait HighlightSink {
    fn apply_marker(&mut self, offset: usize, color: Color);
    fn clear_marker(&mut self, offset: usize);
}

/// In-memory marker store for headless hosts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSet {
    markers: BTreeMap<usize, Color>,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markers in offset order
    pub fn markers(&self) -> impl Iterator<Item = (usize, Color)> + '_ {
        self.markers.iter().map(|(&offset, &color)| (offset, color))
    }

    pub fn color_at(&self, offset: usize) -> Option<Color> {
        self.markers.get(&offset).copied()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl HighlightSink for MarkerSet {
    fn apply_marker(&mut self, offset: usize, color: Color) {
        self.markers.insert(offset, color);
    }

    fn clear_marker(&mut self, offset: usize) {
        self.markers.remove(&offset);
    }
}

/// Holds the one highlighted match and swaps it on every cursor move.
#[derive(Debug, Clone, Default)]
pub struct BraceHighlighter {
    current: Option<BraceMatch>,
    style: BraceMatchStyle,
}

impl BraceHighlighter {
    pub fn new(style: BraceMatchStyle) -> Self {
        Self {
            current: None,
            style,
        }
    }

    pub fn current(&self) -> Option<BraceMatch> {
        self.current
    }

    pub fn style(&self) -> BraceMatchStyle {
        self.style
    }

    pub fn set_style(&mut self, style: BraceMatchStyle) {
        self.style = style;
    }

    /// Clear the previous highlight, then highlight the match at the cursor
    pub fn update<S, H>(&mut self, source: &S, sink: &mut H) -> Option<BraceMatch>
    where
        S: TextSource + ?Sized,
        H: HighlightSink + ?Sized,
    {
        self.clear(sink);

        let found = match_at_cursor(source);
        if let Some(found) = found {
            let color = if found.is_matched() {
                self.style.matched
            } else {
                self.style.unmatched
            };
            for offset in found.offsets() {
                sink.apply_marker(offset, color);
            }
            tracing::trace!(?found, "brace highlight");
        }
        self.current = found;
        found
    }

    /// Remove the current highlight, if any
    pub fn clear<H: HighlightSink + ?Sized>(&mut self, sink: &mut H) {
        if let Some(previous) = self.current.take() {
            for offset in previous.offsets() {
                sink.clear_marker(offset);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::{EditConstraints, EditableState, RopeBuffer};

    fn state_at(text: &str, offset: usize) -> EditableState<RopeBuffer> {
        let mut state = EditableState::new(RopeBuffer::from_text(text), EditConstraints::editor());
        state.set_cursor_offset(offset, false);
        state
    }

    #[test]
    fn test_matched_pair_is_green() {
        let state = state_at("x = (a(b)c)", 11);
        let mut markers = MarkerSet::new();
        let mut highlighter = BraceHighlighter::default();

        let found = highlighter.update(&state, &mut markers);
        assert_eq!(found, Some(BraceMatch::Matched { at: 10, partner: 4 }));
        assert_eq!(markers.color_at(10), Some(Color::GREEN));
        assert_eq!(markers.color_at(4), Some(Color::GREEN));
        assert_eq!(markers.len(), 2);
    }

    #[test]
    fn test_unmatched_is_red() {
        let state = state_at("(]", 2);
        let mut markers = MarkerSet::new();
        let mut highlighter = BraceHighlighter::default();

        highlighter.update(&state, &mut markers);
        assert_eq!(markers.markers().collect::<Vec<_>>(), vec![(1, Color::RED)]);
    }

    #[test]
    fn test_previous_highlight_is_cleared() {
        let mut state = state_at("(a)\nb", 3);
        let mut markers = MarkerSet::new();
        let mut highlighter = BraceHighlighter::default();

        highlighter.update(&state, &mut markers);
        assert_eq!(markers.len(), 2);

        state.set_cursor_offset(5, false);
        assert_eq!(highlighter.update(&state, &mut markers), None);
        assert!(markers.is_empty());
        assert_eq!(highlighter.current(), None);
    }

    #[test]
    fn test_update_is_idempotent() {
        let state = state_at("foo(bar[baz]qux)", 16);
        let mut markers = MarkerSet::new();
        let mut highlighter = BraceHighlighter::default();

        let first = highlighter.update(&state, &mut markers);
        let snapshot = markers.clone();
        let second = highlighter.update(&state, &mut markers);
        assert_eq!(first, second);
        assert_eq!(markers, snapshot);
        assert_eq!(first, Some(BraceMatch::Matched { at: 15, partner: 3 }));
    }

    #[test]
    fn test_custom_style() {
        let style = BraceMatchStyle {
            matched: Color::rgb(1, 2, 3),
            unmatched: Color::rgb(4, 5, 6),
        };
        let state = state_at("[]", 2);
        let mut markers = MarkerSet::new();
        BraceHighlighter::new(style).update(&state, &mut markers);
        assert_eq!(markers.color_at(0), Some(Color::rgb(1, 2, 3)));
    }
}
