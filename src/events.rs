//! Notifications a widget queues for its host
//!
//! Hosts drain them after each call with `take_events()`.

/// Widget notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The modified flag flipped
    ModificationChanged(bool),
    /// Focus entered or left the widget
    FocusChanged,
    /// Focus entered the widget (follows `FocusChanged`)
    FocusIn,
    /// A completion item was accepted
    CompletionActivated(String),
    /// Undo became available or unavailable
    UndoAvailable(bool),
    /// Redo became available or unavailable
    RedoAvailable(bool),
}

/// FIFO of pending events
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: Vec<WidgetEvent>,
}

impl EventQueue {
    pub fn push(&mut self, event: WidgetEvent) {
        tracing::trace!(?event, "widget event");
        self.pending.push(event);
    }

    pub fn take(&mut self) -> Vec<WidgetEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
