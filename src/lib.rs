//! codepane - code-editing widget core
//!
//! Brace matching, completion popup, calltips and a console view with
//! styled output regions, built on a rope-backed editing model.

pub mod brace;
pub mod calltip;
pub mod cli;
pub mod completion;
pub mod config;
pub mod config_paths;
pub mod console;
pub mod editable;
pub mod events;
pub mod geometry;
pub mod keys;
pub mod source;
pub mod style;
pub mod tracing;
pub mod util;
pub mod widget;

// Re-export commonly used types
pub use brace::{find_partner, BraceMatch, Direction};
pub use config::EditorConfig;
pub use console::ConsoleView;
pub use events::WidgetEvent;
pub use source::TextSource;
pub use widget::{Anchor, TextEdit};
