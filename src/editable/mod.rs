//! Text editing model shared by the code editor and the console view.
//!
//! - [`TextBuffer`] / [`TextBufferMut`]: traits abstracting over buffer implementations
//! - [`StringBuffer`]: buffer for single-line inputs (backed by `String`)
//! - [`RopeBuffer`]: buffer for documents and console transcripts (backed by `ropey::Rope`)
//! - [`EditableState`]: cursor, selection and history over a buffer
//! - [`EditConstraints`]: context-specific restrictions (e.g. no undo in a console)
//!
//! # Example
//!
//! ```
//! use codepane::editable::{EditableState, EditConstraints, StringBuffer};
//!
//! let mut state = EditableState::new(
//!     StringBuffer::from_text("hello"),
//!     EditConstraints::single_line(),
//! );
//! state.move_line_end(false);
//! state.insert_char('!');
//!
//! assert_eq!(state.text(), "hello!");
//! ```

mod buffer;
mod constraints;
mod cursor;
mod history;
mod state;

pub use buffer::{RopeBuffer, StringBuffer, TextBuffer, TextBufferMut};
pub use constraints::{CharFilter, EditConstraints};
pub use cursor::{Cursor, Position, Selection};
pub use history::{EditHistory, EditOperation};
pub use state::EditableState;
