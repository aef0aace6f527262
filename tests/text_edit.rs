//! Text widget tests: editing, search, standard keys, events and focus

mod common;

use codepane::editable::EditConstraints;
use codepane::keys::{KeyCode, Keystroke, Modifiers};
use codepane::widget::{Anchor, HorizontalDirection, TextChange, TextEdit, TextUnit};
use codepane::WidgetEvent;
use common::{ctrl, edit_at, edit_with, press, type_text};

// ========================================================================
// Editing
// ========================================================================

#[test]
fn test_replace_and_remove_text() {
    let mut edit = edit_with("hello world");
    edit.replace_text(Anchor::Offset(0), Anchor::Offset(5), "HELLO");
    assert_eq!(edit.text(), "HELLO world");

    edit.remove_text(Anchor::Offset(5), Anchor::DocumentEnd);
    assert_eq!(edit.text(), "HELLO");
    assert!(edit.is_modified());
}

#[test]
fn test_insert_replaces_selection() {
    let mut edit = edit_with("one two three");
    edit.set_selection(Anchor::Offset(4), Anchor::Offset(7));
    assert_eq!(edit.selected_text(), "two");

    assert!(edit.insert_text("2"));
    assert_eq!(edit.text(), "one 2 three");
    assert!(!edit.has_selected_text());
    assert_eq!(edit.cursor_position(), 5);
}

#[test]
fn test_single_line_rejects_newlines() {
    let mut edit = TextEdit::with_constraints(EditConstraints::single_line());
    assert!(!edit.insert_text("a\nb"));
    assert_eq!(edit.text(), "");
    assert!(edit.insert_text("ab"));
    assert!(!press(&mut edit, KeyCode::Enter));
    assert_eq!(edit.text(), "ab");
}

#[test]
fn test_current_line_and_last_line() {
    let mut edit = edit_at("first\nsecond", 2);
    assert_eq!(edit.get_current_line(), "first");
    assert!(!edit.is_cursor_on_last_line());

    edit.set_cursor_position(Anchor::DocumentEnd);
    assert_eq!(edit.get_current_line(), "second");
    assert!(edit.is_cursor_on_last_line());
    assert!(edit.is_cursor_at_end());
}

#[test]
fn test_offset_inside_crlf_moves_to_next_line() {
    let edit = edit_at("ab\r\ncd", 3);
    assert_eq!(edit.cursor_position(), 4);
    assert_eq!(edit.get_current_line(), "cd");
}

#[test]
fn test_is_cursor_before() {
    let edit = edit_at("ab(cd", 2);
    assert!(edit.is_cursor_before(Anchor::Offset(2), 1));
    assert!(!edit.is_cursor_before(Anchor::Offset(1), 1));
    // Positions past the end never count
    assert!(!edit.is_cursor_before(Anchor::DocumentEnd, 1));
}

#[test]
fn test_move_and_extend_by_units() {
    let mut edit = edit_at("foo bar", 0);
    edit.move_cursor_to_next(TextUnit::Word, HorizontalDirection::Right);
    assert_eq!(edit.cursor_position(), 4);

    edit.extend_selection_to_next(TextUnit::Character, HorizontalDirection::Right);
    edit.extend_selection_to_next(TextUnit::Character, HorizontalDirection::Right);
    assert_eq!(edit.selected_text(), "ba");

    edit.clear_selection();
    assert!(!edit.has_selected_text());
}

#[test]
fn test_change_tracking() {
    let mut edit = edit_with("abc");
    edit.set_track_changes(true);
    edit.insert_text("d");
    edit.remove_text(Anchor::Offset(0), Anchor::Offset(1));
    edit.set_text("new");
    assert_eq!(
        edit.take_changes(),
        vec![
            TextChange::Splice {
                start: 3,
                removed: 0,
                inserted: 1
            },
            TextChange::Splice {
                start: 0,
                removed: 1,
                inserted: 0
            },
            TextChange::Reset,
        ]
    );
    assert!(edit.take_changes().is_empty());
}

// ========================================================================
// Search
// ========================================================================

#[test]
fn test_find_text_forward_wraps() {
    let mut edit = edit_at("foo bar foo", 0);
    assert!(edit.find_text("foo", false, true, false, false));
    assert_eq!(edit.state().selection_range(), 0..3);

    assert!(edit.find_text("foo", false, true, false, false));
    assert_eq!(edit.state().selection_range(), 8..11);

    assert!(edit.find_text("foo", false, true, false, false));
    assert_eq!(edit.state().selection_range(), 0..3);
}

#[test]
fn test_find_text_backward_wraps() {
    let mut edit = edit_with("foo bar foo");
    assert!(edit.find_text("foo", false, false, false, false));
    assert_eq!(edit.state().selection_range(), 8..11);

    assert!(edit.find_text("foo", false, false, false, false));
    assert_eq!(edit.state().selection_range(), 0..3);

    assert!(edit.find_text("foo", false, false, false, false));
    assert_eq!(edit.state().selection_range(), 8..11);
}

#[test]
fn test_find_text_options() {
    let mut edit = edit_at("Print printer print", 0);
    assert!(edit.find_text("print", false, true, true, true));
    assert_eq!(edit.selected_text(), "print");
    assert_eq!(edit.state().selection_range(), 14..19);

    assert!(!edit.find_text("missing", false, true, false, false));
    assert!(!edit.find_text("", false, true, false, false));
}

#[test]
fn test_find_text_changed_grows_current_match() {
    let mut edit = edit_at("pr print", 0);
    assert!(edit.find_text("pr", true, true, false, false));
    assert_eq!(edit.state().selection_range(), 0..2);

    // "pri" no longer matches at 0, so the search moves on to "print"
    assert!(edit.find_text("pri", true, true, false, false));
    assert_eq!(edit.state().selection_range(), 3..6);
}

// ========================================================================
// Standard keys
// ========================================================================

#[test]
fn test_delete_and_backspace() {
    let mut edit = edit_at("abc", 1);
    press(&mut edit, KeyCode::Delete);
    assert_eq!(edit.text(), "ac");
    press(&mut edit, KeyCode::Backspace);
    assert_eq!(edit.text(), "c");
    assert_eq!(edit.cursor_position(), 0);

    // Nothing before the cursor
    press(&mut edit, KeyCode::Backspace);
    assert_eq!(edit.text(), "c");
}

#[test]
fn test_tab_and_enter_insert_text() {
    let mut edit = edit_with("if x:");
    press(&mut edit, KeyCode::Enter);
    press(&mut edit, KeyCode::Tab);
    type_text(&mut edit, "pass");
    assert_eq!(edit.text(), "if x:\n    pass");
}

#[test]
fn test_up_down_with_shift() {
    let mut edit = edit_at("abc\ndef", 5);
    press(&mut edit, KeyCode::Up);
    assert_eq!(edit.cursor_position(), 1);

    edit.handle_key(&Keystroke::new(KeyCode::Down, Modifiers::SHIFT));
    assert_eq!(edit.selected_text(), "bc\nd");
}

#[test]
fn test_ctrl_left_moves_by_word() {
    let mut edit = edit_with("foo bar");
    edit.handle_key(&Keystroke::new(KeyCode::Left, Modifiers::CTRL));
    assert_eq!(edit.cursor_position(), 4);
}

#[test]
fn test_home_skips_prompt_on_console_line() {
    let mut edit = edit_with("Python\n>>> x = 1");
    edit.set_prompt(">>> ");
    press(&mut edit, KeyCode::Home);
    assert_eq!(edit.cursor_position(), 11);

    // Lines shorter than the prompt clamp to their end
    let mut edit = edit_with("ab");
    edit.set_prompt(">>> ");
    press(&mut edit, KeyCode::Home);
    assert_eq!(edit.cursor_position(), 2);
}

#[test]
fn test_command_keys() {
    let mut edit = edit_with("abc");
    assert!(edit.handle_key(&ctrl('a')));
    assert_eq!(edit.selected_text(), "abc");

    assert!(!edit.handle_key(&ctrl('q')));
    assert_eq!(edit.text(), "abc");
}

// ========================================================================
// Events
// ========================================================================

#[test]
fn test_undo_redo_events() {
    let mut edit = edit_with("");
    type_text(&mut edit, "x");
    assert_eq!(
        edit.take_events(),
        vec![
            WidgetEvent::ModificationChanged(true),
            WidgetEvent::UndoAvailable(true)
        ]
    );

    assert!(edit.handle_key(&ctrl('z')));
    assert_eq!(edit.text(), "");
    assert_eq!(
        edit.take_events(),
        vec![
            WidgetEvent::UndoAvailable(false),
            WidgetEvent::RedoAvailable(true)
        ]
    );

    assert!(edit.handle_key(&ctrl('y')));
    assert_eq!(edit.text(), "x");
    assert!(edit.is_undo_available());
    assert!(!edit.is_redo_available());
}

#[test]
fn test_set_text_clears_modified() {
    let mut edit = edit_with("a");
    edit.insert_text("b");
    edit.take_events();

    edit.set_text("fresh");
    assert!(!edit.is_modified());
    assert!(edit
        .take_events()
        .contains(&WidgetEvent::ModificationChanged(false)));
    assert!(!edit.is_undo_available());
}

#[test]
fn test_focus_events() {
    let mut edit = edit_with("os.pa");
    edit.focus_in();
    assert!(edit.has_focus());
    assert_eq!(
        edit.take_events(),
        vec![WidgetEvent::FocusChanged, WidgetEvent::FocusIn]
    );

    edit.show_completion_widget(vec!["path".to_string(), "pardir".to_string()]);
    edit.focus_out();
    assert!(!edit.has_focus());
    assert!(!edit.is_completion_widget_visible());
    assert_eq!(edit.take_events(), vec![WidgetEvent::FocusChanged]);
}

#[test]
fn test_cursor_rect_uses_cell_size() {
    let mut edit = edit_at("ab\ncd", 4);
    edit.set_cell_size(10.0, 20.0);
    edit.set_caret_width(3);
    let rect = edit.cursor_rect();
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (10.0, 20.0, 3.0, 20.0));
}
