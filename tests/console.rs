//! Console view tests: styled output, prompt handling and selection limits

use codepane::config::ConsoleConfig;
use codepane::console::{ConsoleStyle, ConsoleView, StyledRun};
use codepane::keys::{KeyCode, Keystroke};
use codepane::style::{Color, FontSpec, TextStyle};
use codepane::widget::Anchor;
use codepane::EditorConfig;

fn console_with_prompt() -> ConsoleView {
    let mut console = ConsoleView::new();
    console.append_text("Out: 1\n", false, false);
    console.append_text(">>> ", false, true);
    console.set_prompt(">>> ");
    console
}

#[test]
fn test_error_output_without_traceback() {
    let mut console = ConsoleView::new();
    console.append_text("oops\n", true, false);
    assert_eq!(
        console.styled_runs(),
        vec![StyledRun {
            range: 0..5,
            style: ConsoleStyle::Error
        }]
    );
}

#[test]
fn test_traceback_runs() {
    let mut console = ConsoleView::new();
    console.append_text("  File \"a.py\", line 3\nValueError\n", true, false);

    let runs = console.styled_runs();
    assert_eq!(runs.len(), 3);
    assert_eq!(
        runs[0],
        StyledRun {
            range: 0..2,
            style: ConsoleStyle::Default
        }
    );
    assert_eq!(runs[1].style, ConsoleStyle::TracebackLink);
    assert_eq!(runs[2].style, ConsoleStyle::Error);
    assert_eq!(runs[1].range.end, runs[2].range.start);
}

#[test]
fn test_output_appends_at_end_regardless_of_cursor() {
    let mut console = console_with_prompt();
    console.with_edit(|edit| edit.set_cursor_position(Anchor::Offset(0)));
    console.append_text("more\n", false, false);
    assert_eq!(console.text(), "Out: 1\n>>> more\n");
    assert!(console.edit().is_cursor_at_end());
}

#[test]
fn test_typed_input_after_prompt() {
    let mut console = console_with_prompt();
    for ch in "1+1".chars() {
        console.handle_key(&Keystroke::char(ch));
    }
    assert_eq!(console.text(), "Out: 1\n>>> 1+1");
    assert_eq!(console.style_at(10), Some(ConsoleStyle::Prompt));
    assert_eq!(console.style_at(11), Some(ConsoleStyle::Default));

    console.handle_key(&Keystroke::key(KeyCode::Home));
    assert_eq!(console.edit().cursor_position(), 11);
}

#[test]
fn test_backspace_keeps_styles_aligned() {
    let mut console = console_with_prompt();
    console.insert_text("ab");
    console.handle_key(&Keystroke::key(KeyCode::Backspace));
    assert_eq!(console.text(), "Out: 1\n>>> a");
    assert_eq!(console.style_at(11), Some(ConsoleStyle::Default));
    assert_eq!(console.style_at(12), None);
}

#[test]
fn test_truncate_selection_stops_at_prompt() {
    let mut console = console_with_prompt();
    console.insert_text("x = 1");
    console.set_selection(Anchor::Offset(2), Anchor::DocumentEnd);
    console.truncate_selection(Anchor::Offset(11));
    assert_eq!(console.edit().selected_text(), "x = 1");

    // No selection: nothing to do
    console.with_edit(|edit| edit.clear_selection());
    console.truncate_selection(Anchor::Offset(11));
    assert!(!console.edit().has_selected_text());
}

#[test]
fn test_truncate_reversed_selection_keeps_cursor_at_end() {
    let mut console = console_with_prompt();
    console.insert_text("x = 1");
    console.set_selection(Anchor::Offset(12), Anchor::Offset(2));
    console.truncate_selection(Anchor::Offset(4));

    assert_eq!(console.edit().state().selection_range(), 4..12);
    assert_eq!(console.edit().cursor_position(), 12);
}

#[test]
fn test_restrict_cursor_position() {
    let mut console = console_with_prompt();
    console.insert_text("abc");
    console.with_edit(|edit| edit.set_cursor_position(Anchor::Offset(12)));
    console.restrict_cursor_position(Anchor::Offset(11), Anchor::DocumentEnd);
    assert_eq!(console.edit().cursor_position(), 12);

    console.with_edit(|edit| edit.set_cursor_position(Anchor::Offset(3)));
    console.restrict_cursor_position(Anchor::Offset(11), Anchor::DocumentEnd);
    assert_eq!(console.edit().cursor_position(), 14);
}

#[test]
fn test_paste_text_replaces_selection() {
    let mut console = console_with_prompt();
    console.insert_text("abc");
    console.set_selection(Anchor::Offset(12), Anchor::Offset(13));
    console.paste_text("XY");
    assert_eq!(console.text(), "Out: 1\n>>> aXYc");
    assert_eq!(console.style_at(13), Some(ConsoleStyle::Default));
}

#[test]
fn test_set_text_resets_styles() {
    let mut console = console_with_prompt();
    console.with_edit(|edit| edit.set_text("fresh"));
    assert_eq!(
        console.styled_runs(),
        vec![StyledRun {
            range: 0..5,
            style: ConsoleStyle::Default
        }]
    );
}

#[test]
fn test_palette_from_config() {
    let mut config = EditorConfig::default();
    config.console.error = TextStyle::plain(Color::rgb(0xCC, 0, 0)).bold();
    let console = ConsoleView::with_config(&config);
    assert_eq!(console.style(ConsoleStyle::Error).foreground, Color::rgb(0xCC, 0, 0));
    assert!(console.style(ConsoleStyle::Error).bold);
    assert!(console.style(ConsoleStyle::TracebackLink).underline);
}

#[test]
fn test_font_shared_by_all_styles() {
    let mut console = ConsoleView::new();
    let font = FontSpec {
        family: "Fira Code".to_string(),
        point_size: 12.0,
        ..FontSpec::default()
    };
    console.set_font(font.clone());
    assert_eq!(console.font(), &font);

    console.set_palette(ConsoleConfig::default());
    assert_eq!(console.font().family, "Monospace");
}
