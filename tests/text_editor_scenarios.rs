//! End-to-end editor scenarios against the simulated workbench

mod common;

use common::{bench, bench_with};
use editor_pilot::config::CursorRestore;
use editor_pilot::io::MockWorkbench;
use editor_pilot::{Clipboard, Coordinate, Key, KeyInput, Modifier, PilotError};

#[test]
fn test_move_cursor_then_read_coordinates() {
    let mock = MockWorkbench::new().with_text("use std::io;\n\nfn main() {\n    run();\n}");
    let bench = bench(&mock);
    let editor = bench.text_editor().unwrap();

    for (line, column) in [(4, 5), (2, 1), (1, 13), (5, 2), (3, 4)] {
        editor.move_cursor(line, column).unwrap();
        assert_eq!(
            editor.coordinates().unwrap(),
            Coordinate::new(line, column),
            "after move_cursor({line}, {column})"
        );
    }
}

#[test]
fn test_line_bounds_apply_to_move_get_and_set() {
    let mock = MockWorkbench::new().with_text("a\nb\nc");
    let bench = bench(&mock);
    let editor = bench.text_editor().unwrap();

    for line in [0, 4] {
        assert!(matches!(
            editor.move_cursor(line, 1),
            Err(PilotError::LineOutOfRange { .. })
        ));
        assert!(matches!(
            editor.text_at_line(line),
            Err(PilotError::LineOutOfRange { .. })
        ));
        assert!(matches!(
            editor.set_text_at_line(line, "z"),
            Err(PilotError::LineOutOfRange { .. })
        ));
    }
    assert_eq!(mock.buffer_text(), "a\nb\nc");
}

#[test]
fn test_column_below_one_is_rejected() {
    let mock = MockWorkbench::new().with_text("abc");
    let bench = bench(&mock);

    let result = bench.text_editor().unwrap().move_cursor(1, 0);
    assert!(matches!(result, Err(PilotError::ColumnOutOfRange { column: 0 })));
}

#[test]
fn test_set_text_then_get_text_returns_same_content() {
    let mock = MockWorkbench::new();
    let bench = bench(&mock);
    let editor = bench.text_editor().unwrap();

    for content in ["", "single", "two\nlines", "trailing newline\n", "\n\n"] {
        editor.set_text(content, false).unwrap();
        assert_eq!(editor.get_text().unwrap(), content);
    }
}

#[test]
fn test_column_past_short_line_is_unreachable() {
    let mock = MockWorkbench::new().with_text("ab\ncde\n");
    let bench = bench(&mock);
    let editor = bench.text_editor().unwrap();

    let error = editor.move_cursor(1, 5).unwrap_err();
    assert!(matches!(
        error,
        PilotError::ColumnUnreachable { line: 1, column: 5 }
    ));
    assert_eq!(
        error.to_string(),
        "Column number 5 is not accessible on line 1"
    );
}

#[test]
fn test_set_text_at_line_keeps_neighbours() {
    let mock = MockWorkbench::new().with_text("first\nsecond\nthird");
    let bench = bench(&mock);
    let editor = bench.text_editor().unwrap();

    editor.set_text_at_line(2, "xyz").unwrap();

    assert_eq!(editor.text_at_line(1).unwrap(), "first");
    assert_eq!(editor.text_at_line(2).unwrap(), "xyz");
    assert_eq!(editor.text_at_line(3).unwrap(), "third");
    assert_eq!(editor.number_of_lines().unwrap(), 3);
}

#[test]
fn test_get_text_restores_cursor_position() {
    let mock = MockWorkbench::new().with_text("alpha\nbe\ngamma delta");
    let bench = bench(&mock);
    let editor = bench.text_editor().unwrap();
    editor.move_cursor(3, 7).unwrap();

    editor.get_text().unwrap();

    assert_eq!(editor.coordinates().unwrap(), Coordinate::new(3, 7));
}

#[test]
fn test_nudge_mode_only_moves_up_once() {
    let mock = MockWorkbench::new().with_text("alpha\nbe\ngamma delta");
    mock.set_cursor(Coordinate::new(1, 2));
    let bench = bench_with(&mock, CursorRestore::Nudge);

    bench.text_editor().unwrap().get_text().unwrap();

    // Select-all left the cursor at 3:12; one UP lands on the short line 2
    assert_eq!(mock.cursor(), Coordinate::new(2, 3));
}

#[test]
fn test_type_text_and_save() {
    let mock = MockWorkbench::new().with_text("fn main() {\n}");
    let bench = bench(&mock);
    let editor = bench.text_editor().unwrap();

    editor.type_text(1, 12, "\n    todo!();").unwrap();
    assert!(editor.is_dirty().unwrap());
    assert_eq!(editor.get_text().unwrap(), "fn main() {\n    todo!();\n}");

    editor.save().unwrap();
    assert!(!editor.is_dirty().unwrap());
    assert_eq!(
        mock.count_input(&KeyInput::chord(Modifier::Control, Key::Char('s'))),
        1
    );
}

#[test]
fn test_clear_text_leaves_single_empty_line() {
    let mock = MockWorkbench::new().with_text("one\ntwo\nthree");
    let bench = bench(&mock);
    let editor = bench.text_editor().unwrap();

    editor.clear_text().unwrap();

    assert_eq!(editor.number_of_lines().unwrap(), 1);
    assert_eq!(editor.get_text().unwrap(), "");
    // The full-text read replaced what clear_text copied
    assert_eq!(mock.clipboard().read_text().unwrap(), "");
}

#[test]
fn test_malformed_status_bar_fails_reads() {
    let mock = MockWorkbench::new()
        .with_text("x")
        .with_status_text("UTF-8");
    let bench = bench(&mock);

    match bench.status_bar().coordinates() {
        Err(PilotError::MalformedStatus(text)) => assert_eq!(text, "UTF-8"),
        other => panic!("Expected MalformedStatus, got {other:?}"),
    }
}
