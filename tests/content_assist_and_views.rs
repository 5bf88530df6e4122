//! Suggestion popup, context menu and side bar sections

mod common;

use common::bench;
use editor_pilot::io::mock::FormatSupport;
use editor_pilot::io::MockWorkbench;
use editor_pilot::{Key, KeyInput, Modifier, PilotError};

#[test]
fn test_content_assist_opens_once() {
    let mock = MockWorkbench::new().with_suggestions(&["len", "lines"]);
    let bench = bench(&mock);
    let editor = bench.text_editor().unwrap();

    let first = editor.toggle_content_assist(true).unwrap();
    let second = editor.toggle_content_assist(true).unwrap();

    assert!(first.is_some() && second.is_some());
    assert_eq!(
        mock.count_input(&KeyInput::chord(Modifier::Control, Key::Space)),
        1
    );
}

#[test]
fn test_pick_suggestion_by_exact_label() {
    let mock = MockWorkbench::new()
        .with_text("s.")
        .with_suggestions(&["lines", "len"]);
    let bench = bench(&mock);
    let editor = bench.text_editor().unwrap();
    editor.move_cursor(1, 3).unwrap();

    let assist = editor.toggle_content_assist(true).unwrap().unwrap();
    assert_eq!(assist.items().unwrap().len(), 2);
    assert!(matches!(
        assist.item("li"),
        Err(PilotError::ItemNotFound { .. })
    ));

    assist.item("len").unwrap().select().unwrap();

    assert_eq!(editor.get_text().unwrap(), "s.len");
    assert!(editor.toggle_content_assist(false).unwrap().is_none());
}

#[test]
fn test_format_document_on_supported_buffer() {
    let mock = MockWorkbench::new();
    let bench = bench(&mock);
    let editor = bench.text_editor().unwrap();

    editor.set_text("let a = 1;  \nlet b = 2;\t", true).unwrap();

    assert_eq!(editor.get_text().unwrap(), "let a = 1;\nlet b = 2;");
}

#[test]
fn test_format_document_on_unsupported_buffer_succeeds() {
    let mock = MockWorkbench::new().with_format_support(FormatSupport::Disabled);
    let bench = bench(&mock);
    let editor = bench.text_editor().unwrap();

    editor.set_text("plain text  ", true).unwrap();

    assert_eq!(mock.buffer_text(), "plain text  ");
    assert!(!mock.is_menu_open());
}

#[test]
fn test_file_path_of_open_editor() {
    let mock = MockWorkbench::new().with_file_uri("file:///home/dev/project/src/lib.rs");
    let bench = bench(&mock);

    let path = bench.text_editor().unwrap().file_path().unwrap();

    assert!(path.ends_with("project/src/lib.rs"));
}

#[test]
fn test_find_tree_item_within_level() {
    let mock = MockWorkbench::new().with_section(
        "Explorer",
        &[("project", 1), ("src", 2), ("lib.rs", 3), ("Cargo.toml", 2)],
    );
    let bench = bench(&mock);
    let section = bench.view_section("explorer").unwrap();
    assert_eq!(section.title(), "Explorer");

    assert!(section.find_item("lib.rs", 2).unwrap().is_none());

    let item = section.find_item("lib", 3).unwrap().unwrap();
    assert_eq!(item.label(), "lib.rs");
    assert_eq!(item.level(), 3);
    assert!(!item.is_expanded().unwrap());

    item.select().unwrap();
    assert_eq!(mock.clicks().last().map(String::as_str), Some("tree-row-0-2"));
}

#[test]
fn test_missing_section_is_reported() {
    let mock = MockWorkbench::new();
    let bench = bench(&mock);

    match bench.view_section("Outline") {
        Err(PilotError::ItemNotFound { label }) => assert_eq!(label, "Outline"),
        Err(e) => panic!("Expected ItemNotFound, got {e}"),
        Ok(section) => panic!("Unexpected section '{}'", section.title()),
    }
}
