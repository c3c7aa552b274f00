//! Snapshot tests for the view builders and the JSON renderer.
//!
//! Each test builds a view from a fixture user collection and compares
//! the rendered tree against an expected fixture file.

use roster::models::User;
use roster::output::json::JsonRenderer;
use roster::output::terminal::TerminalRenderer;
use roster::output::ViewRenderer;
use roster::view::{edit_view, list_view};

fn fixture_users() -> Vec<User> {
    let raw = std::fs::read_to_string("tests/fixtures/users.json").unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn expected(path: &str) -> serde_json::Value {
    let raw = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn snapshot_list_view() {
    let users = fixture_users();
    let output = JsonRenderer.render(&list_view(&users[..1]));
    let actual: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(
        actual,
        expected("tests/fixtures/expected_list_view.json"),
        "list view does not match snapshot.\nActual:\n{output}"
    );
}

#[test]
fn snapshot_edit_view() {
    let users = fixture_users();
    let output = JsonRenderer.render(&edit_view(1, &users[0]));
    let actual: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(
        actual,
        expected("tests/fixtures/expected_edit_view.json"),
        "edit view does not match snapshot.\nActual:\n{output}"
    );
}

#[test]
fn list_view_renders_every_fixture_user() {
    let users = fixture_users();
    let output = JsonRenderer.render(&list_view(&users));
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    let cards = parsed["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|n| n["kind"] == "card")
        .count();
    assert_eq!(cards, 2);
}

#[test]
fn rendering_twice_produces_identical_output() {
    let users = fixture_users();
    let view = list_view(&users);
    assert_eq!(JsonRenderer.render(&view), JsonRenderer.render(&view));
    assert_eq!(
        TerminalRenderer.render(&view),
        TerminalRenderer.render(&view)
    );
}

#[test]
fn terminal_render_contains_the_record_values() {
    let users = fixture_users();
    let output = TerminalRenderer.render(&list_view(&users));

    assert!(output.contains("Leanne Graham"));
    assert!(output.contains("Ervin Howell"));
    assert!(output.contains("-43.9509"));
    assert!(output.contains("edit 2"));
}
