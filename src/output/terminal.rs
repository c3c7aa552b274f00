//! Terminal renderer: styled flowing text, one line per row.
//!
//! Interprets the declarative view tree for interactive use — no tables,
//! indentation mirrors the nesting of the record.

use colored::Colorize;

use crate::output::ViewRenderer;
use crate::view::{Control, Node, View};

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer;

impl ViewRenderer for TerminalRenderer {
    fn render(&self, view: &View) -> String {
        let mut output = String::new();
        for node in &view.nodes {
            render_node(&mut output, node, 1);
        }
        output.push('\n');
        output
    }
}

fn render_node(output: &mut String, node: &Node, depth: usize) {
    let pad = "  ".repeat(depth);
    match node {
        Node::Heading { text } => {
            output.push_str(&format!("\n {}\n\n", text.bold()));
        }
        Node::SubHeading { text } => {
            output.push_str(&format!("\n{pad}{}\n", text.cyan().bold()));
        }
        Node::Row { label, value } => {
            output.push_str(&format!("{pad}{} {value}\n", format!("{label}:").dimmed()));
        }
        Node::Section { label, children } => {
            output.push_str(&format!("{pad}{}\n", format!("{label}:").dimmed()));
            for child in children {
                render_node(output, child, depth + 1);
            }
        }
        Node::Field { label, value, spec } => {
            let constraint = match (spec.max_len, spec.read_only) {
                (_, true) => format!("[{}, read-only]", spec.kind),
                (Some(max), false) => format!("[{}, max {max}]", spec.kind),
                (None, false) => format!("[{}]", spec.kind),
            };
            output.push_str(&format!(
                "{pad}{} {} {value}\n",
                format!("{label}:").dimmed(),
                constraint.dimmed(),
            ));
        }
        Node::Card { children } => {
            for child in children {
                render_node(output, child, depth);
            }
            output.push('\n');
        }
        Node::Rule => {
            output.push_str(&format!("{pad}{}\n", "────────────────────".dimmed()));
        }
        Node::Controls { controls } => {
            let actions: Vec<String> = controls.iter().map(control_text).collect();
            output.push_str(&format!(
                "{pad}{} {}\n",
                "→".cyan(),
                actions.join(" · ").dimmed(),
            ));
        }
        Node::Notice { text } => {
            output.push_str(&format!("\n   {}\n", text.bold()));
        }
    }
}

fn control_text(control: &Control) -> String {
    match control {
        Control::Edit { id } => format!("edit {id}"),
        Control::Delete { id } => format!("delete {id}"),
        Control::Submit { .. } => "submit".to_string(),
        Control::Cancel => "cancel".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{edit_view, error_view, list_view};
    use serde_json::json;

    fn users() -> Vec<crate::models::User> {
        vec![serde_json::from_value(json!({
            "id": 1,
            "name": "Leanne Graham",
            "address": { "geo": { "lat": "-37.3159" } }
        }))
        .unwrap()]
    }

    #[test]
    fn render_list() {
        let output = TerminalRenderer.render(&list_view(&users()));
        // Content is present (may be wrapped in ANSI color codes).
        assert!(output.contains("Users"));
        assert!(output.contains("Leanne Graham"));
        assert!(output.contains("-37.3159"));
        assert!(output.contains("edit 1"));
        assert!(output.contains("delete 1"));
    }

    #[test]
    fn render_edit_shows_constraints() {
        let users = users();
        let output = TerminalRenderer.render(&edit_view(1, &users[0]));
        assert!(output.contains("Edit id=1"));
        assert!(output.contains("General user information"));
        assert!(output.contains("read-only"));
        assert!(output.contains("max 40"));
        assert!(output.contains("submit"));
        assert!(output.contains("cancel"));
    }

    #[test]
    fn render_error() {
        let output = TerminalRenderer.render(&error_view("Error 404. Not found."));
        assert!(output.contains("Ops! Error 404. Not found."));
    }

    #[test]
    fn render_is_deterministic() {
        let users = users();
        let view = list_view(&users);
        assert_eq!(TerminalRenderer.render(&view), TerminalRenderer.render(&view));
    }
}
