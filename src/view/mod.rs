//! Declarative view trees.
//!
//! Views are plain data built from the store with no output concerns: a
//! renderer in `output` interprets the tree. Every build is a total
//! replacement, so rendering the same state twice yields the same tree.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::{FieldSpec, User, UserId};

/// One node of a view tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Page heading.
    Heading { text: String },
    /// Section heading inside the edit form.
    SubHeading { text: String },
    /// Read-only label/value pair in a list card.
    Row { label: String, value: String },
    /// Nested object in a list card: a labeled group of child rows.
    Section { label: String, children: Vec<Node> },
    /// Editable label/input pair with its constraints.
    Field {
        label: String,
        value: String,
        spec: FieldSpec,
    },
    /// One user's card in the list view.
    Card { children: Vec<Node> },
    /// Horizontal separator.
    Rule,
    /// Action buttons.
    Controls { controls: Vec<Control> },
    /// Centered message (error view).
    Notice { text: String },
}

/// An action offered by a view, carrying its target id where relevant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Control {
    Edit { id: UserId },
    Delete { id: UserId },
    Submit { id: UserId },
    Cancel,
}

/// A complete view: the history title plus the node tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub title: String,
    pub nodes: Vec<Node>,
}

/// The user list: a heading and one card per user, in store order.
pub fn list_view(users: &[User]) -> View {
    let mut nodes = vec![Node::Heading {
        text: "Users".to_string(),
    }];
    for user in users {
        let mut children = rows(user.fields());
        children.push(Node::Rule);
        if let Some(id) = user.id() {
            children.push(Node::Controls {
                controls: vec![Control::Edit { id }, Control::Delete { id }],
            });
        }
        nodes.push(Node::Card { children });
    }
    View {
        title: "Users".to_string(),
        nodes,
    }
}

/// The edit form for one user.
///
/// Nested objects are flattened depth-first with a sub-heading per object
/// rather than nested groups; every leaf carries its input constraints.
pub fn edit_view(id: UserId, user: &User) -> View {
    let mut nodes = vec![
        Node::Heading {
            text: format!("Edit id={id}"),
        },
        Node::SubHeading {
            text: "General user information".to_string(),
        },
    ];
    fields(user.fields(), &mut nodes);
    nodes.push(Node::Rule);
    nodes.push(Node::Controls {
        controls: vec![Control::Submit { id }, Control::Cancel],
    });
    View {
        title: format!("Edit userID: {id}"),
        nodes,
    }
}

/// A single centered message.
pub fn error_view(message: &str) -> View {
    View {
        title: "Error".to_string(),
        nodes: vec![Node::Notice {
            text: format!("Ops! {message}"),
        }],
    }
}

/// Depth-first label/value rows for the list card.
fn rows(fields: &Map<String, Value>) -> Vec<Node> {
    fields
        .iter()
        .map(|(key, value)| match value {
            Value::Object(child) => Node::Section {
                label: key.clone(),
                children: rows(child),
            },
            scalar => Node::Row {
                label: key.clone(),
                value: scalar_text(scalar),
            },
        })
        .collect()
}

/// Depth-first label/input rows for the edit form.
fn fields(object: &Map<String, Value>, out: &mut Vec<Node>) {
    for (key, value) in object {
        match value {
            Value::Object(child) => {
                out.push(Node::SubHeading { text: key.clone() });
                fields(child, out);
            }
            scalar => out.push(Node::Field {
                label: key.clone(),
                value: scalar_text(scalar),
                spec: FieldSpec::for_key(key),
            }),
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
