//! Typed routes and browser-style history.
//!
//! Replaces string-keyed view dispatch with an explicit route enum: a path
//! resolves to exactly one of `Users`, `Edit { id }`, or `NotFound`, and
//! the edit id is a typed capture rather than shared regex state.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::UserId;

/// Matches any path whose tail is `edit?id=<digits>`.
static EDIT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*edit\?id=(\d+)$").unwrap());

/// A resolved navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The user list.
    Users,
    /// The edit form for one user.
    Edit { id: UserId },
    /// Anything else; rendered as a 404-equivalent view.
    NotFound { path: String },
}

impl Route {
    /// Resolve a navigation path. Total: every input maps to a route.
    pub fn parse(path: &str) -> Self {
        if let Some(caps) = EDIT_PATTERN.captures(path) {
            if let Ok(id) = caps[1].parse() {
                return Route::Edit { id };
            }
        }
        match path {
            "" | "users" => Route::Users,
            other => Route::NotFound {
                path: other.to_string(),
            },
        }
    }

    /// The canonical path recorded in history.
    pub fn path(&self) -> String {
        match self {
            Route::Users => "users".to_string(),
            Route::Edit { id } => format!("edit?id={id}"),
            Route::NotFound { path } => path.clone(),
        }
    }

    /// The history entry title.
    pub fn title(&self) -> String {
        match self {
            Route::Users => "Users".to_string(),
            Route::Edit { id } => format!("Edit userID: {id}"),
            Route::NotFound { .. } => "Not found".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Linear navigation history with a cursor, browser-style.
///
/// `push` drops any forward entries before appending; `back`/`forward`
/// only move the cursor.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<Route>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry, truncating anything ahead of the cursor.
    pub fn push(&mut self, route: Route) {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }
        self.entries.push(route);
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Move one entry back, if there is one.
    pub fn back(&mut self) -> Option<&Route> {
        let cursor = self.cursor?;
        if cursor == 0 {
            return None;
        }
        self.cursor = Some(cursor - 1);
        self.entries.get(cursor - 1)
    }

    /// Move one entry forward, if there is one.
    pub fn forward(&mut self) -> Option<&Route> {
        let cursor = self.cursor?;
        if cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor = Some(cursor + 1);
        self.entries.get(cursor + 1)
    }

    /// The entry under the cursor.
    pub fn current(&self) -> Option<&Route> {
        self.entries.get(self.cursor?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
