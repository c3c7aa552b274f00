//! JSON view renderer.
//!
//! Serializes the declarative view tree as-is, which keeps the structure
//! inspectable and scriptable (`roster list --format json`).

use crate::output::ViewRenderer;
use crate::view::View;

/// JSON output renderer.
pub struct JsonRenderer;

impl ViewRenderer for JsonRenderer {
    fn render(&self, view: &View) -> String {
        serde_json::to_string_pretty(view).unwrap_or_else(|_| "{}".to_string())
    }
}
