//! View renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::view::View;

/// Trait for rendering a view tree to an output format.
pub trait ViewRenderer {
    /// Render the view to a string.
    fn render(&self, view: &View) -> String;
}
