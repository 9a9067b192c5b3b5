//! Export functionality for keyboard layers.
//!
//! Currently limited to text diagrams of panel layouts, used by the
//! `preview` CLI command.

pub mod panel_diagram;

pub use panel_diagram::{render_layer_diagram, render_panel_diagram};
