//! DOM-free model of the configuration tab panel.
//!
//! Everything here compiles and is tested natively; the browser crate
//! only supplies a `TabGroupView` backed by web-sys elements.

pub mod tab_panel;
