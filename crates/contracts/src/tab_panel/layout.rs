//! Pure rendering of a group state into per-item layout.

use super::state::TabGroupState;

/// Inline height of a content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentHeight {
    /// `0px`
    Collapsed,
    /// `auto`: sized to its content.
    Natural,
}

impl ContentHeight {
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Collapsed => "0px",
            Self::Natural => "auto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemLayout {
    pub active: bool,
    pub content: ContentHeight,
}

/// Layout of every item in the group, in item order.
pub fn render(state: &TabGroupState) -> Vec<ItemLayout> {
    (0..state.len())
        .map(|index| {
            let active = state.is_active(index);
            ItemLayout {
                active,
                content: if active {
                    ContentHeight::Natural
                } else {
                    ContentHeight::Collapsed
                },
            }
        })
        .collect()
}

/// Collapsed rows contribute only their header height; the active row adds its content.
pub fn group_height(header_row: f64, natural_content: f64) -> f64 {
    header_row + natural_content
}

/// Format a pixel length for an inline style, e.g. `120px`.
pub fn px(value: f64) -> String {
    format!("{}px", value)
}
