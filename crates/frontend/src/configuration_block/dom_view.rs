//! `TabGroupView` over the real list: `ul > li > (em + div)`.

use contracts::tab_panel::layout::{px, ContentHeight};
use contracts::tab_panel::TabGroupView;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, MouseEvent};

/// One `li` and its content `div`. An item without a `div` still takes part in
/// selection, it just has nothing to expand.
pub struct DomTabItem {
    pub item: HtmlElement,
    pub content: Option<HtmlElement>,
}

pub struct DomTabGroup {
    list: HtmlElement,
    items: Vec<DomTabItem>,
    /// First `li` of the list, labelled or not; its height is the collapsed row.
    first_row: Option<HtmlElement>,
    active_class: String,
    // Header click listeners; dropping the group detaches them.
    listeners: Vec<Closure<dyn FnMut(MouseEvent)>>,
}

impl DomTabGroup {
    pub fn new(
        list: HtmlElement,
        items: Vec<DomTabItem>,
        first_row: Option<HtmlElement>,
        active_class: &str,
    ) -> Self {
        Self {
            list,
            items,
            first_row,
            active_class: active_class.to_string(),
            listeners: Vec::new(),
        }
    }

    pub fn keep_listener(&mut self, listener: Closure<dyn FnMut(MouseEvent)>) {
        self.listeners.push(listener);
    }
}

fn set_height(element: &HtmlElement, value: &str) {
    let _ = element.style().set_property("height", value);
}

impl TabGroupView for DomTabGroup {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn collapse_content(&mut self, index: usize) {
        if let Some(content) = self.items.get(index).and_then(|i| i.content.as_ref()) {
            set_height(content, ContentHeight::Collapsed.css_value());
        }
    }

    fn set_active(&mut self, index: usize, active: bool) {
        let Some(entry) = self.items.get(index) else {
            return;
        };
        let classes = entry.item.class_list();
        let _ = if active {
            classes.add_1(&self.active_class)
        } else {
            classes.remove_1(&self.active_class)
        };
    }

    fn expand_content(&mut self, index: usize) -> f64 {
        let Some(content) = self.items.get(index).and_then(|i| i.content.as_ref()) else {
            return 0.0;
        };
        set_height(content, ContentHeight::Natural.css_value());
        // offsetHeight forces layout, so the value reflects the `auto` height just set
        content.offset_height() as f64
    }

    fn header_row_height(&self) -> f64 {
        self.first_row
            .as_ref()
            .or_else(|| self.items.first().map(|entry| &entry.item))
            .map(|row| row.offset_height() as f64)
            .unwrap_or(0.0)
    }

    fn set_group_height(&mut self, height: f64) {
        set_height(&self.list, &px(height));
    }
}
