//! Превращает разметку `.configuration-block ul > li > em + div` в панель табов.
//!
//! Каждый `em` заменяется ссылкой с тем же текстом, клик по ссылке делает
//! свой `li` активным. После обработки всех групп в каждой новой группе
//! активируется первый таб.

use super::dom_view::{DomTabGroup, DomTabItem};
use contracts::tab_panel::{GroupId, SharedGroup, TabPanel, TabPanelConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

/// Marks a list that already has generated headers.
pub const READY_ATTRIBUTE: &str = "data-cfg-tabs";

// Groups live for the page lifetime, like their click listeners.
thread_local! {
    static PANEL: RefCell<TabPanel<DomTabGroup>> = RefCell::new(TabPanel::new());
}

/// Enhance every tab list in the document and activate the first tab of each.
/// Returns the number of newly enhanced groups.
pub fn initialize(document: &Document, config: &TabPanelConfig) -> usize {
    let Ok(lists) = document.query_selector_all(&config.list_selector()) else {
        return 0;
    };

    let mut enhanced = 0;
    for i in 0..lists.length() {
        let Some(list) = lists.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        if register_list(document, &list, config).is_some() {
            enhanced += 1;
        }
    }

    let started = PANEL.with(|panel| panel.borrow().start_pending());
    if enhanced > 0 {
        log::debug!(
            "config tabs: {} group(s) enhanced, {} started",
            enhanced,
            started
        );
    }
    enhanced
}

/// Enhance a single list and activate its first tab. Used by the Leptos
/// component, which owns its list element directly and must [`release`] the
/// returned group when the list is unmounted.
pub fn enhance_list(list: &HtmlElement, config: &TabPanelConfig) -> Option<GroupId> {
    let document = list.owner_document()?;
    let group_id = register_list(&document, list, config)?;
    PANEL.with(|panel| panel.borrow().start_pending());
    Some(group_id)
}

/// Forget a group whose list has left the page. Its header listeners are
/// dropped together with it.
pub fn release(group_id: GroupId) {
    let _ = PANEL.with(|panel| panel.borrow_mut().unregister(group_id));
}

/// Programmatic selection; `None` if the group or the index does not exist.
pub fn activate(group_id: GroupId, index: usize) -> Option<f64> {
    PANEL.with(|panel| panel.borrow().activate(group_id, index).ok())
}

fn register_list(
    document: &Document,
    list: &HtmlElement,
    config: &TabPanelConfig,
) -> Option<GroupId> {
    if list.has_attribute(READY_ATTRIBUTE) {
        return None;
    }

    let mut items = Vec::new();
    let mut headers = Vec::new();
    let mut first_row = None;
    let children = list.children();
    for i in 0..children.length() {
        let Some(li) = children.item(i) else { continue };
        if !li.tag_name().eq_ignore_ascii_case("li") {
            continue;
        }
        if first_row.is_none() {
            first_row = li.clone().dyn_into::<HtmlElement>().ok();
        }
        let Some(label) = first_child_by_tag(&li, "em") else {
            continue;
        };
        let Some(header) = build_header(document, &label, config) else {
            continue;
        };
        let Ok(item) = li.dyn_into::<HtmlElement>() else {
            continue;
        };
        let content = first_child_by_tag(&item, "div").and_then(|d| d.dyn_into::<HtmlElement>().ok());

        headers.push(header);
        items.push(DomTabItem { item, content });
    }

    let view = DomTabGroup::new(list.clone(), items, first_row, &config.active_class);
    let group = PANEL.with(|panel| panel.borrow_mut().register(view))?;

    for (index, header) in headers.iter().enumerate() {
        wire_header(header, &group, index);
    }
    let _ = list.set_attribute(READY_ATTRIBUTE, "ready");
    let group_id = group.borrow().id();
    Some(group_id)
}

/// Replace the label's contents with an anchor carrying the same text.
fn build_header(document: &Document, label: &Element, config: &TabPanelConfig) -> Option<Element> {
    let title = label.text_content().unwrap_or_default();
    let anchor = document.create_element("a").ok()?;
    anchor.set_class_name(&config.header_class);
    let _ = anchor.set_attribute("href", &config.header_href);
    anchor.set_text_content(Some(&title));

    label.set_text_content(None);
    label.append_child(&anchor).ok()?;
    Some(anchor)
}

fn wire_header(header: &Element, group: &SharedGroup<DomTabGroup>, index: usize) {
    // Weak: the group owns this closure, a strong handle would keep both alive.
    let weak = Rc::downgrade(group);
    let on_click = Closure::wrap(Box::new(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(group) = weak.upgrade() {
            let _ = group.borrow_mut().activate(index);
        }
    }) as Box<dyn FnMut(MouseEvent)>);

    let _ = header.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    group.borrow_mut().view_mut().keep_listener(on_click);
}

fn first_child_by_tag(parent: &Element, tag: &str) -> Option<Element> {
    let children = parent.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .find(|child| child.tag_name().eq_ignore_ascii_case(tag))
}
