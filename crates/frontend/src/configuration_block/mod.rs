//! Configuration block tabs
//!
//! - `initializer` - обработка статической разметки страницы
//! - `dom_view` - `TabGroupView` поверх элементов web-sys
//! - `config` - чтение `window.configTabs`
//! - `component` - Leptos-компонент с той же разметкой

pub mod component;
pub mod config;
pub mod dom_view;
pub mod initializer;

pub use component::{ConfigTab, ConfigurationBlock};
pub use initializer::{enhance_list, initialize};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Run the initializer now if the document is parsed, otherwise on `DOMContentLoaded`.
pub fn run_when_ready() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() != "loading" {
        initialize(&document, &config::load());
        return;
    }

    let on_ready = Closure::once_into_js(move || {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            initialize(&document, &config::load());
        }
    });
    let _ = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
}
