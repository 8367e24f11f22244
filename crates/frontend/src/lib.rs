pub mod configuration_block;

use contracts::tab_panel::GroupId;
use wasm_bindgen::prelude::wasm_bindgen;

pub use configuration_block::{ConfigTab, ConfigurationBlock};

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    configuration_block::run_when_ready();
}

/// Select a tab from page scripts. Returns `false` for an unknown group or index.
#[wasm_bindgen(js_name = activateConfigTab)]
pub fn activate_config_tab(group: usize, index: usize) -> bool {
    configuration_block::initializer::activate(GroupId(group), index).is_some()
}
