use contracts::tab_panel::TabPanelConfig;
use wasm_bindgen::JsValue;

/// Global object the page may define before the script loads.
pub const CONFIG_GLOBAL: &str = "configTabs";

/// Read `window.configTabs`, falling back to defaults when it is absent or invalid.
pub fn load() -> TabPanelConfig {
    let Some(window) = web_sys::window() else {
        return TabPanelConfig::default();
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    from_js(value)
}

fn from_js(value: JsValue) -> TabPanelConfig {
    if value.is_undefined() || value.is_null() {
        return TabPanelConfig::default();
    }
    let config = match serde_wasm_bindgen::from_value::<TabPanelConfig>(value) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("config tabs: ignoring window.{}: {}", CONFIG_GLOBAL, e);
            return TabPanelConfig::default();
        }
    };
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("config tabs: ignoring window.{}: {}", CONFIG_GLOBAL, e);
            TabPanelConfig::default()
        }
    }
}
