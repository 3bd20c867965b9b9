//! Venue Delete Trigger Entry Point

use log::LevelFilter;
use wasm_bindgen::JsValue;
use venue_delete_ui::{console, mount, DeleteTrigger, TriggerConfig};

/// Optional page-provided overrides, e.g. `window.VENUE_DELETE_CONFIG = { homePath: "/venues" }`
const CONFIG_GLOBAL: &str = "VENUE_DELETE_CONFIG";

fn main() {
    console_error_panic_hook::set_once();
    console::init(LevelFilter::Debug);

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        log::error!("No document, delete trigger not mounted");
        return;
    };

    let trigger = DeleteTrigger::browser(read_config(&window));
    if let Some(listener) = mount(&document, &trigger) {
        listener.forget();
    }
}

fn read_config(window: &web_sys::Window) -> TriggerConfig {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    TriggerConfig::from_js(value).unwrap_or_else(|e| {
        log::warn!("Ignoring invalid {}: {}", CONFIG_GLOBAL, e);
        TriggerConfig::default()
    })
}
