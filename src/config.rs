//! Panel Config Loading
//!
//! Reads the optional `<script id="panel-config" type="application/json">`
//! block from the host page.

use payments_core::PanelConfig;

const CONFIG_ELEMENT_ID: &str = "panel-config";

/// Page config, or the defaults when it is absent or invalid
pub fn load() -> PanelConfig {
    let Some(text) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
    else {
        return PanelConfig::default();
    };

    parse_or_default(&text)
}

fn parse_or_default(text: &str) -> PanelConfig {
    if text.trim().is_empty() {
        return PanelConfig::default();
    }
    match PanelConfig::from_json_str(text) {
        Ok(config) => config,
        Err(err) => {
            web_sys::console::error_1(&format!("[Config] using defaults: {err}").into());
            PanelConfig::default()
        }
    }
}
