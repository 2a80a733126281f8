//! Config Loading
//!
//! Optional JSON override embedded in the page:
//! `<script id="purrfect-config" type="application/json">{...}</script>`

use purrfect_core::AppConfig;

const CONFIG_ELEMENT_ID: &str = "purrfect-config";

/// Page override on top of defaults; a broken override falls back to defaults
pub fn load_config() -> AppConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw.as_deref().map(str::trim) {
        None | Some("") => AppConfig::default(),
        Some(json) => AppConfig::from_json(json).unwrap_or_else(|e| {
            log::warn!("[CONFIG] Ignoring page config: {}", e);
            AppConfig::default()
        }),
    }
}
