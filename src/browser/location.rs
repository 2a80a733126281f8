//! Address Bar
//!
//! Reads the page location and consumes a shared `gifId` from it.

use purrfect_core::{take_gif_id, GifId};
use wasm_bindgen::JsValue;

/// Origin and path used to build share links
#[derive(Debug, Clone, Default)]
pub struct PageLocation {
    pub origin: String,
    pub path: String,
}

pub fn current_location() -> PageLocation {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return PageLocation::default();
    };
    PageLocation {
        origin: location.origin().unwrap_or_default(),
        path: location.pathname().unwrap_or_else(|_| "/".to_string()),
    }
}

/// Take the `gifId` the app was launched with and drop it from the visible URL
pub fn take_launch_gif_id() -> Option<GifId> {
    let window = web_sys::window()?;
    let location = window.location();
    let search = location.search().ok()?;
    let (gif_id, rest) = take_gif_id(&search);

    if let Some(id) = &gif_id {
        let path = location.pathname().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        let cleaned = format!("{}{}{}", path, rest, hash);
        log::info!("[APP] Launched with shared GIF {}", id);
        match window.history() {
            Ok(history) => {
                if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&cleaned)) {
                    log::warn!("[APP] Could not clean address bar: {:?}", e);
                }
            }
            Err(e) => log::warn!("[APP] History unavailable: {:?}", e),
        }
    }
    gif_id
}
