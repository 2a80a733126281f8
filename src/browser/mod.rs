//! Browser Bindings
//!
//! Implementations of the core seams on top of Web APIs, organized by concern.

mod config;
mod download;
mod gif;
mod location;
mod share;
mod storage;

pub use config::load_config;
pub use download::BlobDownload;
pub use gif::CatApiProvider;
pub use location::{current_location, take_launch_gif_id};
pub use share::NavigatorShare;
pub use storage::BrowserStorage;

/// Blocking browser alert (used for the clipboard fallback confirmation)
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
