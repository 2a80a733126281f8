//! Download Binding
//!
//! Fetches the GIF bytes, wraps them in a same-origin blob URL and clicks a
//! temporary `<a download>` element. Cross-origin links would ignore the
//! `download` attribute, so the bytes have to arrive before anything is saved.

use async_trait::async_trait;
use purrfect_core::{FileSaver, SaveError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, HtmlAnchorElement, Url};

pub struct BlobDownload;

#[async_trait(?Send)]
impl FileSaver for BlobDownload {
    async fn save(&self, url: &str, filename: &str) -> Result<(), SaveError> {
        let bytes = reqwest::get(url)
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| SaveError(format!("fetching {} failed: {}", url, e)))?
            .bytes()
            .await
            .map_err(|e| SaveError(format!("reading {} failed: {}", url, e)))?;
        log::debug!("[DOWNLOAD] Fetched {} bytes from {}", bytes.len(), url);

        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_ref()));
        let blob = Blob::new_with_u8_array_sequence(&parts).map_err(js_error)?;
        let object_url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

        let clicked = click_anchor(&object_url, filename);
        if let Err(e) = Url::revoke_object_url(&object_url) {
            log::warn!("[DOWNLOAD] Could not revoke {}: {:?}", object_url, e);
        }
        clicked
    }
}

fn click_anchor(href: &str, filename: &str) -> Result<(), SaveError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SaveError("no document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| SaveError("no document body".to_string()))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| SaveError("created element is not an anchor".to_string()))?;
    anchor.set_href(href);
    anchor.set_download(filename);

    body.append_child(&anchor).map_err(js_error)?;
    anchor.click();
    anchor.remove();
    Ok(())
}

fn js_error(err: JsValue) -> SaveError {
    SaveError(format!("{:?}", err))
}
