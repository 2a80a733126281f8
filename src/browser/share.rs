//! Share Binding
//!
//! Native share sheet when the browser has one, clipboard otherwise.

use async_trait::async_trait;
use purrfect_core::{ShareError, ShareOutcome, ShareTarget};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = navigator, js_name = share, catch)]
    async fn navigator_share(data: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn clipboard_write_text(text: &str) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
struct ShareData<'a> {
    title: &'a str,
    url: &'a str,
}

pub struct NavigatorShare;

#[async_trait(?Send)]
impl ShareTarget for NavigatorShare {
    async fn share(&self, title: &str, url: &str) -> Result<ShareOutcome, ShareError> {
        let navigator = web_sys::window().ok_or(ShareError::Unavailable)?.navigator();

        if has_property(&navigator, "share") {
            let data = serde_wasm_bindgen::to_value(&ShareData { title, url })
                .map_err(|e| ShareError::Rejected(e.to_string()))?;
            navigator_share(data).await.map_err(rejected)?;
            Ok(ShareOutcome::Shared)
        } else if has_property(&navigator, "clipboard") {
            clipboard_write_text(url).await.map_err(rejected)?;
            Ok(ShareOutcome::Copied)
        } else {
            Err(ShareError::Unavailable)
        }
    }
}

fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false)
}

fn rejected(err: JsValue) -> ShareError {
    ShareError::Rejected(format!("{:?}", err))
}
