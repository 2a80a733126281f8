//! GIF Provider
//!
//! Contract for fetching GIFs plus the schema check applied to whatever the
//! API sends back. Failures never escape: they are logged and the current
//! GIF stays on screen.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{GifId, GifImage};
use crate::error::GifError;

/// Fetches a random GIF, or a specific one when `id` is given
#[async_trait(?Send)]
pub trait GifProvider {
    async fn fetch(&self, id: Option<&GifId>) -> Result<GifImage, GifError>;
}

/// Validate an API payload.
///
/// The search endpoint answers with an array, the by-id endpoint with a
/// single object; both must carry a non-empty `url`.
pub fn parse_gif_payload(payload: Value) -> Result<GifImage, GifError> {
    let object = match payload {
        Value::Array(items) => items
            .into_iter()
            .next()
            .ok_or_else(|| GifError::Malformed("empty result list".to_string()))?,
        other => other,
    };
    match object.get("url").and_then(Value::as_str) {
        Some(url) if !url.is_empty() => Ok(GifImage::new(url)),
        _ => Err(GifError::Malformed("missing `url` field".to_string())),
    }
}

/// The GIF currently on display, plus ordering of overlapping fetches.
///
/// Every fetch takes a request number from [`GifFeed::begin`]. Only the
/// most recent request may replace the GIF or end the loading state, so a
/// slow older response never overwrites a newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GifFeed {
    current: Option<GifImage>,
    latest_request: u64,
    loading: bool,
}

impl GifFeed {
    pub fn current(&self) -> Option<&GifImage> {
        self.current.as_ref()
    }

    /// The latest request has not answered yet
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Start a fetch and return its request number
    pub fn begin(&mut self) -> u64 {
        self.latest_request += 1;
        self.loading = true;
        self.latest_request
    }

    /// Apply the result of request `request`; returns whether it was used.
    ///
    /// Superseded requests are dropped. Errors leave the previous GIF in place.
    pub fn finish(&mut self, request: u64, result: Result<GifImage, GifError>) -> bool {
        if request != self.latest_request {
            log::debug!(
                "[GIF] Dropping response {} (latest is {})",
                request,
                self.latest_request
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(image) => self.current = Some(image),
            Err(e) => log::error!("[GIF] Keeping previous GIF: {}", e),
        }
        true
    }
}
