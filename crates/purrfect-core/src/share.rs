//! Share Links
//!
//! Builds `<origin><path>?gifId=<id>` links and reads them back when the app
//! is launched from one. The actual sharing (native share sheet, clipboard)
//! sits behind `ShareTarget`.

use async_trait::async_trait;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::domain::GifId;
use crate::error::ShareError;

/// Query parameter carrying the shared GIF
pub const GIF_ID_PARAM: &str = "gifId";

const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`');

/// How a share request was fulfilled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Native share sheet accepted the link
    Shared,
    /// Link was copied to the clipboard instead
    Copied,
}

#[async_trait(?Send)]
pub trait ShareTarget {
    async fn share(&self, title: &str, url: &str) -> Result<ShareOutcome, ShareError>;
}

pub fn gif_id_from_url(gif_url: &str) -> Option<GifId> {
    GifId::from_url(gif_url)
}

/// Shareable link for a GIF, `None` when no identifier can be derived
pub fn share_link(origin: &str, path: &str, gif_url: &str) -> Option<String> {
    let id = gif_id_from_url(gif_url)?;
    let encoded = utf8_percent_encode(id.as_str(), QUERY_ENCODE_SET);
    Some(format!("{}{}?{}={}", origin, path, GIF_ID_PARAM, encoded))
}

/// Pull `gifId` out of a launch query string.
///
/// Returns the identifier (if any) and the query with every `gifId` pair
/// removed: `""` when nothing is left, otherwise `?rest`.
pub fn take_gif_id(search: &str) -> (Option<GifId>, String) {
    let query = search.strip_prefix('?').unwrap_or(search);
    let mut gif_id = None;
    let mut kept = Vec::new();

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == GIF_ID_PARAM {
            if gif_id.is_none() {
                gif_id = GifId::new(percent_decode_str(value).decode_utf8_lossy());
            }
        } else {
            kept.push(pair);
        }
    }

    let rest = if kept.is_empty() {
        String::new()
    } else {
        format!("?{}", kept.join("&"))
    };
    (gif_id, rest)
}

/// Share a GIF; failures are logged, never returned
pub async fn share_gif<T: ShareTarget + ?Sized>(
    target: &T,
    title: &str,
    origin: &str,
    path: &str,
    gif_url: &str,
) -> Option<ShareOutcome> {
    let Some(link) = share_link(origin, path, gif_url) else {
        log::error!("[SHARE] Sharing failed: {}", ShareError::NothingToShare);
        return None;
    };
    match target.share(title, &link).await {
        Ok(outcome) => {
            log::debug!("[SHARE] {:?} {}", outcome, link);
            Some(outcome)
        }
        Err(e) => {
            log::error!("[SHARE] Sharing failed: {}", e);
            None
        }
    }
}
