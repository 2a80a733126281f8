//! Download Seam
//!
//! The store decides whether a download is affordable; a `FileSaver`
//! fetches the bytes and puts the file on disk. Coins move only after the
//! saver reports that the file was written.

use async_trait::async_trait;

use crate::domain::{last_path_segment, GifId};
use crate::error::SaveError;

/// External file-save collaborator
#[async_trait(?Send)]
pub trait FileSaver {
    async fn save(&self, url: &str, filename: &str) -> Result<(), SaveError>;
}

/// A download that passed the balance check and is waiting for its bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDownload {
    pub url: String,
    pub filename: String,
}

/// File name offered for a downloaded GIF: `cat-<id>.<ext>`
pub fn download_filename(url: &str) -> String {
    let Some(id) = GifId::from_url(url) else {
        return "cat.gif".to_string();
    };
    format!("cat-{}.{}", id, extension(url).unwrap_or("gif"))
}

fn extension(url: &str) -> Option<&str> {
    let (_, ext) = last_path_segment(url).rsplit_once('.')?;
    let valid = !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then_some(ext)
}
