//! GIF Types
//!
//! The validated GIF payload and the opaque identifier used in share links.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fetched GIF resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifImage {
    pub url: String,
}

impl GifImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn id(&self) -> Option<GifId> {
        GifId::from_url(&self.url)
    }
}

/// Opaque GIF identifier: last path segment of the resource URL, extension stripped
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GifId(String);

impl GifId {
    /// Wrap an identifier received from outside (e.g. a launch URL)
    pub fn new(id: impl AsRef<str>) -> Option<Self> {
        let id = id.as_ref().trim();
        if id.is_empty() {
            None
        } else {
            Some(Self(id.to_string()))
        }
    }

    /// Derive the identifier from a GIF URL
    ///
    /// `https://cdn2.thecatapi.com/images/abc.gif?x=1` -> `abc`
    pub fn from_url(url: &str) -> Option<Self> {
        let stem = last_path_segment(url).split('.').next().unwrap_or("");
        Self::new(stem)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GifId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Final path segment of a URL, ignoring query, fragment and trailing slashes
pub(crate) fn last_path_segment(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or("");
    path.trim_end_matches('/').rsplit('/').next().unwrap_or("")
}
