//! Cat API Binding
//!
//! `GifProvider` backed by thecatapi.com through reqwest's fetch backend.

use async_trait::async_trait;
use purrfect_core::{parse_gif_payload, GifApiConfig, GifError, GifId, GifImage, GifProvider};

pub struct CatApiProvider {
    config: GifApiConfig,
}

impl CatApiProvider {
    pub fn new(config: GifApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl GifProvider for CatApiProvider {
    async fn fetch(&self, id: Option<&GifId>) -> Result<GifImage, GifError> {
        let endpoint = self.config.endpoint(id);
        log::debug!("[GIF] Fetching {}", endpoint);

        let response = reqwest::get(&endpoint)
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| GifError::Request(e.to_string()))?;
        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GifError::Malformed(e.to_string()))?;

        parse_gif_payload(payload)
    }
}
