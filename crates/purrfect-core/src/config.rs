//! Configuration
//!
//! Reward prices, the settle delay and the GIF API location. Everything has
//! a default; a JSON override may replace any subset of fields.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::GifId;
use crate::error::ConfigError;

/// Coin economy and completion timing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardPolicy {
    /// Coins earned when a completion settles
    pub reward_per_task: u32,
    /// Coins charged per bookmark (0 disables the gate)
    pub bookmark_cost: u32,
    /// Coins charged per download
    pub download_cost: u32,
    /// Delay between the complete action and the task landing in the completed list
    pub settle_delay_ms: u32,
}

impl Default for RewardPolicy {
    fn default() -> Self {
        Self {
            reward_per_task: 1,
            bookmark_cost: 1,
            download_cost: 10,
            settle_delay_ms: 500,
        }
    }
}

impl RewardPolicy {
    /// Policy with ungated bookmarking
    pub fn free_bookmarks() -> Self {
        Self {
            bookmark_cost: 0,
            ..Self::default()
        }
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.settle_delay_ms))
    }
}

/// Where GIFs come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GifApiConfig {
    pub base_url: String,
    pub mime_types: String,
}

impl Default for GifApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.thecatapi.com/v1/images".to_string(),
            mime_types: "gif".to_string(),
        }
    }
}

impl GifApiConfig {
    /// Endpoint for a specific GIF, or for a random one when `id` is `None`
    pub fn endpoint(&self, id: Option<&GifId>) -> String {
        let base = self.base_url.trim_end_matches('/');
        match id {
            Some(id) => format!("{}/{}", base, id),
            None => format!("{}/search?mime_types={}", base, self.mime_types),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub policy: RewardPolicy,
    pub gif_api: GifApiConfig,
    pub share_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            policy: RewardPolicy::default(),
            gif_api: GifApiConfig::default(),
            share_title: "Check out this cat GIF!".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
