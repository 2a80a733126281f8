//! Purrfect Tasks Core
//!
//! Layered like the UI expects it:
//! - domain: tasks, GIF identifiers, advisories, completion tickets
//! - storage: key-value persistence contract and the persisted snapshot
//! - store: the task/reward state machine
//! - gif, share, download: seams to the outside world

pub mod config;
pub mod domain;
pub mod download;
pub mod error;
pub mod gif;
pub mod share;
pub mod storage;
pub mod store;

pub use config::{AppConfig, GifApiConfig, RewardPolicy};
pub use domain::{Advisory, CompletionTicket, GifId, GifImage, Task};
pub use download::{download_filename, FileSaver, PendingDownload};
pub use error::{ConfigError, GifError, SaveError, ShareError, StorageError, StoreError};
pub use gif::{parse_gif_payload, GifFeed, GifProvider};
pub use share::{gif_id_from_url, share_gif, share_link, take_gif_id, ShareOutcome, ShareTarget};
pub use storage::{KeyValueStore, MemoryStore, Snapshot};
pub use store::{settle_after, TaskRewardStore};
