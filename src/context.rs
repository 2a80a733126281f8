//! Application Context
//!
//! Shared state provided via Leptos Context API, plus the actions the
//! components trigger. All task/coin mutations go through the core store.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use purrfect_core::{
    settle_after, share_gif, AppConfig, FileSaver, GifId, GifProvider, ShareOutcome, StoreError,
    TaskRewardStore,
};
use std::time::Duration;

use crate::browser::{self, BlobDownload, BrowserStorage, CatApiProvider, NavigatorShare};
use crate::store::{store_begin_gif_fetch, store_finish_gif_fetch, ViewState, ViewStore};

pub type RewardStore = TaskRewardStore<BrowserStorage>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Tasks, coins and bookmarks (persisted)
    pub rewards: RwSignal<RewardStore>,
    /// Current GIF and loading flag (not persisted)
    pub view: ViewStore,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let rewards = TaskRewardStore::load(BrowserStorage, config.policy.clone());
        Self {
            rewards: RwSignal::new(rewards),
            view: ViewStore::new(ViewState::default()),
            config: StoredValue::new(config),
        }
    }

    pub fn config<T>(&self, f: impl FnOnce(&AppConfig) -> T) -> T {
        self.config.with_value(f)
    }

    /// Run a store mutation; rejections are logged, never raised
    fn mutate<T>(&self, f: impl FnOnce(&mut RewardStore) -> Result<T, StoreError>) -> Option<T> {
        match self.rewards.try_update(f)? {
            Ok(value) => Some(value),
            Err(e) if e.is_validation() => {
                log::debug!("[APP] Ignored: {}", e);
                None
            }
            // The store has already raised the advisory
            Err(e @ StoreError::InsufficientCoins { .. }) => {
                log::info!("[APP] {}", e);
                None
            }
            Err(e) => {
                log::warn!("[APP] {}", e);
                None
            }
        }
    }

    // ========================
    // Tasks
    // ========================

    pub fn add_task(&self, text: &str) -> bool {
        self.mutate(|s| s.add_task(text)).is_some()
    }

    /// Start the completion animation; the task settles after the policy delay
    pub fn complete_task(&self, index: usize) {
        let Some(ticket) = self.mutate(|s| s.complete_task(index)) else {
            return;
        };
        let delay = self.config(|c| c.policy.settle_delay());
        let ctx = *self;
        spawn_local(async move {
            let settled = settle_after(delay, browser_sleep, || {
                ctx.mutate(|s| s.settle_completion(ticket.id))
            })
            .await;
            if settled.is_some() {
                // Fresh cat as the reward for finishing a task
                ctx.refresh_gif(None);
            }
        });
    }

    pub fn delete_task(&self, index: usize) {
        self.mutate(|s| s.delete_task(index));
    }

    pub fn clear_completed(&self) {
        self.rewards.update(|s| {
            s.clear_completed();
        });
    }

    // ========================
    // GIFs
    // ========================

    /// Fetch a GIF: the given one, or a random one
    pub fn refresh_gif(&self, id: Option<GifId>) {
        let view = self.view;
        let api = self.config(|c| c.gif_api.clone());
        let request = store_begin_gif_fetch(&view);
        spawn_local(async move {
            let provider = CatApiProvider::new(api);
            let result = provider.fetch(id.as_ref()).await;
            store_finish_gif_fetch(&view, request, result);
        });
    }

    pub fn bookmark_gif(&self, url: &str) {
        self.mutate(|s| s.bookmark_gif(url));
    }

    pub fn remove_bookmark(&self, url: &str) {
        self.rewards.update(|s| {
            s.remove_bookmark(url);
        });
    }

    /// Check the balance, fetch and save the file, then charge
    pub fn download_gif(&self, url: &str) {
        let Some(download) = self.mutate(|s| s.prepare_download(url)) else {
            return;
        };
        let ctx = *self;
        spawn_local(async move {
            let saved = BlobDownload.save(&download.url, &download.filename).await;
            ctx.mutate(|s| s.finish_download(&download, saved));
        });
    }

    pub fn share_gif(&self, url: String) {
        let title = self.config(|c| c.share_title.clone());
        spawn_local(async move {
            let location = browser::current_location();
            let outcome = share_gif(&NavigatorShare, &title, &location.origin, &location.path, &url).await;
            if outcome == Some(ShareOutcome::Copied) {
                browser::alert("Shareable link copied to clipboard!");
            }
        });
    }

    pub fn dismiss_advisory(&self) {
        self.rewards.update(|s| s.dismiss_advisory());
    }
}

fn browser_sleep(delay: Duration) -> TimeoutFuture {
    TimeoutFuture::new(u32::try_from(delay.as_millis()).unwrap_or(u32::MAX))
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
