//! View State Store
//!
//! Uses Leptos reactive_stores for the state that is not persisted:
//! the GIF on display and the fetch that is allowed to replace it.

use leptos::prelude::*;
use purrfect_core::{GifError, GifFeed, GifImage};
use reactive_stores::Store;

/// Transient UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// GIF currently shown in the card, with request ordering
    pub gif: GifFeed,
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

// ========================
// Store Helper Functions
// ========================

/// Mark a GIF fetch as started, returning its request number
pub fn store_begin_gif_fetch(store: &ViewStore) -> u64 {
    store.gif().write().begin()
}

/// Apply a finished GIF fetch; stale requests and failures keep the current GIF
pub fn store_finish_gif_fetch(store: &ViewStore, request: u64, result: Result<GifImage, GifError>) {
    store.gif().write().finish(request, result);
}

/// URL of the GIF on display
pub fn store_current_gif_url(store: &ViewStore) -> Option<String> {
    store.gif().read().current().map(|image| image.url.clone())
}

pub fn store_gif_loading(store: &ViewStore) -> bool {
    store.gif().read().is_loading()
}
