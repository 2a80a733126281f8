//! Persisted Snapshot
//!
//! Schema for the four storage keys. Each key is read independently and
//! falls back to its empty default when missing or malformed, so one bad
//! entry never wipes the others.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::keys;
use super::traits::KeyValueStore;
use crate::domain::Task;

/// Everything that survives a reload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub todos: Vec<Task>,
    pub completed_todos: Vec<Task>,
    pub coins: u32,
    pub bookmarked_gifs: Vec<String>,
}

impl Snapshot {
    /// Hydrate from storage
    pub fn load(storage: &impl KeyValueStore) -> Self {
        let snapshot = Self {
            todos: load_tasks(storage, keys::TODOS),
            completed_todos: load_tasks(storage, keys::COMPLETED_TODOS),
            coins: load_coins(storage),
            bookmarked_gifs: load_bookmarks(storage),
        };
        log::debug!(
            "[STORAGE] Loaded {} todos, {} completed, {} coins, {} bookmarks",
            snapshot.todos.len(),
            snapshot.completed_todos.len(),
            snapshot.coins,
            snapshot.bookmarked_gifs.len()
        );
        snapshot
    }

    /// Write every key
    pub fn save(&self, storage: &impl KeyValueStore) {
        write_todos(storage, &self.todos);
        write_completed(storage, &self.completed_todos);
        write_coins(storage, self.coins);
        write_bookmarks(storage, &self.bookmarked_gifs);
    }
}

// ========================
// Writers (fire-and-forget)
// ========================

pub(crate) fn write_todos(storage: &impl KeyValueStore, todos: &[Task]) {
    write_json(storage, keys::TODOS, &todos);
}

pub(crate) fn write_completed(storage: &impl KeyValueStore, completed: &[Task]) {
    write_json(storage, keys::COMPLETED_TODOS, &completed);
}

pub(crate) fn write_coins(storage: &impl KeyValueStore, coins: u32) {
    write_raw(storage, keys::COINS, &coins.to_string());
}

pub(crate) fn write_bookmarks(storage: &impl KeyValueStore, bookmarks: &[String]) {
    write_json(storage, keys::BOOKMARKED_GIFS, &bookmarks);
}

fn write_json<T: Serialize + ?Sized>(storage: &impl KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => write_raw(storage, key, &json),
        Err(e) => log::warn!("[STORAGE] Failed to serialize `{}`: {}", key, e),
    }
}

fn write_raw(storage: &impl KeyValueStore, key: &str, value: &str) {
    if let Err(e) = storage.set(key, value) {
        log::warn!("[STORAGE] {}", e);
    }
}

// ========================
// Readers (validate, fall back to defaults)
// ========================

fn read_json<T: DeserializeOwned>(storage: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = storage.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("[STORAGE] Ignoring malformed `{}`: {}", key, e);
            None
        }
    }
}

fn load_tasks(storage: &impl KeyValueStore, key: &str) -> Vec<Task> {
    let raw: Vec<String> = read_json(storage, key).unwrap_or_default();
    let total = raw.len();
    let tasks: Vec<Task> = raw.into_iter().filter_map(Task::new).collect();
    if tasks.len() != total {
        log::warn!("[STORAGE] Dropped {} blank entries from `{}`", total - tasks.len(), key);
    }
    tasks
}

fn load_coins(storage: &impl KeyValueStore) -> u32 {
    let Some(raw) = storage.get(keys::COINS) else {
        return 0;
    };
    match raw.trim().parse::<u32>() {
        Ok(coins) => coins,
        Err(e) => {
            log::warn!("[STORAGE] Ignoring malformed `{}` ({:?}): {}", keys::COINS, raw, e);
            0
        }
    }
}

fn load_bookmarks(storage: &impl KeyValueStore) -> Vec<String> {
    let raw: Vec<String> = read_json(storage, keys::BOOKMARKED_GIFS).unwrap_or_default();
    let mut bookmarks: Vec<String> = Vec::with_capacity(raw.len());
    for url in raw {
        if !url.is_empty() && !bookmarks.contains(&url) {
            bookmarks.push(url);
        }
    }
    bookmarks
}
