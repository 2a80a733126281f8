//! Task Reward Store
//!
//! Owns the pending, in-flight and completed task lists, the coin balance and
//! the bookmark collection. Every successful mutation writes the affected
//! storage keys straight away.
//!
//! Task lifecycle:
//! `pending --complete--> in-flight --settle--> completed --clear--> gone`,
//! plus `pending --delete--> gone`.

use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use crate::config::RewardPolicy;
use crate::domain::{Advisory, CompletionTicket, Task};
use crate::download::{download_filename, FileSaver, PendingDownload};
use crate::error::{SaveError, StoreError};
use crate::storage::snapshot::{write_bookmarks, write_coins, write_completed, write_todos};
use crate::storage::{KeyValueStore, Snapshot};

#[cfg(test)]
mod tests;

pub struct TaskRewardStore<S: KeyValueStore> {
    storage: S,
    policy: RewardPolicy,
    pending: Vec<Task>,
    /// Completions waiting out the settle delay, keyed by ticket id
    in_flight: BTreeMap<u64, Task>,
    completed: Vec<Task>,
    coins: u32,
    bookmarks: Vec<String>,
    advisory: Option<Advisory>,
    next_ticket: u64,
}

impl<S: KeyValueStore> TaskRewardStore<S> {
    /// Hydrate from storage. Reads happen here and nowhere else.
    pub fn load(storage: S, policy: RewardPolicy) -> Self {
        let snapshot = Snapshot::load(&storage);
        Self {
            storage,
            policy,
            pending: snapshot.todos,
            in_flight: BTreeMap::new(),
            completed: snapshot.completed_todos,
            coins: snapshot.coins,
            bookmarks: snapshot.bookmarked_gifs,
            advisory: None,
            next_ticket: 0,
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn pending(&self) -> &[Task] {
        &self.pending
    }

    /// Tasks between the complete action and settling, oldest first
    pub fn in_flight(&self) -> impl Iterator<Item = &Task> + '_ {
        self.in_flight.values()
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn bookmarks(&self) -> &[String] {
        &self.bookmarks
    }

    pub fn is_bookmarked(&self, url: &str) -> bool {
        self.bookmarks.iter().any(|b| b == url)
    }

    pub fn policy(&self) -> &RewardPolicy {
        &self.policy
    }

    pub fn advisory(&self) -> Option<&Advisory> {
        self.advisory.as_ref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current persistent state (in-flight completions are not part of it)
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            todos: self.pending.clone(),
            completed_todos: self.completed.clone(),
            coins: self.coins,
            bookmarked_gifs: self.bookmarks.clone(),
        }
    }

    // ========================
    // Tasks
    // ========================

    /// Append a task; blank text is rejected
    pub fn add_task(&mut self, text: &str) -> Result<(), StoreError> {
        let task = Task::new(text).ok_or(StoreError::EmptyTask)?;
        log::debug!("[STORE] Adding task {:?}", task.text());
        self.pending.push(task);
        write_todos(&self.storage, &self.pending);
        Ok(())
    }

    /// Move the pending task at `index` into the in-flight set.
    ///
    /// `index` is positional, so a caller holding an index from an older
    /// render may hit a different task (or none) after another add/delete.
    /// The returned ticket must be passed to [`Self::settle_completion`]
    /// once `policy().settle_delay()` has elapsed.
    pub fn complete_task(&mut self, index: usize) -> Result<CompletionTicket, StoreError> {
        self.check_index(index)?;
        let task = self.pending.remove(index);
        let id = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight.insert(id, task.clone());
        write_todos(&self.storage, &self.pending);
        log::debug!("[STORE] Completing {:?} (ticket {})", task.text(), id);
        Ok(CompletionTicket { id, task })
    }

    /// Land an in-flight completion: task goes to completed, reward is paid
    pub fn settle_completion(&mut self, id: u64) -> Result<Task, StoreError> {
        let task = self
            .in_flight
            .remove(&id)
            .ok_or(StoreError::UnknownCompletion(id))?;
        self.completed.push(task.clone());
        self.coins = self.coins.saturating_add(self.policy.reward_per_task);
        write_completed(&self.storage, &self.completed);
        write_coins(&self.storage, self.coins);
        log::debug!("[STORE] Settled {:?}, balance {}", task.text(), self.coins);
        Ok(task)
    }

    /// Remove a pending task without reward
    pub fn delete_task(&mut self, index: usize) -> Result<Task, StoreError> {
        self.check_index(index)?;
        let task = self.pending.remove(index);
        write_todos(&self.storage, &self.pending);
        log::debug!("[STORE] Deleted {:?}", task.text());
        Ok(task)
    }

    /// Empty the completed list, returning how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let removed = self.completed.len();
        self.completed.clear();
        write_completed(&self.storage, &self.completed);
        log::debug!("[STORE] Cleared {} completed tasks", removed);
        removed
    }

    fn check_index(&self, index: usize) -> Result<(), StoreError> {
        if index < self.pending.len() {
            Ok(())
        } else {
            let err = StoreError::IndexOutOfRange {
                index,
                len: self.pending.len(),
            };
            log::debug!("[STORE] Rejected: {}", err);
            Err(err)
        }
    }

    // ========================
    // GIF rewards
    // ========================

    /// Save a GIF url, charging `policy.bookmark_cost`
    pub fn bookmark_gif(&mut self, url: &str) -> Result<(), StoreError> {
        if url.is_empty() {
            return Err(StoreError::EmptyUrl);
        }
        if self.is_bookmarked(url) {
            log::debug!("[STORE] Already bookmarked {}", url);
            return Err(StoreError::AlreadyBookmarked(url.to_string()));
        }
        self.charge(self.policy.bookmark_cost, "bookmark")?;
        self.bookmarks.push(url.to_string());
        write_bookmarks(&self.storage, &self.bookmarks);
        write_coins(&self.storage, self.coins);
        log::debug!("[STORE] Bookmarked {}, balance {}", url, self.coins);
        Ok(())
    }

    /// Drop a bookmark; returns whether anything was removed
    pub fn remove_bookmark(&mut self, url: &str) -> bool {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b != url);
        let removed = self.bookmarks.len() != before;
        if removed {
            write_bookmarks(&self.storage, &self.bookmarks);
            log::debug!("[STORE] Removed bookmark {}", url);
        }
        removed
    }

    /// Check that a download is affordable without charging for it yet.
    ///
    /// Raises the advisory when coins run short. The caller saves the file
    /// and then hands the result to [`Self::finish_download`].
    pub fn prepare_download(&mut self, url: &str) -> Result<PendingDownload, StoreError> {
        if url.is_empty() {
            return Err(StoreError::EmptyUrl);
        }
        self.ensure_balance(self.policy.download_cost, "download")?;
        Ok(PendingDownload {
            url: url.to_string(),
            filename: download_filename(url),
        })
    }

    /// Charge `policy.download_cost` once the file has been written.
    ///
    /// The balance is checked again: other spending may have happened
    /// while the bytes were in transit.
    pub fn finish_download(
        &mut self,
        download: &PendingDownload,
        saved: Result<(), SaveError>,
    ) -> Result<(), StoreError> {
        saved.map_err(|e| {
            log::error!("[STORE] Download of {} failed: {}", download.url, e);
            StoreError::from(e)
        })?;
        self.charge(self.policy.download_cost, "download")?;
        write_coins(&self.storage, self.coins);
        log::debug!(
            "[STORE] Downloaded {} as {}, balance {}",
            download.url,
            download.filename,
            self.coins
        );
        Ok(())
    }

    /// Prepare, save through `saver`, then charge. Returns the file name.
    pub async fn download_gif(
        &mut self,
        url: &str,
        saver: &(impl FileSaver + ?Sized),
    ) -> Result<String, StoreError> {
        let download = self.prepare_download(url)?;
        let saved = saver.save(&download.url, &download.filename).await;
        self.finish_download(&download, saved)?;
        Ok(download.filename)
    }

    /// Acknowledge the advisory modal
    pub fn dismiss_advisory(&mut self) {
        self.advisory = None;
    }

    fn charge(&mut self, cost: u32, action: &str) -> Result<(), StoreError> {
        self.ensure_balance(cost, action)?;
        self.coins -= cost;
        Ok(())
    }

    /// Refuse below-cost spending and raise the advisory instead
    fn ensure_balance(&mut self, cost: u32, action: &str) -> Result<(), StoreError> {
        if self.coins >= cost {
            return Ok(());
        }
        log::info!("[STORE] Cannot {}: need {} coins, have {}", action, cost, self.coins);
        self.advisory = Some(Advisory::insufficient_coins(action, cost, self.coins));
        Err(StoreError::InsufficientCoins {
            required: cost,
            balance: self.coins,
        })
    }
}

/// Wait out the settle delay, then run `settle`.
///
/// `sleep` supplies the timer (`TimeoutFuture` in the browser, tokio in
/// tests). `settle` should identify the completion by its ticket id.
pub async fn settle_after<Sleep, Fut, Settle, T>(delay: Duration, sleep: Sleep, settle: Settle) -> T
where
    Sleep: FnOnce(Duration) -> Fut,
    Fut: Future<Output = ()>,
    Settle: FnOnce() -> T,
{
    sleep(delay).await;
    settle()
}
