//! Store Scenario Tests
//!
//! Exercises TaskRewardStore against the in-memory storage fake.

use std::cell::RefCell;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::RewardPolicy;
use crate::domain::Task;
use crate::download::FileSaver;
use crate::error::{SaveError, StoreError};
use crate::storage::{keys, MemoryStore, Snapshot};
use crate::store::{settle_after, TaskRewardStore};

const GIF: &str = "https://cdn2.thecatapi.com/images/b1.gif";
const OTHER_GIF: &str = "https://cdn2.thecatapi.com/images/c2.gif";

fn setup() -> TaskRewardStore<MemoryStore> {
    TaskRewardStore::load(MemoryStore::new(), RewardPolicy::default())
}

fn setup_with_coins(coins: u32) -> TaskRewardStore<MemoryStore> {
    let storage = MemoryStore::new().with_entry(keys::COINS, &coins.to_string());
    TaskRewardStore::load(storage, RewardPolicy::default())
}

fn texts(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::text).collect()
}

/// Complete the task at `index` and settle it right away
fn complete_now(store: &mut TaskRewardStore<MemoryStore>, index: usize) {
    let ticket = store.complete_task(index).expect("complete");
    store.settle_completion(ticket.id).expect("settle");
}

#[derive(Default)]
struct RecordingSaver {
    calls: RefCell<Vec<(String, String)>>,
    fail: bool,
}

#[async_trait(?Send)]
impl FileSaver for RecordingSaver {
    async fn save(&self, url: &str, filename: &str) -> Result<(), SaveError> {
        if self.fail {
            return Err(SaveError("popup blocked".to_string()));
        }
        self.calls.borrow_mut().push((url.to_string(), filename.to_string()));
        Ok(())
    }
}

// ========================
// Tasks
// ========================

#[test]
fn test_add_task_appends_in_order() {
    let mut store = setup();
    store.add_task("first").unwrap();
    store.add_task("second").unwrap();
    store.add_task("  third  ").unwrap();

    assert_eq!(texts(store.pending()), vec!["first", "second", "third"]);
    assert_eq!(
        store.storage().raw(keys::TODOS).as_deref(),
        Some(r#"["first","second","third"]"#)
    );
}

#[test]
fn test_add_blank_task_is_noop() {
    let mut store = setup();
    store.add_task("keep").unwrap();

    assert_eq!(store.add_task(""), Err(StoreError::EmptyTask));
    assert_eq!(store.add_task("   "), Err(StoreError::EmptyTask));
    assert_eq!(store.pending().len(), 1);
}

#[test]
fn test_duplicate_tasks_allowed() {
    let mut store = setup();
    store.add_task("feed cat").unwrap();
    store.add_task("feed cat").unwrap();
    assert_eq!(store.pending().len(), 2);
}

#[test]
fn test_complete_is_in_flight_until_settled() {
    let mut store = setup();
    store.add_task("nap").unwrap();

    let ticket = store.complete_task(0).unwrap();
    assert_eq!(ticket.task.text(), "nap");
    assert!(store.pending().is_empty());
    assert!(store.completed().is_empty());
    assert_eq!(store.in_flight_count(), 1);
    assert_eq!(store.coins(), 0);
    assert_eq!(store.storage().raw(keys::TODOS).as_deref(), Some("[]"));

    let settled = store.settle_completion(ticket.id).unwrap();
    assert_eq!(settled.text(), "nap");
    assert_eq!(store.in_flight_count(), 0);
    assert_eq!(texts(store.completed()), vec!["nap"]);
    assert_eq!(store.coins(), 1);
    assert_eq!(store.storage().raw(keys::COINS).as_deref(), Some("1"));
    assert_eq!(store.storage().raw(keys::COMPLETED_TODOS).as_deref(), Some(r#"["nap"]"#));
}

#[test]
fn test_settle_twice_rejected() {
    let mut store = setup();
    store.add_task("once").unwrap();
    let ticket = store.complete_task(0).unwrap();
    store.settle_completion(ticket.id).unwrap();

    assert_eq!(
        store.settle_completion(ticket.id),
        Err(StoreError::UnknownCompletion(ticket.id))
    );
    assert_eq!(store.coins(), 1);
    assert_eq!(store.completed().len(), 1);
}

#[test]
fn test_settle_survives_unrelated_mutations() {
    let mut store = setup();
    store.add_task("a").unwrap();
    store.add_task("b").unwrap();
    store.add_task("c").unwrap();

    // "b" is in flight while the list shifts around it
    let ticket = store.complete_task(1).unwrap();
    store.delete_task(0).unwrap();
    store.add_task("d").unwrap();
    store.settle_completion(ticket.id).unwrap();

    assert_eq!(texts(store.completed()), vec!["b"]);
    assert_eq!(texts(store.pending()), vec!["c", "d"]);
}

#[test]
fn test_overlapping_completions_settle_independently() {
    let mut store = setup();
    store.add_task("a").unwrap();
    store.add_task("b").unwrap();

    let first = store.complete_task(0).unwrap();
    let second = store.complete_task(0).unwrap();
    assert_ne!(first.id, second.id);
    let in_flight: Vec<&str> = store.in_flight().map(Task::text).collect();
    assert_eq!(in_flight, vec!["a", "b"]);

    // settle out of order
    store.settle_completion(second.id).unwrap();
    store.settle_completion(first.id).unwrap();
    assert_eq!(texts(store.completed()), vec!["b", "a"]);
    assert_eq!(store.coins(), 2);
}

#[test]
fn test_stale_index_hits_shifted_task() {
    let mut store = setup();
    store.add_task("a").unwrap();
    store.add_task("b").unwrap();

    // index 1 was captured while "b" sat there; "a" is deleted meanwhile
    let stale = 1;
    store.delete_task(0).unwrap();
    assert_eq!(
        store.complete_task(stale),
        Err(StoreError::IndexOutOfRange { index: 1, len: 1 })
    );
    assert_eq!(texts(store.pending()), vec!["b"]);
}

#[test]
fn test_complete_out_of_range() {
    let mut store = setup();
    assert_eq!(
        store.complete_task(0),
        Err(StoreError::IndexOutOfRange { index: 0, len: 0 })
    );
    assert_eq!(store.in_flight_count(), 0);
}

#[test]
fn test_delete_task() {
    let mut store = setup();
    store.add_task("a").unwrap();
    store.add_task("b").unwrap();

    let removed = store.delete_task(0).unwrap();
    assert_eq!(removed.text(), "a");
    assert_eq!(texts(store.pending()), vec!["b"]);
    assert_eq!(store.coins(), 0);
    assert_eq!(store.storage().raw(keys::TODOS).as_deref(), Some(r#"["b"]"#));
}

#[test]
fn test_delete_at_len_rejected() {
    let mut store = setup();
    store.add_task("a").unwrap();
    store.add_task("b").unwrap();

    let len = store.pending().len();
    assert_eq!(
        store.delete_task(len),
        Err(StoreError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(texts(store.pending()), vec!["a", "b"]);
}

#[test]
fn test_clear_completed_keeps_coins() {
    let mut store = setup();
    store.add_task("a").unwrap();
    store.add_task("b").unwrap();
    complete_now(&mut store, 0);
    complete_now(&mut store, 0);

    assert_eq!(store.clear_completed(), 2);
    assert!(store.completed().is_empty());
    assert_eq!(store.coins(), 2);
    assert_eq!(store.storage().raw(keys::COMPLETED_TODOS).as_deref(), Some("[]"));
}

#[test]
fn test_clear_completed_on_empty() {
    let mut store = setup();
    assert_eq!(store.clear_completed(), 0);
}

// ========================
// Bookmarks
// ========================

#[test]
fn test_bookmark_charges_one_coin() {
    let mut store = setup_with_coins(2);
    store.bookmark_gif(GIF).unwrap();

    assert_eq!(store.bookmarks(), &[GIF.to_string()]);
    assert_eq!(store.coins(), 1);
    assert_eq!(store.storage().raw(keys::COINS).as_deref(), Some("1"));
    assert!(store.storage().raw(keys::BOOKMARKED_GIFS).unwrap().contains("b1.gif"));
}

#[test]
fn test_bookmark_twice_keeps_one() {
    let mut store = setup_with_coins(5);
    store.bookmark_gif(GIF).unwrap();
    assert_eq!(
        store.bookmark_gif(GIF),
        Err(StoreError::AlreadyBookmarked(GIF.to_string()))
    );
    assert_eq!(store.bookmarks().len(), 1);
    assert_eq!(store.coins(), 4);
    assert!(store.advisory().is_none());
}

#[test]
fn test_bookmark_without_coins_raises_advisory() {
    let mut store = setup();
    assert_eq!(
        store.bookmark_gif(GIF),
        Err(StoreError::InsufficientCoins { required: 1, balance: 0 })
    );
    assert!(store.bookmarks().is_empty());
    assert_eq!(store.coins(), 0);
    assert!(store.advisory().unwrap().message.contains("bookmark"));

    store.dismiss_advisory();
    assert!(store.advisory().is_none());
}

#[test]
fn test_free_bookmarks_policy() {
    let mut store = TaskRewardStore::load(MemoryStore::new(), RewardPolicy::free_bookmarks());
    store.bookmark_gif(GIF).unwrap();
    store.bookmark_gif(OTHER_GIF).unwrap();
    assert_eq!(store.bookmarks().len(), 2);
    assert_eq!(store.coins(), 0);
}

#[test]
fn test_bookmark_empty_url() {
    let mut store = setup_with_coins(1);
    assert_eq!(store.bookmark_gif(""), Err(StoreError::EmptyUrl));
    assert_eq!(store.coins(), 1);
}

#[test]
fn test_remove_bookmark() {
    let mut store = setup_with_coins(2);
    store.bookmark_gif(GIF).unwrap();
    store.bookmark_gif(OTHER_GIF).unwrap();

    assert!(store.remove_bookmark(GIF));
    assert!(!store.remove_bookmark(GIF));
    assert_eq!(store.bookmarks(), &[OTHER_GIF.to_string()]);
    assert_eq!(store.coins(), 0);
    assert!(!store.is_bookmarked(GIF));
}

// ========================
// Downloads
// ========================

#[tokio::test]
async fn test_download_needs_ten_coins() {
    let mut store = setup_with_coins(9);
    let saver = RecordingSaver::default();

    assert_eq!(
        store.download_gif(GIF, &saver).await,
        Err(StoreError::InsufficientCoins { required: 10, balance: 9 })
    );
    assert_eq!(store.coins(), 9);
    assert!(saver.calls.borrow().is_empty());
    assert!(store.advisory().is_some());
}

#[tokio::test]
async fn test_failed_save_keeps_coins() {
    let mut store = setup_with_coins(10);
    let saver = RecordingSaver {
        fail: true,
        ..Default::default()
    };

    let err = store.download_gif(GIF, &saver).await.unwrap_err();
    assert!(matches!(err, StoreError::SaveFailed(_)));
    assert_eq!(store.coins(), 10);
    assert!(store.advisory().is_none());
}

#[tokio::test]
async fn test_download_scenario() {
    let mut store = setup();
    let saver = RecordingSaver::default();

    assert!(store.download_gif(GIF, &saver).await.is_err());
    assert_eq!(store.coins(), 0);
    assert!(store.advisory().is_some());
    store.dismiss_advisory();

    for i in 0..10 {
        store.add_task(&format!("task {}", i)).unwrap();
        complete_now(&mut store, 0);
    }
    assert_eq!(store.coins(), 10);

    let filename = store.download_gif(GIF, &saver).await.unwrap();
    assert_eq!(filename, "cat-b1.gif");
    assert_eq!(store.coins(), 0);
    assert_eq!(
        *saver.calls.borrow(),
        vec![(GIF.to_string(), "cat-b1.gif".to_string())]
    );
}

#[tokio::test]
async fn test_spending_never_goes_negative() {
    let mut store = setup_with_coins(12);
    let saver = RecordingSaver::default();
    let urls: Vec<String> = (0..20).map(|i| format!("https://cdn/{}.gif", i)).collect();

    for (i, url) in urls.iter().enumerate() {
        let before = store.coins();
        let result = if i % 3 == 0 {
            store.download_gif(url, &saver).await.map(|_| ())
        } else {
            store.bookmark_gif(url)
        };
        if let Err(StoreError::InsufficientCoins { .. }) = result {
            assert_eq!(store.coins(), before);
        }
    }
    assert_eq!(store.coins(), 0);
}

#[test]
fn test_prepare_download_does_not_charge() {
    let mut store = setup_with_coins(10);
    let download = store.prepare_download(GIF).unwrap();

    assert_eq!(download.filename, "cat-b1.gif");
    assert_eq!(store.coins(), 10);
    assert_eq!(store.storage().raw(keys::COINS).as_deref(), Some("10"));
}

#[test]
fn test_download_charged_only_after_save_result() {
    let mut store = setup_with_coins(10);
    let download = store.prepare_download(GIF).unwrap();

    let err = store
        .finish_download(&download, Err(SaveError("fetch blocked by CORS".to_string())))
        .unwrap_err();
    assert!(matches!(err, StoreError::SaveFailed(_)));
    assert_eq!(store.coins(), 10);

    store.finish_download(&download, Ok(())).unwrap();
    assert_eq!(store.coins(), 0);
    assert_eq!(store.storage().raw(keys::COINS).as_deref(), Some("0"));
}

#[test]
fn test_download_rechecks_balance_after_save() {
    let mut store = setup_with_coins(10);
    let download = store.prepare_download(GIF).unwrap();

    // coins spent elsewhere while the bytes were in transit
    store.bookmark_gif(OTHER_GIF).unwrap();
    assert_eq!(
        store.finish_download(&download, Ok(())),
        Err(StoreError::InsufficientCoins { required: 10, balance: 9 })
    );
    assert_eq!(store.coins(), 9);
    assert!(store.advisory().is_some());
}

// ========================
// Timed settle
// ========================

#[tokio::test(start_paused = true)]
async fn test_completion_settles_after_delay() {
    let store = RefCell::new(setup());
    store.borrow_mut().add_task("stretch").unwrap();
    let ticket = store.borrow_mut().complete_task(0).unwrap();
    let delay = store.borrow().policy().settle_delay();
    let begun = tokio::time::Instant::now();

    let settle = settle_after(delay, tokio::time::sleep, || {
        store.borrow_mut().settle_completion(ticket.id)
    });
    tokio::pin!(settle);

    let early = tokio::time::timeout(Duration::from_millis(499), &mut settle).await;
    assert!(early.is_err());
    assert_eq!(store.borrow().in_flight_count(), 1);
    assert!(store.borrow().completed().is_empty());
    assert_eq!(store.borrow().coins(), 0);

    let settled = settle.await.unwrap();
    assert!(begun.elapsed() >= Duration::from_millis(500));
    assert_eq!(settled.text(), "stretch");
    assert_eq!(store.borrow().in_flight_count(), 0);
    assert_eq!(texts(store.borrow().completed()), vec!["stretch"]);
    assert_eq!(store.borrow().coins(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_delayed_settle_after_list_changes() {
    let store = RefCell::new(setup());
    store.borrow_mut().add_task("a").unwrap();
    store.borrow_mut().add_task("b").unwrap();
    let ticket = store.borrow_mut().complete_task(0).unwrap();

    let settle = settle_after(Duration::from_millis(500), tokio::time::sleep, || {
        store.borrow_mut().settle_completion(ticket.id)
    });
    tokio::pin!(settle);

    let _ = tokio::time::timeout(Duration::from_millis(200), &mut settle).await;
    store.borrow_mut().delete_task(0).unwrap();
    store.borrow_mut().add_task("c").unwrap();

    settle.await.unwrap();
    assert_eq!(texts(store.borrow().completed()), vec!["a"]);
    assert_eq!(texts(store.borrow().pending()), vec!["c"]);
}

// ========================
// Persistence
// ========================

#[test]
fn test_reload_restores_state() {
    let mut store = setup_with_coins(3);
    store.add_task("a").unwrap();
    store.add_task("b").unwrap();
    store.add_task("c").unwrap();
    complete_now(&mut store, 1);
    store.bookmark_gif(GIF).unwrap();

    let snapshot = store.snapshot();
    let reloaded = TaskRewardStore::load(store.storage(), RewardPolicy::default());
    assert_eq!(reloaded.snapshot(), snapshot);
    assert_eq!(texts(reloaded.pending()), vec!["a", "c"]);
    assert_eq!(reloaded.coins(), 3);
}

#[test]
fn test_unsettled_completion_lost_on_reload() {
    let mut store = setup();
    store.add_task("half done").unwrap();
    store.complete_task(0).unwrap();

    let reloaded = TaskRewardStore::load(store.storage(), RewardPolicy::default());
    assert_eq!(reloaded.snapshot(), Snapshot::default());
}

#[test]
fn test_storage_failure_keeps_memory_state() {
    let mut store = setup();
    store.storage().set_fail_writes(true);
    store.add_task("still here").unwrap();
    assert_eq!(texts(store.pending()), vec!["still here"]);
    assert_eq!(store.storage().raw(keys::TODOS), None);
}
