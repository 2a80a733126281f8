//! Storage Layer
//!
//! The persistence contract: a synchronous string key-value store and the
//! snapshot that is read from it once at startup.

mod memory;
pub(crate) mod snapshot;
mod traits;

pub use memory::MemoryStore;
pub use snapshot::Snapshot;
pub use traits::KeyValueStore;

/// Storage keys (shared with earlier builds of the app, do not rename)
pub mod keys {
    pub const TODOS: &str = "todos";
    pub const COMPLETED_TODOS: &str = "completedTodos";
    pub const COINS: &str = "coins";
    pub const BOOKMARKED_GIFS: &str = "bookmarkedGifs";
}
