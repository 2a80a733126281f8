//! Domain Layer
//!
//! Plain value types shared by the store and the UI.
//! No browser or I/O dependencies live here.

mod advisory;
mod gif;
mod task;

pub use advisory::Advisory;
pub(crate) use gif::last_path_segment;
pub use gif::{GifId, GifImage};
pub use task::{CompletionTicket, Task};
