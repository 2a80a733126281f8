//! UI Components
//!
//! Leptos components for the single-page layout.

mod advisory_modal;
mod bookmark_gallery;
mod coin_counter;
mod completed_list;
mod gif_card;
mod new_task_form;
mod task_list;

pub use advisory_modal::AdvisoryModal;
pub use bookmark_gallery::BookmarkGallery;
pub use coin_counter::CoinCounter;
pub use completed_list::CompletedList;
pub use gif_card::GifCard;
pub use new_task_form::NewTaskForm;
pub use task_list::TaskList;
