//! Purrfect Tasks App
//!
//! Main application component: coins, the cat GIF, the task lists and the
//! bookmark gallery in a single column.

use leptos::prelude::*;

use crate::browser;
use crate::components::{
    AdvisoryModal, BookmarkGallery, CoinCounter, CompletedList, GifCard, NewTaskForm, TaskList,
};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(browser::load_config());

    // Provide context to all children
    provide_context(ctx);

    // First GIF: the shared one if we were opened from a share link
    Effect::new(move |_| {
        let shared = browser::take_launch_gif_id();
        ctx.refresh_gif(shared);
    });

    view! {
        <div class="app-layout">
            <main class="main-card pixel-border">
                <h1>"Purrfect Tasks"</h1>

                <CoinCounter />
                <GifCard />
                <NewTaskForm />
                <TaskList />
                <CompletedList />
                <BookmarkGallery />
            </main>

            <AdvisoryModal />
        </div>
    }
}
