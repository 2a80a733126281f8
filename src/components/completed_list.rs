//! Completed List Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Completed tasks with the Clear Completed action (hidden when empty)
#[component]
pub fn CompletedList() -> impl IntoView {
    let ctx = use_app_context();
    let completed = move || ctx.rewards.with(|s| s.completed().to_vec());
    let has_completed = move || ctx.rewards.with(|s| !s.completed().is_empty());

    view! {
        <Show when=has_completed>
            <section class="completed-section">
                <h2>"Completed Todos"</h2>
                <ul class="task-list">
                    {move || completed().into_iter().map(|task| view! {
                        <li class="task-row done">
                            <span class="task-text">{task.into_text()}</span>
                        </li>
                    }).collect_view()}
                </ul>
                <button class="pixel-button" on:click=move |_| ctx.clear_completed()>
                    "Clear Completed"
                </button>
            </section>
        </Show>
    }
}
