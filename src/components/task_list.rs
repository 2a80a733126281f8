//! Task List Component
//!
//! Pending tasks with complete/delete buttons, followed by the tasks that
//! are playing their completion animation.

use leptos::prelude::*;
use purrfect_core::Task;

use crate::context::use_app_context;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app_context();

    // Rows are keyed by (position, text); the position is what the store
    // acts on, so a click always refers to the row as rendered last.
    let pending = move || {
        ctx.rewards.with(|s| s.pending().iter().cloned().enumerate().collect::<Vec<_>>())
    };
    let in_flight = move || {
        ctx.rewards.with(|s| s.in_flight().cloned().enumerate().collect::<Vec<_>>())
    };

    view! {
        <ul class="task-list">
            <For
                each=pending
                key=|(index, task)| (*index, task.clone())
                children=move |(index, task): (usize, Task)| {
                    view! {
                        <li class="task-row">
                            <span class="task-text">{task.into_text()}</span>
                            <div class="task-actions">
                                <button
                                    class="pixel-button"
                                    title="Complete"
                                    on:click=move |_| ctx.complete_task(index)
                                >
                                    "✓"
                                </button>
                                <button
                                    class="pixel-button"
                                    title="Delete"
                                    on:click=move |_| ctx.delete_task(index)
                                >
                                    "🗑"
                                </button>
                            </div>
                        </li>
                    }
                }
            />
            <For
                each=in_flight
                key=|(index, task)| (*index, task.clone())
                children=move |(_, task): (usize, Task)| {
                    view! {
                        <li class="task-row completed-task">
                            <span class="task-text">{task.into_text()}</span>
                        </li>
                    }
                }
            />
        </ul>
    }
}
