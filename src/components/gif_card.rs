//! GIF Card Component
//!
//! The current cat GIF with its reward actions. Bookmark and download are
//! priced by the reward policy; the store refuses them when coins run short.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_current_gif_url, store_gif_loading};

#[component]
pub fn GifCard() -> impl IntoView {
    let ctx = use_app_context();
    let view_store = ctx.view;
    let current = move || store_current_gif_url(&view_store);
    let loading = move || store_gif_loading(&view_store);

    let bookmark_cost = ctx.config(|c| c.policy.bookmark_cost);
    let download_cost = ctx.config(|c| c.policy.download_cost);
    let bookmark_title = if bookmark_cost == 0 {
        "Save this GIF".to_string()
    } else {
        format!("Save this GIF ({} coin)", bookmark_cost)
    };
    let download_title = format!("Download this GIF ({} coins)", download_cost);

    view! {
        <div class="gif-card">
            {move || match current() {
                Some(url) => {
                    let bookmarked = {
                        let url = url.clone();
                        move || ctx.rewards.with(|s| s.is_bookmarked(&url))
                    };
                    let bookmark_url = url.clone();
                    let share_url = url.clone();
                    let download_url = url.clone();
                    view! {
                        <img src=url class="gif-image pixel-border" alt="Random Cat" />
                        <div class="gif-actions">
                            <button
                                class=move || if bookmarked() { "pixel-button active" } else { "pixel-button" }
                                title=bookmark_title.clone()
                                on:click=move |_| ctx.bookmark_gif(&bookmark_url)
                            >
                                "🔖"
                            </button>
                            <button
                                class="pixel-button"
                                title="Share this GIF"
                                on:click=move |_| ctx.share_gif(share_url.clone())
                            >
                                "📤"
                            </button>
                            <button
                                class="pixel-button"
                                title=download_title.clone()
                                on:click=move |_| ctx.download_gif(&download_url)
                            >
                                "⬇"
                            </button>
                        </div>
                    }.into_any()
                }
                None => view! {
                    <div class="gif-placeholder pixel-border">
                        {move || if loading() { "Fetching a cat..." } else { "No cat yet" }}
                    </div>
                }.into_any(),
            }}
            <button
                class="pixel-button new-cat-btn"
                disabled=loading
                on:click=move |_| ctx.refresh_gif(None)
            >
                "New cat"
            </button>
        </div>
    }
}
