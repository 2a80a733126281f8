//! Bookmark Gallery Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Grid of bookmarked GIFs with share/remove buttons (hidden when empty)
#[component]
pub fn BookmarkGallery() -> impl IntoView {
    let ctx = use_app_context();
    let bookmarks = move || ctx.rewards.with(|s| s.bookmarks().to_vec());
    let has_bookmarks = move || ctx.rewards.with(|s| !s.bookmarks().is_empty());

    view! {
        <Show when=has_bookmarks>
            <section class="bookmark-section">
                <h2>"Bookmarked GIFs"</h2>
                <div class="bookmark-grid">
                    <For
                        each=bookmarks
                        key=|url| url.clone()
                        children=move |url: String| {
                            let share_url = url.clone();
                            let remove_url = url.clone();
                            view! {
                                <div class="bookmark-tile">
                                    <img src=url class="pixel-border" alt="Bookmarked cat" />
                                    <div class="bookmark-actions">
                                        <button
                                            class="pixel-button"
                                            title="Share this GIF"
                                            on:click=move |_| ctx.share_gif(share_url.clone())
                                        >
                                            "📤"
                                        </button>
                                        <button
                                            class="pixel-button danger"
                                            title="Remove bookmark"
                                            on:click=move |_| ctx.remove_bookmark(&remove_url)
                                        >
                                            "🗑"
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </section>
        </Show>
    }
}
