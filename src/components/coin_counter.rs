//! Coin Counter Component

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn CoinCounter() -> impl IntoView {
    let ctx = use_app_context();
    let coins = move || ctx.rewards.with(|s| s.coins());

    view! {
        <div class="coin-counter">
            <span class="coin-icon">"🪙"</span>
            <span class="coin-label">"Coins: " {coins}</span>
        </div>
    }
}
