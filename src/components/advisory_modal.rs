//! Advisory Modal Component
//!
//! Explains a refused coin-gated action until the user acknowledges it.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn AdvisoryModal() -> impl IntoView {
    let ctx = use_app_context();
    let message = move || ctx.rewards.with(|s| s.advisory().map(|a| a.message.clone()));

    view! {
        {move || message().map(|text| view! {
            <div class="modal-backdrop">
                <div class="modal pixel-border" role="dialog">
                    <h2>"Not enough coins"</h2>
                    <p>{text}</p>
                    <button class="pixel-button" on:click=move |_| ctx.dismiss_advisory()>
                        "OK"
                    </button>
                </div>
            </div>
        })}
    }
}
