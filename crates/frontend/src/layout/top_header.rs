use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <header class="top-header">
            <button
                class="top-header__toggle"
                title="Toggle menu"
                on:click=move |_| ctx.toggle_left()
            >
                {icon("menu")}
            </button>
            <div class="top-header__brand">
                {icon("zap")}
                <span class="top-header__title">"Utility Billing — Back Office"</span>
            </div>
        </header>
    }
}
