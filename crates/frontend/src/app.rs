use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::notify::{NotifyHost, NotifyService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    provide_context(ModalStackService::new());
    provide_context(NotifyService::new());

    // Restore the active tab from the URL; runs once on mount.
    ctx.init_router_integration();

    view! {
        <Shell />
        <ModalHost />
        <NotifyHost />
    }
}
