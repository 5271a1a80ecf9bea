//! Tab bar + tab pages. Opened tabs stay mounted; only the active one is
//! visible, so list state survives switching away and back.

use crate::domain::a001_agent::ui::list::AgentList;
use crate::domain::a002_billing_run::ui::list::BillingRunList;
use crate::domain::a003_debt_entry::ui::list::DebtEntryList;
use crate::domain::a004_recovery_policy::ui::list::RecoveryPolicyList;
use crate::domain::a005_refund::ui::list::RefundList;
use crate::domain::a006_meter::ui::list::MeterList;
use crate::domain::a007_change_request::ui::list::ChangeRequestList;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Human label for a tab key. Unknown keys (stale bookmarks) still get a tab.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_agent" => "Agents",
        "a002_billing_run" => "Billing print runs",
        "a003_debt_entry" => "Debt entries",
        "a004_recovery_policy" => "Recovery policies",
        "a005_refund" => "Refunds",
        "a006_meter" => "Meters",
        "a007_change_request" => "Change requests",
        _ => "Untitled",
    }
}

#[component]
fn TabPage(tab: TabData) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let key_for_active = tab.key.clone();
    let is_active = move || ctx.active.get().as_deref() == Some(key_for_active.as_str());

    let content = match tab.key.as_str() {
        "a001_agent" => view! { <AgentList /> }.into_any(),
        "a002_billing_run" => view! { <BillingRunList /> }.into_any(),
        "a003_debt_entry" => view! { <DebtEntryList /> }.into_any(),
        "a004_recovery_policy" => view! { <RecoveryPolicyList /> }.into_any(),
        "a005_refund" => view! { <RefundList /> }.into_any(),
        "a006_meter" => view! { <MeterList /> }.into_any(),
        "a007_change_request" => view! { <ChangeRequestList /> }.into_any(),
        _ => view! { <div class="page page--unknown">"Unknown page"</div> }.into_any(),
    };

    view! {
        <div
            class="tabs__page"
            style:display=move || if is_active() { "block" } else { "none" }
        >
            {content}
        </div>
    }
}

#[component]
pub fn Tabs() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="tabs">
            <div class="tabs__bar">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        let key_for_click = tab.key.clone();
                        let key_for_close = tab.key.clone();
                        let key_for_active = tab.key.clone();
                        let is_active = move || {
                            ctx.active.get().as_deref() == Some(key_for_active.as_str())
                        };
                        view! {
                            <div
                                class="tabs__tab"
                                class:tabs__tab--active=is_active
                                on:click=move |_| ctx.activate_tab(&key_for_click)
                            >
                                <span class="tabs__tab-title">{tab.title.clone()}</span>
                                <button
                                    class="tabs__tab-close"
                                    title="Close tab"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        ctx.close_tab(&key_for_close);
                                    }
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        }
                    }
                />
            </div>
            <div class="tabs__content">
                <Show
                    when=move || !ctx.opened.get().is_empty()
                    fallback=|| {
                        view! {
                            <div class="tabs__empty">
                                "Select a page from the menu to get started."
                            </div>
                        }
                    }
                >
                    <For
                        each=move || ctx.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab| view! { <TabPage tab=tab /> }
                    />
                </Show>
            </div>
        </div>
    }
}
