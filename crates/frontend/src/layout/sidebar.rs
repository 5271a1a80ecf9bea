//! Sidebar with grouped menu items; clicking an item opens (or activates)
//! the matching tab.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "billing",
            label: "Billing",
            items: vec![
                ("a002_billing_run", "printer"),
                ("a003_debt_entry", "scale"),
                ("a004_recovery_policy", "shield"),
            ],
        },
        MenuGroup {
            id: "customer-care",
            label: "Customer care",
            items: vec![
                ("a005_refund", "banknote"),
                ("a007_change_request", "file-text"),
            ],
        },
        MenuGroup {
            id: "field-ops",
            label: "Field operations",
            items: vec![("a001_agent", "users"), ("a006_meter", "gauge")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <Show when=move || ctx.left_open.get()>
            <nav class="sidebar">
                {get_menu_groups()
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class="sidebar__group">
                                <div class="sidebar__group-label">{group.label}</div>
                                <ul class="sidebar__items">
                                    {group
                                        .items
                                        .into_iter()
                                        .map(|(key, item_icon)| {
                                            let label = tab_label_for_key(key);
                                            let is_active = move || {
                                                ctx.active.get().as_deref() == Some(key)
                                            };
                                            view! {
                                                <li>
                                                    <button
                                                        class="sidebar__item"
                                                        class:sidebar__item--active=is_active
                                                        on:click=move |_| ctx.open_tab(key, label)
                                                    >
                                                        {icon(item_icon)}
                                                        <span>{label}</span>
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
        </Show>
    }
}
