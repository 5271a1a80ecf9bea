pub mod state;

use self::state::create_state;
use super::action_modal::{PolicyAction, PolicyActionModal};
use crate::domain::a004_recovery_policy::api;
use crate::shared::components::badge::Badge;
use crate::shared::components::loading_skeleton::LoadingSkeleton;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_recovery_policy::response::RecoveryPolicyResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RecoveryPolicyList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let state = create_state();

    let fetch = move || {
        let Some(ticket) = state.try_update(|s| s.collection.begin()) else {
            return;
        };
        let (filters, page) = state.with_untracked(|s| (s.filters.applied().clone(), s.page));
        spawn_local(async move {
            let result = api::fetch_policies(&filters, page).await;
            state.update(|s| match result {
                Ok(paged) => {
                    s.collection.succeed(ticket, paged);
                }
                Err(e) => {
                    s.collection.fail(ticket, e);
                }
            });
        });
    };

    let set_paused_only = move |checked: bool| {
        state.update(|s| {
            s.filters.set_and_apply(|f| f.paused_only = checked);
            s.page = s.page.first();
        });
        fetch();
    };

    let on_page_change = Callback::new(move |page_number: usize| {
        state.update(|s| s.page.page_number = page_number);
        fetch();
    });

    let on_page_size_change = Callback::new(move |page_size: usize| {
        state.update(|s| {
            s.page.page_size = page_size;
            s.page.page_number = 1;
        });
        fetch();
    });

    let open_action_modal = move |policy: RecoveryPolicyResponse, action: PolicyAction| {
        modal_stack.push(move |handle| {
            let policy = policy.clone();
            view! {
                <PolicyActionModal
                    policy=policy
                    action=action
                    on_done=Callback::new({
                        let handle = handle.clone();
                        move |_| {
                            handle.close();
                            fetch();
                        }
                    })
                    on_cancel=Callback::new({
                        let handle = handle.clone();
                        move |_| handle.close()
                    })
                />
            }
            .into_any()
        });
    };

    let meta = Signal::derive(move || state.with(|s| s.collection.meta));

    fetch();

    view! {
        <PageFrame page_id="a004_recovery_policy--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2>"Recovery policies"</h2>
                <div class="page__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <div class="page__content">
                <div class="filters">
                    <label class="filters__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || state.with(|s| s.filters.applied().paused_only)
                            on:change=move |ev| set_paused_only(event_target_checked(&ev))
                        />
                        "Paused only"
                    </label>
                </div>

                {move || state.with(|s| s.collection.error.clone()).map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">{icon("alert")}</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <Show
                    when=move || !state.with(|s| s.collection.first_load())
                    fallback=|| view! { <LoadingSkeleton rows=5 /> }
                >
                    <div class="table-container">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Id"</th>
                                    <th class="table__header-cell">"Name"</th>
                                    <th class="table__header-cell">"Strategy"</th>
                                    <th class="table__header-cell">"Deduction"</th>
                                    <th class="table__header-cell">"Accounts"</th>
                                    <th class="table__header-cell">"State"</th>
                                    <th class="table__header-cell">"Updated"</th>
                                    <th class="table__header-cell"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || state.with(|s| s.collection.rows.clone()).into_iter().map(|policy| {
                                    let policy_for_action = policy.clone();
                                    let is_paused = policy.is_paused;
                                    let (action, action_icon, action_title) = if is_paused {
                                        (PolicyAction::Resume, "play", "Resume policy")
                                    } else {
                                        (PolicyAction::Pause, "pause", "Pause policy")
                                    };
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell table__cell--number">{policy.id}</td>
                                            <td class="table__cell">{policy.name.clone()}</td>
                                            <td class="table__cell">{policy.strategy.clone()}</td>
                                            <td class="table__cell table__cell--number">{format!("{:.1}%", policy.deduction_percent)}</td>
                                            <td class="table__cell table__cell--number">{policy.accounts_attached}</td>
                                            <td class="table__cell">
                                                {if is_paused {
                                                    view! { <Badge variant="warning".to_string()>"Paused"</Badge> }.into_any()
                                                } else {
                                                    view! { <Badge variant="success".to_string()>"Active"</Badge> }.into_any()
                                                }}
                                            </td>
                                            <td class="table__cell">{format_timestamp(&policy.updated_at)}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--ghost"
                                                    title=action_title
                                                    on:click=move |_| open_action_modal(policy_for_action.clone(), action)
                                                >
                                                    {icon(action_icon)}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>

                    <PaginationControls
                        meta=meta
                        on_page_change=on_page_change
                        on_page_size_change=on_page_size_change
                    />
                </Show>
            </div>
        </PageFrame>
    }
}
