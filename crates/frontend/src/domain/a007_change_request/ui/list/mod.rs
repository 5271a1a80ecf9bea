pub mod state;

use self::state::create_state;
use super::decision_modal::{ChangeRequestDecisionModal, Decision};
use crate::domain::a007_change_request::api;
use crate::shared::components::badge::Badge;
use crate::shared::components::loading_skeleton::LoadingSkeleton;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::modal_stack::{ModalOptions, ModalStackService};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a007_change_request::response::ChangeRequestResponse;
use contracts::enums::ChangeRequestStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn status_variant(status: ChangeRequestStatus) -> &'static str {
    match status {
        ChangeRequestStatus::Pending => "primary",
        ChangeRequestStatus::Approved => "success",
        ChangeRequestStatus::Declined => "error",
    }
}

#[component]
pub fn ChangeRequestList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let state = create_state();

    let fetch = move || {
        let Some(ticket) = state.try_update(|s| s.collection.begin()) else {
            return;
        };
        let (filters, page) = state.with_untracked(|s| (s.filters.applied().clone(), s.page));
        spawn_local(async move {
            let result = api::fetch_change_requests(&filters, page).await;
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

    let set_status_filter = move |value: String| {
        state.update(|s| {
            s.filters
                .set_and_apply(|f| f.status = ChangeRequestStatus::from_str_opt(&value));
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

    let open_decision_modal = move |request: ChangeRequestResponse, decision: Decision| {
        modal_stack.push_with(ModalOptions::wide(), move |handle| {
            let request = request.clone();
            view! {
                <ChangeRequestDecisionModal
                    request=request
                    decision=decision
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
        <PageFrame page_id="a007_change_request--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2>"Change requests"</h2>
                <div class="page__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <div class="page__content">
                <div class="filters">
                    <select
                        class="filters__select"
                        on:change=move |ev| set_status_filter(event_target_value(&ev))
                    >
                        <option value="">"All statuses"</option>
                        {ChangeRequestStatus::all().into_iter().map(|s| {
                            view! {
                                <option
                                    value=s.as_str()
                                    selected=move || state.with(|st| st.filters.applied().status == Some(s))
                                >
                                    {s.display_name()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                {move || state.with(|s| s.collection.error.clone()).map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">{icon("alert")}</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <Show
                    when=move || !state.with(|s| s.collection.first_load())
                    fallback=|| view! { <LoadingSkeleton /> }
                >
                    <div class="table-container">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Account"</th>
                                    <th class="table__header-cell">"Customer"</th>
                                    <th class="table__header-cell">"Change"</th>
                                    <th class="table__header-cell">"Current"</th>
                                    <th class="table__header-cell">"Requested"</th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell">"Submitted"</th>
                                    <th class="table__header-cell"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || state.with(|s| s.collection.rows.clone()).into_iter().map(|request| {
                                    let request_for_approve = request.clone();
                                    let request_for_decline = request.clone();
                                    let status = request.status;
                                    let decidable = status.is_decidable();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{request.account_number.clone()}</td>
                                            <td class="table__cell">{request.customer_name.clone()}</td>
                                            <td class="table__cell">{request.change_kind.clone()}</td>
                                            <td class="table__cell">{request.current_value.clone()}</td>
                                            <td class="table__cell">{request.requested_value.clone()}</td>
                                            <td class="table__cell">
                                                <Badge variant=status_variant(status).to_string()>{status.display_name()}</Badge>
                                            </td>
                                            <td class="table__cell">{format_timestamp(&request.submitted_at)}</td>
                                            <td class="table__cell table__cell--actions">
                                                {decidable.then(|| view! {
                                                    <button
                                                        class="button button--ghost"
                                                        title="Approve"
                                                        on:click=move |_| open_decision_modal(request_for_approve.clone(), Decision::Approve)
                                                    >
                                                        {icon("check")}
                                                    </button>
                                                    <button
                                                        class="button button--ghost"
                                                        title="Decline"
                                                        on:click=move |_| open_decision_modal(request_for_decline.clone(), Decision::Decline)
                                                    >
                                                        {icon("x")}
                                                    </button>
                                                })}
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
