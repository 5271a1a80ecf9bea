pub mod state;

use self::state::create_state;
use super::retry_modal::BillingRunRetryModal;
use crate::domain::a002_billing_run::api;
use crate::shared::components::badge::Badge;
use crate::shared::components::loading_skeleton::LoadingSkeleton;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{format_opt_timestamp, format_timestamp};
use crate::shared::export::download_url;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::notify::NotifyService;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::poller::{PollInterval, PollerControl};
use contracts::domain::a002_billing_run::response::BillingRunResponse;
use contracts::enums::BillingRunStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn status_variant(status: BillingRunStatus) -> &'static str {
    match status {
        BillingRunStatus::Queued => "neutral",
        BillingRunStatus::Rendering => "primary",
        BillingRunStatus::Completed => "success",
        BillingRunStatus::Failed => "error",
    }
}

fn progress_label(run: &BillingRunResponse) -> String {
    if run.total_bills == 0 {
        return "—".to_string();
    }
    let percent = run.printed_bills * 100 / run.total_bills;
    format!("{} / {} ({}%)", run.printed_bills, run.total_bills, percent)
}

#[component]
pub fn BillingRunList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");
    let state = create_state();
    let poll_interval = RwSignal::new(PollInterval::Off);

    let fetch = move || {
        let Some(ticket) = state.try_update(|s| s.collection.begin()) else {
            return;
        };
        let (filters, page) = state.with_untracked(|s| (s.filters.applied().clone(), s.page));
        spawn_local(async move {
            let result = api::fetch_billing_runs(&filters, page).await;
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

    let apply_filters = move || {
        state.update(|s| {
            s.filters.apply();
            s.page = s.page.first();
        });
        fetch();
    };

    let reset_filters = move || {
        state.update(|s| {
            s.filters.reset();
            s.page = s.page.first();
        });
        fetch();
    };

    let set_status_filter = move |value: String| {
        state.update(|s| {
            s.filters
                .set_and_apply(|f| f.status = BillingRunStatus::from_str_opt(&value));
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

    let open_retry_modal = move |run: BillingRunResponse| {
        modal_stack.push(move |handle| {
            let run = run.clone();
            view! {
                <BillingRunRetryModal
                    run=run
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

    // Server renders the artifact; we consume the returned link right away.
    let download_artifact = move |run_id: uuid::Uuid| {
        spawn_local(async move {
            match api::export_run(run_id).await {
                Ok(artifact) => {
                    if let Err(e) = download_url(&artifact.download_url, &artifact.file_name) {
                        notify.error(format!("Download failed: {e}"));
                    }
                }
                Err(e) => notify.error(format!("Export failed: {e}")),
            }
        });
    };

    let meta = Signal::derive(move || state.with(|s| s.collection.meta));

    fetch();

    view! {
        <PageFrame page_id="a002_billing_run--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2>"Billing print runs"</h2>
                <div class="page__actions">
                    <PollerControl
                        interval=poll_interval
                        on_tick=Callback::new(move |_| fetch())
                    />
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <div class="page__content">
                <div class="filters">
                    <input
                        type="text"
                        class="filters__search"
                        placeholder="Billing period (YYYY-MM)"
                        prop:value=move || state.with(|s| s.filters.editing().billing_period.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.filters.edit(|f| f.billing_period = value));
                        }
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                apply_filters();
                            }
                        }
                    />
                    <select
                        class="filters__select"
                        on:change=move |ev| set_status_filter(event_target_value(&ev))
                    >
                        <option value="">"All statuses"</option>
                        {BillingRunStatus::all().into_iter().map(|s| {
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
                    <button class="button button--primary" on:click=move |_| apply_filters()>
                        "Apply"
                    </button>
                    <button class="button button--secondary" on:click=move |_| reset_filters()>
                        "Reset"
                    </button>
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
                                    <th class="table__header-cell">"Period"</th>
                                    <th class="table__header-cell">"Region"</th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell">"Progress"</th>
                                    <th class="table__header-cell">"Started"</th>
                                    <th class="table__header-cell">"Completed"</th>
                                    <th class="table__header-cell">"Error"</th>
                                    <th class="table__header-cell"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || state.with(|s| s.collection.rows.clone()).into_iter().map(|run| {
                                    let run_for_retry = run.clone();
                                    let run_id = run.id;
                                    let status = run.status;
                                    let can_retry = status == BillingRunStatus::Failed;
                                    let can_download = status == BillingRunStatus::Completed;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{run.billing_period.clone()}</td>
                                            <td class="table__cell">{run.region.clone()}</td>
                                            <td class="table__cell">
                                                <Badge variant=status_variant(status).to_string()>{status.display_name()}</Badge>
                                            </td>
                                            <td class="table__cell table__cell--number">{progress_label(&run)}</td>
                                            <td class="table__cell">{format_timestamp(&run.started_at)}</td>
                                            <td class="table__cell">{format_opt_timestamp(&run.completed_at)}</td>
                                            <td class="table__cell table__cell--muted">
                                                {run.error_message.clone().unwrap_or_else(|| "—".to_string())}
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                {can_retry.then(|| view! {
                                                    <button
                                                        class="button button--ghost"
                                                        title="Retry run"
                                                        on:click=move |_| open_retry_modal(run_for_retry.clone())
                                                    >
                                                        {icon("retry")}
                                                    </button>
                                                })}
                                                {can_download.then(|| view! {
                                                    <button
                                                        class="button button--ghost"
                                                        title="Download print artifact"
                                                        on:click=move |_| download_artifact(run_id)
                                                    >
                                                        {icon("download")}
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
