pub mod state;

use self::state::create_state;
use crate::domain::a005_refund::api;
use crate::shared::components::badge::Badge;
use crate::shared::components::loading_skeleton::LoadingSkeleton;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{format_money, format_opt_timestamp, format_timestamp};
use crate::shared::export::{export_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use crate::shared::notify::NotifyService;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a005_refund::response::RefundResponse;
use contracts::enums::RefundStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

impl Sortable for RefundResponse {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "account_number" => self.account_number.cmp(&other.account_number),
            "customer_name" => self
                .customer_name
                .to_lowercase()
                .cmp(&other.customer_name.to_lowercase()),
            "amount" => self
                .amount
                .partial_cmp(&other.amount)
                .unwrap_or(Ordering::Equal),
            "requested_at" => self.requested_at.cmp(&other.requested_at),
            _ => Ordering::Equal,
        }
    }
}

impl CsvExportable for RefundResponse {
    fn headers() -> Vec<&'static str> {
        vec![
            "Account",
            "Customer",
            "Amount",
            "Status",
            "Requested",
            "Processed",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.account_number.clone(),
            self.customer_name.clone(),
            format!("{:.2}", self.amount),
            self.status.display_name().to_string(),
            format_timestamp(&self.requested_at),
            format_opt_timestamp(&self.processed_at),
        ]
    }
}

fn status_variant(status: RefundStatus) -> &'static str {
    match status {
        RefundStatus::Requested => "neutral",
        RefundStatus::Processing => "primary",
        RefundStatus::Paid => "success",
        RefundStatus::Rejected => "error",
    }
}

#[component]
pub fn RefundList() -> impl IntoView {
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");
    let state = create_state();

    let fetch = move || {
        let Some(ticket) = state.try_update(|s| s.collection.begin()) else {
            return;
        };
        let (filters, page) = state.with_untracked(|s| (s.filters.applied().clone(), s.page));
        spawn_local(async move {
            let result = api::fetch_refunds(&filters, page).await;
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
                .set_and_apply(|f| f.status = RefundStatus::from_str_opt(&value));
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

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let sorted_rows = move || {
        let (mut rows, field, ascending) = state.with(|s| {
            (
                s.collection.rows.clone(),
                s.sort_field.clone(),
                s.sort_ascending,
            )
        });
        sort_list(&mut rows, &field, ascending);
        rows
    };

    let export_rows = move |_| {
        let rows = state.with_untracked(|s| s.collection.rows.clone());
        if let Err(e) = export_csv(&rows, "refunds.csv") {
            notify.error(format!("Export failed: {e}"));
        }
    };

    let meta = Signal::derive(move || state.with(|s| s.collection.meta));

    fetch();

    view! {
        <PageFrame page_id="a005_refund--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2>"Refunds"</h2>
                <div class="page__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=export_rows
                        disabled=move || state.with(|s| s.collection.rows.is_empty())
                    >
                        {icon("download")}
                        "Export CSV"
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
                        {RefundStatus::all().into_iter().map(|s| {
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
                    <input
                        type="date"
                        class="filters__date"
                        prop:value=move || state.with(|s| s.filters.editing().date_from.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.filters.edit(|f| f.date_from = value));
                        }
                    />
                    <span class="filters__separator">"—"</span>
                    <input
                        type="date"
                        class="filters__date"
                        prop:value=move || state.with(|s| s.filters.editing().date_to.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.filters.edit(|f| f.date_to = value));
                        }
                    />
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
                                    <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("account_number")>
                                        "Account"
                                        <span class=move || get_sort_class(&state.with(|s| s.sort_field.clone()), "account_number")>
                                            {move || state.with(|s| get_sort_indicator(&s.sort_field, "account_number", s.sort_ascending))}
                                        </span>
                                    </th>
                                    <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("customer_name")>
                                        "Customer"
                                        <span class=move || get_sort_class(&state.with(|s| s.sort_field.clone()), "customer_name")>
                                            {move || state.with(|s| get_sort_indicator(&s.sort_field, "customer_name", s.sort_ascending))}
                                        </span>
                                    </th>
                                    <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("amount")>
                                        "Amount"
                                        <span class=move || get_sort_class(&state.with(|s| s.sort_field.clone()), "amount")>
                                            {move || state.with(|s| get_sort_indicator(&s.sort_field, "amount", s.sort_ascending))}
                                        </span>
                                    </th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("requested_at")>
                                        "Requested"
                                        <span class=move || get_sort_class(&state.with(|s| s.sort_field.clone()), "requested_at")>
                                            {move || state.with(|s| get_sort_indicator(&s.sort_field, "requested_at", s.sort_ascending))}
                                        </span>
                                    </th>
                                    <th class="table__header-cell">"Processed"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || sorted_rows().into_iter().map(|refund| {
                                    let status = refund.status;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{refund.account_number.clone()}</td>
                                            <td class="table__cell">{refund.customer_name.clone()}</td>
                                            <td class="table__cell table__cell--number">{format_money(refund.amount)}</td>
                                            <td class="table__cell">
                                                <Badge variant=status_variant(status).to_string()>{status.display_name()}</Badge>
                                            </td>
                                            <td class="table__cell">{format_timestamp(&refund.requested_at)}</td>
                                            <td class="table__cell">{format_opt_timestamp(&refund.processed_at)}</td>
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
