pub mod state;

use self::state::create_state;
use crate::domain::a003_debt_entry::api;
use crate::shared::components::badge::Badge;
use crate::shared::components::loading_skeleton::LoadingSkeleton;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{format_date, format_money};
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_debt_entry::response::DebtEntryResponse;
use contracts::enums::DebtEntryStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

impl Sortable for DebtEntryResponse {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "account_number" => self.account_number.cmp(&other.account_number),
            "customer_name" => self
                .customer_name
                .to_lowercase()
                .cmp(&other.customer_name.to_lowercase()),
            "amount_due" => self
                .amount_due
                .partial_cmp(&other.amount_due)
                .unwrap_or(Ordering::Equal),
            "due_date" => self.due_date.cmp(&other.due_date),
            "days_overdue" => self.days_overdue.cmp(&other.days_overdue),
            _ => Ordering::Equal,
        }
    }
}

fn status_variant(status: DebtEntryStatus) -> &'static str {
    match status {
        DebtEntryStatus::Pending => "neutral",
        DebtEntryStatus::Approved => "primary",
        DebtEntryStatus::InRecovery => "warning",
        DebtEntryStatus::Settled => "success",
        DebtEntryStatus::WrittenOff => "error",
    }
}

#[component]
pub fn DebtEntryList() -> impl IntoView {
    let state = create_state();

    let fetch = move || {
        let Some(ticket) = state.try_update(|s| s.collection.begin()) else {
            return;
        };
        let (filters, page) = state.with_untracked(|s| (s.filters.applied().clone(), s.page));
        spawn_local(async move {
            let result = api::fetch_debt_entries(&filters, page).await;
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
                .set_and_apply(|f| f.status = DebtEntryStatus::from_str_opt(&value));
            s.page = s.page.first();
        });
        fetch();
    };

    let set_period_filter = move |value: String| {
        state.update(|s| {
            s.filters.set_and_apply(|f| {
                f.billing_period_id = if value.is_empty() { None } else { Some(value) };
            });
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

    // The last few closed periods; the backend is authoritative for what a
    // period contains, the dropdown is only a convenience.
    let period_options = ["2026-07", "2026-06", "2026-05", "2026-04"];

    let meta = Signal::derive(move || state.with(|s| s.collection.meta));

    fetch();

    view! {
        <PageFrame page_id="a003_debt_entry--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2>"Debt entries"</h2>
                <div class="page__actions">
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
                        placeholder="Account number..."
                        prop:value=move || state.with(|s| s.filters.editing().account.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.filters.edit(|f| f.account = value));
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
                        {DebtEntryStatus::all().into_iter().map(|s| {
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
                    <select
                        class="filters__select"
                        on:change=move |ev| set_period_filter(event_target_value(&ev))
                    >
                        <option value="">"All periods"</option>
                        {period_options.iter().map(|&p| {
                            view! {
                                <option
                                    value=p
                                    selected=move || state.with(|st| st.filters.applied().billing_period_id.as_deref() == Some(p))
                                >
                                    {p}
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
                                    <th class="table__header-cell">"Period"</th>
                                    <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("amount_due")>
                                        "Amount due"
                                        <span class=move || get_sort_class(&state.with(|s| s.sort_field.clone()), "amount_due")>
                                            {move || state.with(|s| get_sort_indicator(&s.sort_field, "amount_due", s.sort_ascending))}
                                        </span>
                                    </th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("due_date")>
                                        "Due date"
                                        <span class=move || get_sort_class(&state.with(|s| s.sort_field.clone()), "due_date")>
                                            {move || state.with(|s| get_sort_indicator(&s.sort_field, "due_date", s.sort_ascending))}
                                        </span>
                                    </th>
                                    <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("days_overdue")>
                                        "Overdue"
                                        <span class=move || get_sort_class(&state.with(|s| s.sort_field.clone()), "days_overdue")>
                                            {move || state.with(|s| get_sort_indicator(&s.sort_field, "days_overdue", s.sort_ascending))}
                                        </span>
                                    </th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || sorted_rows().into_iter().map(|entry| {
                                    let status = entry.status;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{entry.account_number.clone()}</td>
                                            <td class="table__cell">{entry.customer_name.clone()}</td>
                                            <td class="table__cell">{entry.billing_period_id.clone()}</td>
                                            <td class="table__cell table__cell--number">{format_money(entry.amount_due)}</td>
                                            <td class="table__cell">
                                                <Badge variant=status_variant(status).to_string()>{status.display_name()}</Badge>
                                            </td>
                                            <td class="table__cell">{format_date(&entry.due_date)}</td>
                                            <td class="table__cell table__cell--number">
                                                {if entry.days_overdue > 0 {
                                                    format!("{} d", entry.days_overdue)
                                                } else {
                                                    "—".to_string()
                                                }}
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
