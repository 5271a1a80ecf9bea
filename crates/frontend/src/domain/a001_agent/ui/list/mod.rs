pub mod state;

use self::state::create_state;
use super::details_modal::AgentDetailsModal;
use super::status_modal::AgentStatusModal;
use crate::domain::a001_agent::api;
use crate::shared::components::badge::Badge;
use crate::shared::components::loading_skeleton::LoadingSkeleton;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{format_money, format_timestamp};
use crate::shared::export::{export_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, sort_list, Sortable};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::notify::NotifyService;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_agent::response::AgentResponse;
use contracts::enums::AgentStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

const REGIONS: [&str; 5] = ["North", "South", "East", "West", "Central"];

impl Sortable for AgentResponse {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.to_lowercase().cmp(&other.code.to_lowercase()),
            "full_name" => self
                .full_name
                .to_lowercase()
                .cmp(&other.full_name.to_lowercase()),
            "region" => self.region.cmp(&other.region),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            "wallet_balance" => self
                .wallet_balance
                .partial_cmp(&other.wallet_balance)
                .unwrap_or(Ordering::Equal),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

impl CsvExportable for AgentResponse {
    fn headers() -> Vec<&'static str> {
        vec![
            "Code",
            "Name",
            "Phone",
            "Region",
            "Status",
            "Wallet balance",
            "Meters",
            "Created",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.full_name.clone(),
            self.phone.clone(),
            self.region.clone(),
            self.status.display_name().to_string(),
            format!("{:.2}", self.wallet_balance),
            self.meters_assigned.to_string(),
            format_timestamp(&self.created_at),
        ]
    }
}

fn status_variant(status: AgentStatus) -> &'static str {
    match status {
        AgentStatus::Active => "success",
        AgentStatus::Suspended => "warning",
        AgentStatus::Deactivated => "neutral",
    }
}

#[component]
pub fn AgentList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");
    let state = create_state();

    let fetch = move || {
        let Some(ticket) = state.try_update(|s| s.collection.begin()) else {
            return;
        };
        let (filters, page) = state.with_untracked(|s| (s.filters.applied().clone(), s.page));
        spawn_local(async move {
            let result = api::fetch_agents(&filters, page).await;
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

    // Dropdowns apply immediately; the search box waits for Apply.
    let set_status_filter = move |value: String| {
        state.update(|s| {
            s.filters
                .set_and_apply(|f| f.status = AgentStatus::from_str_opt(&value));
            s.page = s.page.first();
        });
        fetch();
    };

    let set_region_filter = move |value: String| {
        state.update(|s| {
            s.filters.set_and_apply(|f| f.region = value);
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

    let open_status_modal = move |agent: AgentResponse, target: AgentStatus| {
        modal_stack.push(move |handle| {
            let agent = agent.clone();
            view! {
                <AgentStatusModal
                    agent=agent
                    target=target
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

    let open_details_modal = move |agent_id: uuid::Uuid| {
        modal_stack.push(move |handle| {
            view! {
                <AgentDetailsModal
                    agent_id=agent_id
                    on_close=Callback::new({
                        let handle = handle.clone();
                        move |_| handle.close()
                    })
                />
            }
            .into_any()
        });
    };

    let export_rows = move |_| {
        let rows = state.with_untracked(|s| s.collection.rows.clone());
        if let Err(e) = export_csv(&rows, "agents.csv") {
            notify.error(format!("Export failed: {e}"));
        }
    };

    let meta = Signal::derive(move || state.with(|s| s.collection.meta));

    fetch();

    view! {
        <PageFrame page_id="a001_agent--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2>"Agents"</h2>
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
                    <input
                        type="text"
                        class="filters__search"
                        placeholder="Code, name or phone..."
                        prop:value=move || state.with(|s| s.filters.editing().search.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.filters.edit(|f| f.search = value));
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
                        {AgentStatus::all().into_iter().map(|s| {
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
                        on:change=move |ev| set_region_filter(event_target_value(&ev))
                    >
                        <option value="">"All regions"</option>
                        {REGIONS.iter().map(|&r| {
                            view! {
                                <option
                                    value=r
                                    selected=move || state.with(|st| st.filters.applied().region == r)
                                >
                                    {r}
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
                                    <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("code")>
                                        "Code"
                                        <span class=move || get_sort_class(&state.with(|s| s.sort_field.clone()), "code")>
                                            {move || state.with(|s| get_sort_indicator(&s.sort_field, "code", s.sort_ascending))}
                                        </span>
                                    </th>
                                    <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("full_name")>
                                        "Name"
                                        <span class=move || get_sort_class(&state.with(|s| s.sort_field.clone()), "full_name")>
                                            {move || state.with(|s| get_sort_indicator(&s.sort_field, "full_name", s.sort_ascending))}
                                        </span>
                                    </th>
                                    <th class="table__header-cell">"Phone"</th>
                                    <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("region")>
                                        "Region"
                                        <span class=move || get_sort_class(&state.with(|s| s.sort_field.clone()), "region")>
                                            {move || state.with(|s| get_sort_indicator(&s.sort_field, "region", s.sort_ascending))}
                                        </span>
                                    </th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("wallet_balance")>
                                        "Wallet"
                                        <span class=move || get_sort_class(&state.with(|s| s.sort_field.clone()), "wallet_balance")>
                                            {move || state.with(|s| get_sort_indicator(&s.sort_field, "wallet_balance", s.sort_ascending))}
                                        </span>
                                    </th>
                                    <th class="table__header-cell">"Meters"</th>
                                    <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("created_at")>
                                        "Created"
                                        <span class=move || get_sort_class(&state.with(|s| s.sort_field.clone()), "created_at")>
                                            {move || state.with(|s| get_sort_indicator(&s.sort_field, "created_at", s.sort_ascending))}
                                        </span>
                                    </th>
                                    <th class="table__header-cell"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || sorted_rows().into_iter().map(|agent| {
                                    let agent_for_action = agent.clone();
                                    let agent_id = agent.id;
                                    let status = agent.status;
                                    let (action_icon, action_title, target) = match status {
                                        AgentStatus::Deactivated => ("play", "Reactivate", AgentStatus::Active),
                                        _ => ("pause", "Deactivate", AgentStatus::Deactivated),
                                    };
                                    view! {
                                        <tr
                                            class="table__row table__row--clickable"
                                            on:click=move |_| open_details_modal(agent_id)
                                        >
                                            <td class="table__cell">{agent.code.clone()}</td>
                                            <td class="table__cell">{agent.full_name.clone()}</td>
                                            <td class="table__cell">{agent.phone.clone()}</td>
                                            <td class="table__cell">{agent.region.clone()}</td>
                                            <td class="table__cell">
                                                <Badge variant=status_variant(status).to_string()>{status.display_name()}</Badge>
                                            </td>
                                            <td class="table__cell table__cell--number">{format_money(agent.wallet_balance)}</td>
                                            <td class="table__cell table__cell--number">{agent.meters_assigned}</td>
                                            <td class="table__cell">{format_timestamp(&agent.created_at)}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--ghost"
                                                    title=action_title
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        open_status_modal(agent_for_action.clone(), target);
                                                    }
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
