pub mod state;

use self::state::create_state;
use super::token_modal::MeterTokenModal;
use crate::domain::a006_meter::api;
use crate::shared::components::badge::Badge;
use crate::shared::components::loading_skeleton::LoadingSkeleton;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a006_meter::response::MeterResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn MeterList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let state = create_state();

    let fetch = move || {
        let Some(ticket) = state.try_update(|s| s.collection.begin()) else {
            return;
        };
        let (filters, page) = state.with_untracked(|s| (s.filters.applied().clone(), s.page));
        spawn_local(async move {
            let result = api::fetch_meters(&filters, page).await;
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

    let set_active_only = move |checked: bool| {
        state.update(|s| {
            s.filters.set_and_apply(|f| f.active_only = checked);
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

    let open_token_modal = move |meter: MeterResponse| {
        modal_stack.push(move |handle| {
            let meter = meter.clone();
            view! {
                <MeterTokenModal
                    meter=meter
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
        <PageFrame page_id="a006_meter--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2>"Meters"</h2>
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
                        placeholder="Serial or account number..."
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
                    <label class="filters__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || state.with(|s| s.filters.applied().active_only)
                            on:change=move |ev| set_active_only(event_target_checked(&ev))
                        />
                        "Active only"
                    </label>
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
                                    <th class="table__header-cell">"Serial"</th>
                                    <th class="table__header-cell">"Account"</th>
                                    <th class="table__header-cell">"Customer"</th>
                                    <th class="table__header-cell">"Model"</th>
                                    <th class="table__header-cell">"State"</th>
                                    <th class="table__header-cell">"Installed"</th>
                                    <th class="table__header-cell"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || state.with(|s| s.collection.rows.clone()).into_iter().map(|meter| {
                                    let meter_for_token = meter.clone();
                                    let is_active = meter.is_active;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{meter.serial_number.clone()}</td>
                                            <td class="table__cell">{meter.account_number.clone()}</td>
                                            <td class="table__cell">{meter.customer_name.clone()}</td>
                                            <td class="table__cell">{meter.model.clone()}</td>
                                            <td class="table__cell">
                                                {if is_active {
                                                    view! { <Badge variant="success".to_string()>"Active"</Badge> }.into_any()
                                                } else {
                                                    view! { <Badge variant="neutral".to_string()>"Inactive"</Badge> }.into_any()
                                                }}
                                            </td>
                                            <td class="table__cell">{format_timestamp(&meter.installed_at)}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--ghost"
                                                    title="Generate test token"
                                                    disabled=!is_active
                                                    on:click=move |_| open_token_modal(meter_for_token.clone())
                                                >
                                                    {icon("key")}
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
