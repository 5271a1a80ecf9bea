use crate::domain::a001_agent::api;
use crate::shared::components::badge::Badge;
use crate::shared::date_utils::{format_money, format_timestamp};
use contracts::domain::a001_agent::response::AgentResponse;
use contracts::enums::AgentStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use uuid::Uuid;

fn status_variant(status: AgentStatus) -> &'static str {
    match status {
        AgentStatus::Active => "success",
        AgentStatus::Suspended => "warning",
        AgentStatus::Deactivated => "neutral",
    }
}

/// Read-only agent card. Fetches fresh data by id rather than reusing the
/// row, so the dialog reflects changes made since the list last loaded.
#[component]
pub fn AgentDetailsModal(agent_id: Uuid, on_close: Callback<()>) -> impl IntoView {
    let agent = RwSignal::new(None::<AgentResponse>);
    let error = RwSignal::new(None::<String>);

    spawn_local(async move {
        match api::fetch_agent(agent_id).await {
            Ok(data) => agent.set(Some(data)),
            Err(e) => error.set(Some(e)),
        }
    });

    view! {
        <div class="modal__body">
            <div class="modal__header">
                <h3>"Agent details"</h3>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || {
                let Some(a) = agent.get() else {
                    return view! { <p class="modal__text modal__text--muted">"Loading..."</p> }
                        .into_any();
                };
                let status = a.status;
                view! {
                    <div class="detail-grid">
                        <div class="detail-grid__row">
                            <span class="detail-grid__label">"Code"</span>
                            <span class="detail-grid__value">{a.code.clone()}</span>
                        </div>
                        <div class="detail-grid__row">
                            <span class="detail-grid__label">"Name"</span>
                            <span class="detail-grid__value">{a.full_name.clone()}</span>
                        </div>
                        <div class="detail-grid__row">
                            <span class="detail-grid__label">"Phone"</span>
                            <span class="detail-grid__value">{a.phone.clone()}</span>
                        </div>
                        <div class="detail-grid__row">
                            <span class="detail-grid__label">"Region"</span>
                            <span class="detail-grid__value">{a.region.clone()}</span>
                        </div>
                        <div class="detail-grid__row">
                            <span class="detail-grid__label">"Status"</span>
                            <span class="detail-grid__value">
                                <Badge variant=status_variant(status).to_string()>
                                    {status.display_name()}
                                </Badge>
                            </span>
                        </div>
                        <div class="detail-grid__row">
                            <span class="detail-grid__label">"Wallet balance"</span>
                            <span class="detail-grid__value">{format_money(a.wallet_balance)}</span>
                        </div>
                        <div class="detail-grid__row">
                            <span class="detail-grid__label">"Meters assigned"</span>
                            <span class="detail-grid__value">{a.meters_assigned}</span>
                        </div>
                        <div class="detail-grid__row">
                            <span class="detail-grid__label">"Created"</span>
                            <span class="detail-grid__value">{format_timestamp(&a.created_at)}</span>
                        </div>
                    </div>
                }
                .into_any()
            }}

            <div class="modal__footer">
                <Space>
                    {view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| on_close.run(())
                        >
                            "Close"
                        </Button>
                    }.into_any()}
                </Space>
            </div>
        </div>
    }
}
