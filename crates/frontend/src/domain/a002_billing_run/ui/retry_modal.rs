use crate::domain::a002_billing_run::api;
use crate::shared::mutation::MutationState;
use crate::shared::notify::NotifyService;
use contracts::domain::a002_billing_run::response::BillingRunResponse;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Confirmation dialog for re-queuing a failed print run.
#[component]
pub fn BillingRunRetryModal(
    run: BillingRunResponse,
    on_done: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");
    let mutation = RwSignal::new(MutationState::default());

    let run_id = run.id;
    let run_label = format!("{} — {}", run.billing_period, run.region);
    let last_error = run.error_message.clone().unwrap_or_else(|| "unknown".to_string());

    let busy = Signal::derive(move || mutation.with(|m| m.is_busy()));

    let confirm = move |_: ev::MouseEvent| {
        if mutation.with_untracked(|m| m.is_busy()) {
            return;
        }
        mutation.update(|m| m.start());
        spawn_local(async move {
            match api::retry_run(run_id).await {
                Ok(reply) => {
                    let text = reply
                        .message
                        .unwrap_or_else(|| "Billing run queued for retry".to_string());
                    mutation.update(|m| m.succeed(text.clone()));
                    notify.success(text);
                    on_done.run(());
                }
                Err(e) => {
                    mutation.update(|m| m.fail(e));
                }
            }
        });
    };

    on_cleanup(move || {
        mutation.try_update(|m| m.reset());
    });

    view! {
        <div class="modal__body">
            <div class="modal__header">
                <h3>"Retry billing run"</h3>
            </div>
            <p class="modal__text">{run_label}</p>
            <p class="modal__text modal__text--muted">{format!("Last error: {last_error}")}</p>
            {move || mutation.with(|m| m.error().map(|e| e.to_string())).map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}
            <div class="modal__footer">
                <Space>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                        disabled=busy
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=confirm
                        disabled=busy
                    >
                        "Retry"
                    </Button>
                </Space>
            </div>
        </div>
    }
}
