use crate::domain::a006_meter::api;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::icons::icon;
use crate::shared::mutation::MutationState;
use crate::shared::notify::NotifyService;
use contracts::domain::a006_meter::response::MeterResponse;
use contracts::shared::token;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Test-token dialog for one meter.
///
/// The backend mints the token; the client re-verifies the check digit
/// before showing it. A token that fails verification is treated as a
/// client-side formatting error: surfaced in the dialog and as a toast,
/// never rendered to the operator.
#[component]
pub fn MeterTokenModal(meter: MeterResponse, on_cancel: Callback<()>) -> impl IntoView {
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");
    let mutation = RwSignal::new(MutationState::default());
    let generated = RwSignal::new(None::<String>);

    let meter_id = meter.id;
    let meter_label = format!("{} — account {}", meter.serial_number, meter.account_number);

    let busy = Signal::derive(move || mutation.with(|m| m.is_busy()));

    let generate = move |_: ev::MouseEvent| {
        if mutation.with_untracked(|m| m.is_busy()) {
            return;
        }
        mutation.update(|m| m.start());
        generated.set(None);
        spawn_local(async move {
            match api::generate_test_token(meter_id).await {
                Ok(reply) => match token::verify(&reply.token) {
                    Ok(()) => {
                        generated.set(Some(token::group(&reply.token)));
                        mutation.update(|m| m.succeed("Test token generated"));
                        notify.success("Test token generated");
                    }
                    Err(e) => {
                        let text = format!("Token failed verification: {e}");
                        mutation.update(|m| m.fail(text.clone()));
                        notify.error(text);
                    }
                },
                Err(e) => {
                    mutation.update(|m| m.fail(e));
                }
            }
        });
    };

    let copy_token = move |_| {
        if let Some(tok) = generated.get_untracked() {
            copy_to_clipboard_with_callback(&tok, move || {
                notify.info("Token copied to clipboard");
            });
        }
    };

    on_cleanup(move || {
        mutation.try_update(|m| m.reset());
    });

    view! {
        <div class="modal__body">
            <div class="modal__header">
                <h3>"Generate test token"</h3>
            </div>
            <p class="modal__text">{meter_label}</p>
            <p class="modal__text modal__text--muted">
                "A test token exercises the meter keypad and display without crediting any energy."
            </p>

            {move || generated.get().map(|tok| view! {
                <div class="token-display">
                    <span class="token-display__value">{tok}</span>
                    <button class="button button--ghost" title="Copy token" on:click=copy_token>
                        {icon("copy")}
                    </button>
                </div>
            })}

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
                        "Close"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=generate
                        disabled=busy
                    >
                        {icon("key")}
                        " Generate"
                    </Button>
                </Space>
            </div>
        </div>
    }
}
