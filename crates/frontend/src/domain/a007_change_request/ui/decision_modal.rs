use crate::domain::a007_change_request::api;
use crate::shared::mutation::MutationState;
use crate::shared::notify::NotifyService;
use contracts::domain::a007_change_request::request::DecideChangeRequest;
use contracts::domain::a007_change_request::response::ChangeRequestResponse;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Decline,
}

impl Decision {
    fn title(self) -> &'static str {
        match self {
            Decision::Approve => "Approve change request",
            Decision::Decline => "Decline change request",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Decision::Approve => "Approve",
            Decision::Decline => "Decline",
        }
    }

    fn success_text(self) -> &'static str {
        match self {
            Decision::Approve => "Change request approved",
            Decision::Decline => "Change request declined",
        }
    }
}

/// Review dialog deciding exactly one change request.
#[component]
pub fn ChangeRequestDecisionModal(
    request: ChangeRequestResponse,
    decision: Decision,
    on_done: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");
    let mutation = RwSignal::new(MutationState::default());
    let note = RwSignal::new(String::new());

    let request_id = request.id;
    let summary = format!(
        "{}: {} → {}",
        request.change_kind, request.current_value, request.requested_value
    );
    let account_line = format!("{} — {}", request.account_number, request.customer_name);
    let reason = request.reason.clone();

    let busy = Signal::derive(move || mutation.with(|m| m.is_busy()));

    let confirm = move |_: ev::MouseEvent| {
        if mutation.with_untracked(|m| m.is_busy()) {
            return;
        }
        mutation.update(|m| m.start());
        let note_val = note.get_untracked();
        let dto = DecideChangeRequest {
            note: if note_val.trim().is_empty() {
                None
            } else {
                Some(note_val)
            },
        };
        spawn_local(async move {
            let result = match decision {
                Decision::Approve => api::approve_change_request(request_id, dto).await,
                Decision::Decline => api::decline_change_request(request_id, dto).await,
            };
            match result {
                Ok(reply) => {
                    let text = reply
                        .message
                        .unwrap_or_else(|| decision.success_text().to_string());
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
                <h3>{decision.title()}</h3>
            </div>
            <p class="modal__text">{account_line}</p>
            <p class="modal__text">{summary}</p>
            {reason.map(|r| view! {
                <p class="modal__text modal__text--muted">{format!("Customer reason: {r}")}</p>
            })}
            <div class="form__group">
                <label class="form__label">"Reviewer note"</label>
                <Textarea value=note placeholder="Optional note for customer care" attr:rows=3 />
            </div>
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
                        {decision.verb()}
                    </Button>
                </Space>
            </div>
        </div>
    }
}
