use crate::domain::a001_agent::api;
use crate::shared::mutation::MutationState;
use crate::shared::notify::NotifyService;
use contracts::domain::a001_agent::request::SetAgentStatusRequest;
use contracts::domain::a001_agent::response::AgentResponse;
use contracts::enums::AgentStatus;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Confirmation dialog for a single agent status transition.
///
/// On success: toast, close (via `on_done`), and the owning list refreshes.
/// On failure the dialog stays open with the error inline.
#[component]
pub fn AgentStatusModal(
    agent: AgentResponse,
    target: AgentStatus,
    on_done: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");
    // Fresh per modal instance, and reset again on close so no outcome
    // leaks into the next one.
    let mutation = RwSignal::new(MutationState::default());
    let reason = RwSignal::new(String::new());

    let agent_id = agent.id;
    let agent_label = format!("{} — {}", agent.code, agent.full_name);

    let (title, verb, success_text) = match target {
        AgentStatus::Active => ("Reactivate agent", "Reactivate", "Agent reactivated"),
        AgentStatus::Suspended => ("Suspend agent", "Suspend", "Agent suspended"),
        AgentStatus::Deactivated => ("Deactivate agent", "Deactivate", "Agent deactivated"),
    };

    let busy = Signal::derive(move || mutation.with(|m| m.is_busy()));

    let confirm = move |_: ev::MouseEvent| {
        if mutation.with_untracked(|m| m.is_busy()) {
            return;
        }
        mutation.update(|m| m.start());
        let note = reason.get_untracked();
        let dto = SetAgentStatusRequest {
            status: target,
            reason: if note.trim().is_empty() { None } else { Some(note) },
        };
        spawn_local(async move {
            match api::set_agent_status(agent_id, dto).await {
                Ok(reply) => {
                    let text = reply.message.unwrap_or_else(|| success_text.to_string());
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
                <h3>{title}</h3>
            </div>
            <p class="modal__text">{agent_label}</p>
            <div class="form__group">
                <label class="form__label">"Reason"</label>
                <Textarea value=reason placeholder="Optional audit note" attr:rows=3 />
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
                        {verb}
                    </Button>
                </Space>
            </div>
        </div>
    }
}
