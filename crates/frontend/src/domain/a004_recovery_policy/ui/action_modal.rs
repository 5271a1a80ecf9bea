use crate::domain::a004_recovery_policy::api;
use crate::shared::mutation::MutationState;
use crate::shared::notify::NotifyService;
use contracts::domain::a004_recovery_policy::response::RecoveryPolicyResponse;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyAction {
    Pause,
    Resume,
}

impl PolicyAction {
    fn title(self) -> &'static str {
        match self {
            PolicyAction::Pause => "Pause recovery policy",
            PolicyAction::Resume => "Resume recovery policy",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            PolicyAction::Pause => "Pause",
            PolicyAction::Resume => "Resume",
        }
    }

    fn success_text(self) -> &'static str {
        match self {
            PolicyAction::Pause => "Policy paused successfully",
            PolicyAction::Resume => "Policy resumed successfully",
        }
    }

    fn hint(self) -> &'static str {
        match self {
            PolicyAction::Pause => {
                "Prepayments stop being withheld against debt until the policy is resumed."
            }
            PolicyAction::Resume => "Debt withholding starts again on the next prepayment.",
        }
    }
}

/// Pause/resume confirmation for one recovery policy.
///
/// Success closes the dialog (toast + one-shot list refresh via `on_done`);
/// failure keeps it open with the error inline and the list untouched.
#[component]
pub fn PolicyActionModal(
    policy: RecoveryPolicyResponse,
    action: PolicyAction,
    on_done: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");
    let mutation = RwSignal::new(MutationState::default());

    let policy_id = policy.id;
    let policy_label = format!("{} (#{})", policy.name, policy.id);

    let busy = Signal::derive(move || mutation.with(|m| m.is_busy()));

    let confirm = move |_: ev::MouseEvent| {
        if mutation.with_untracked(|m| m.is_busy()) {
            return;
        }
        mutation.update(|m| m.start());
        spawn_local(async move {
            let result = match action {
                PolicyAction::Pause => api::pause_policy(policy_id).await,
                PolicyAction::Resume => api::resume_policy(policy_id).await,
            };
            match result {
                Ok(reply) => {
                    let text = reply
                        .message
                        .unwrap_or_else(|| action.success_text().to_string());
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
                <h3>{action.title()}</h3>
            </div>
            <p class="modal__text">{policy_label}</p>
            <p class="modal__text modal__text--muted">{action.hint()}</p>
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
                        {action.verb()}
                    </Button>
                </Space>
            </div>
        </div>
    }
}
