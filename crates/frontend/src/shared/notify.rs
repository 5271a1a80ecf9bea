//! Toast notifications.
//!
//! Same shape as the modal stack: a copyable service over signal state,
//! provided once in the app root, plus a host component that renders the
//! current stack. Success and info toasts dismiss themselves; error toasts
//! stay until clicked away.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: u64,
    kind: ToastKind,
    text: String,
}

#[derive(Clone, Copy)]
pub struct NotifyService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl NotifyService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastKind::Success, text.into(), Some(AUTO_DISMISS_MS));
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(ToastKind::Info, text.into(), Some(AUTO_DISMISS_MS));
    }

    /// Errors are sticky: the operator dismisses them explicitly.
    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastKind::Error, text.into(), None);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|stack| stack.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, text: String, auto_dismiss: Option<u32>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|stack| {
            stack.push(Toast { id, kind, text });
        });

        if let Some(ms) = auto_dismiss {
            let svc = *self;
            spawn_local(async move {
                TimeoutFuture::new(ms).await;
                svc.dismiss(id);
            });
        }
    }
}

impl Default for NotifyService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the toast stack. Must be mounted exactly once, in the app root.
#[component]
pub fn NotifyHost() -> impl IntoView {
    let svc = use_context::<NotifyService>()
        .expect("NotifyService not provided in context (provide it in app root)");

    view! {
        <div class="toast-stack">
            <For
                each=move || svc.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| svc.dismiss(id)>
                            {toast.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
