use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

/// Style/class overrides for the modal surface.
#[derive(Clone, Default)]
pub struct ModalOptions {
    pub style: Option<String>,
    pub class: Option<String>,
}

impl ModalOptions {
    pub fn wide() -> Self {
        Self {
            style: Some("max-width: min(900px, 95vw); width: min(900px, 95vw);".to_string()),
            class: None,
        }
    }
}

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>,
    options: ModalOptions,
}

/// A handle returned by [`ModalStackService::push`].
///
/// Can be cloned into event handlers so the modal can close itself.
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Centralized modal stack.
///
/// - push/close/pop
/// - Escape closes only the topmost modal (handled by [`ModalHost`])
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            // Defer to the next tick so a modal removed during its own DOM
            // event dispatch does not leave a dropped closure behind.
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        !self.stack.get().is_empty()
    }

    /// Push a new modal onto the stack.
    ///
    /// `builder` receives a [`ModalHandle`] so the modal can close itself.
    pub fn push<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_with(ModalOptions::default(), builder)
    }

    /// Push with style/class overrides for the modal surface.
    pub fn push_with<F>(&self, options: ModalOptions, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        let handle = ModalHandle { id, svc: *self };
        let builder = Arc::new(builder) as Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder,
                options,
            });
        });

        handle
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| {
            s.retain(|e| e.id != id);
        });
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    pub fn pop(&self) {
        self.stack.update(|s| {
            s.pop();
        });
    }

    pub fn pop_deferred(&self) {
        self.defer(|svc| svc.pop());
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the modal stack at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    // Global Escape handler: closes only the topmost modal.
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && svc.is_open() {
                    svc.pop_deferred();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // ModalHost lives for the whole app lifetime; keep the closure alive.
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=move || {
                    svc.stack
                        .get()
                        .into_iter()
                        .enumerate()
                        .collect::<Vec<(usize, ModalEntry)>>()
                }
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    // z-index follows the current stack order
                    let z_index = 1000 + idx as i32;
                    let on_close = {
                        let id = entry.id;
                        Callback::new(move |_| {
                            svc.close_deferred(id);
                        })
                    };

                    let handle = ModalHandle { id: entry.id, svc };
                    let content = (entry.builder)(handle);

                    view! {
                        <ModalFrame
                            z_index=z_index
                            on_close=on_close
                            modal_style=entry.options.style.clone().unwrap_or_default()
                            modal_class=entry.options.class.clone().unwrap_or_default()
                        >
                            {content}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}
