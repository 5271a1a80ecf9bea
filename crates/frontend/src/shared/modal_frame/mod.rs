use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Modal frame container (overlay + positioned surface).
///
/// Renders no header or buttons of its own; the pushed content draws its
/// own compact header so dialogs look the same everywhere.
#[component]
pub fn ModalFrame(
    /// Called when the modal should close (overlay click, close by host).
    on_close: Callback<()>,
    /// z-index for overlay stacking (default: 1000).
    #[prop(optional)]
    z_index: Option<i32>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional)]
    modal_class: Option<String>,
    /// Extra style for the modal surface (`div.modal`).
    #[prop(optional)]
    modal_style: Option<String>,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release landed on the overlay itself,
    // otherwise selecting text inside the modal and releasing outside
    // would dismiss it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Defer to the next tick: removing the overlay synchronously
            // during its own click dispatch trips Leptos event delegation.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let modal_style_full = move || {
        let extra = modal_style.clone().unwrap_or_default();
        if extra.is_empty() {
            "position: relative;".to_string()
        } else {
            format!("position: relative; {extra}")
        }
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class=move || {
                    if let Some(cls) = modal_class.clone() {
                        format!("modal {cls}")
                    } else {
                        "modal".to_string()
                    }
                }
                style=modal_style_full
                on:click=stop_propagation
            >
                {children()}
            </div>
        </div>
    }
}
