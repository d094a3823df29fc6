use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay + dialog surface for one entry of the modal stack.
///
/// A click on the dimmed backdrop closes this overlay only; clicks inside the
/// surface never reach the backdrop.
#[component]
pub fn ModalFrame(
    /// Called when the backdrop is clicked.
    on_close: Callback<()>,
    /// z-index for overlay stacking (default: 1000).
    #[prop(optional)]
    z_index: Option<i32>,
    /// Only the topmost overlay takes input; lower ones are marked `inert`.
    #[prop(into)]
    is_topmost: Signal<bool>,
    /// Extra style for the modal surface (`div.modal-content`).
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

    // Close only if both press and release happened on the backdrop itself,
    // so a text selection dragged out of the dialog does not dismiss it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.try_run(());
            });
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let modal_style = modal_style.unwrap_or_default();

    view! {
        <div
            class="modal-overlay"
            class:modal-overlay--background=move || !is_topmost.get()
            style=format!("z-index: {z_index};")
            prop:inert=move || !is_topmost.get()
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class="modal-content"
                role="dialog"
                aria-modal="true"
                style=modal_style
                on:click=stop_propagation
            >
                {children()}
            </div>
        </div>
    }
}
