use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Modal frame container (overlay + positioned surface).
///
/// Renders no header or buttons; dialogs bring their own.
#[component]
pub fn ModalFrame(
    /// Called on overlay click.
    on_close: Callback<()>,
    /// z-index for overlay stacking.
    z_index: i32,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional, into)]
    modal_class: String,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if press and release both happened on the overlay,
    // so selecting text inside the modal never closes it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let class = if modal_class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {}", modal_class)
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {};", z_index)
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=class style="position: relative;" on:click=|ev| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
