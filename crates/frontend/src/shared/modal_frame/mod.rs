use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Where the surface sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FramePlacement {
    /// Centered dialog
    #[default]
    Center,
    /// Full-height panel docked to the right edge
    Drawer,
}

impl FramePlacement {
    fn surface_class(&self) -> &'static str {
        match self {
            FramePlacement::Center => "modal",
            FramePlacement::Drawer => "modal modal--drawer",
        }
    }
}

/// Overlay + positioned surface shared by confirmation dialogs and drawers.
///
/// Renders no header or buttons; callers bring their own.
#[component]
pub fn ModalFrame(
    /// Called when the overlay is clicked.
    on_close: Callback<()>,
    #[prop(optional)]
    placement: FramePlacement,
    /// Close when clicking on the overlay (default: true).
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    /// z-index for overlay stacking (default: 1000).
    #[prop(optional)]
    z_index: Option<i32>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let z_index = z_index.unwrap_or(1000);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Press and release must both land on the overlay, so a text selection
    // that ends outside the surface does not close it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close =
            close_on_overlay && overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // next tick: the overlay may be removed during its own click dispatch
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    view! {
        <div
            class="modal-overlay"
            class:modal-overlay--drawer=placement == FramePlacement::Drawer
            style=format!("z-index: {z_index};")
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class=placement.surface_class()
                role="dialog"
                aria-modal="true"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
