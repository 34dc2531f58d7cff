//! Confirmation dialog host.

use leptos::prelude::*;

use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

/// Shows `children` in a modal with the warning accent while `open` is true.
///
/// The body decides what confirming means; the host only opens and closes.
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    open: Signal<bool>,
    /// Overlay click and the close button
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = StoredValue::new(children);

    view! {
        <Show when=move || open.get()>
            <ModalFrame on_close=on_close z_index=1100>
                <div class="confirm-dialog">
                    <button
                        type="button"
                        class="confirm-dialog__close"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                    <div class="confirm-dialog__accent">{icon("alert-triangle")}</div>
                    <div class="confirm-dialog__body">
                        {children.with_value(|c| c())}
                    </div>
                </div>
            </ModalFrame>
        </Show>
    }
}

/// Standard body: title, message and Cancel / Confirm buttons.
#[component]
pub fn ConfirmBody(
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: Signal<String>,
    #[prop(optional, into)]
    confirm_label: MaybeProp<String>,
    /// Confirm button variant, "primary" unless destructive
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_busy = Signal::derive(move || busy.get().unwrap_or(false));
    let confirm_label = move || confirm_label.get().unwrap_or_else(|| "Confirm".to_string());

    view! {
        <h3 class="confirm-dialog__title">{title}</h3>
        <p class="confirm-dialog__message">{message}</p>
        <div class="confirm-dialog__actions">
            <Button
                variant="secondary"
                disabled=is_busy
                on_click=Callback::new(move |_| on_cancel.run(()))
            >
                "Cancel"
            </Button>
            <Button
                variant=Signal::derive(move || variant.get().unwrap_or_else(|| "primary".to_string()))
                loading=is_busy
                on_click=Callback::new(move |_| on_confirm.run(()))
            >
                {confirm_label}
            </Button>
        </div>
    }
}
