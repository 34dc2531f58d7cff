use contracts::shared::validation::FormValues;
use leptos::prelude::*;

use crate::shared::components::ui::Button;
use crate::shared::confirm_dialog::{ConfirmBody, ConfirmDialog};
use crate::shared::forms::{ConfirmFlow, DiscardGuard, DrawerFormModel};
use crate::shared::icons::icon;
use crate::shared::modal_frame::{FramePlacement, ModalFrame};

/// Side panel hosting one drawer form.
///
/// Wires the model's flows to the UI: Submit validates and asks for
/// confirmation, confirming hands the values to `on_confirmed`, closing a
/// dirty form asks before discarding.
#[component]
pub fn DrawerShell(
    model: DrawerFormModel,
    #[prop(into)]
    title: Signal<String>,
    #[prop(optional, into)]
    submit_label: MaybeProp<String>,
    /// Title of the confirmation step
    #[prop(into)]
    confirm_title: String,
    #[prop(into)]
    confirm_message: Signal<String>,
    /// Receives the validated values; must end with `model.finish(..)`
    on_confirmed: Callback<FormValues>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = StoredValue::new(children);
    let confirm_title = StoredValue::new(confirm_title);
    let submitting = model.is_submitting();
    let submit_label = move || submit_label.get().unwrap_or_else(|| "Save".to_string());

    let confirm_open = Signal::derive(move || model.flow.get().is_dialog_open());
    let discard_open = Signal::derive(move || model.guard.get() == DiscardGuard::AskingDiscard);

    let on_confirm = Callback::new(move |_| {
        if let Some(values) = model.confirm() {
            on_confirmed.run(values);
        }
    });
    let on_cancel_confirm = Callback::new(move |_| {
        if model.flow.get_untracked() == ConfirmFlow::PendingConfirm {
            model.cancel_confirm();
        }
    });

    view! {
        <Show when=move || model.open.get()>
            <ModalFrame
                placement=FramePlacement::Drawer
                on_close=Callback::new(move |_| model.request_close())
            >
                <div class="drawer">
                    <div class="drawer__header">
                        <h2 class="drawer__title">{move || title.get()}</h2>
                        <button
                            type="button"
                            class="drawer__close"
                            aria-label="Close"
                            on:click=move |_| model.request_close()
                        >
                            {icon("x")}
                        </button>
                    </div>
                    <form
                        class="drawer__body"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            model.submit();
                        }
                    >
                        {children.with_value(|c| c())}
                        <div class="drawer__footer">
                            <Button
                                variant="secondary"
                                disabled=submitting
                                on_click=Callback::new(move |_| model.request_close())
                            >
                                "Cancel"
                            </Button>
                            <Button button_type="submit" loading=submitting>
                                {submit_label}
                            </Button>
                        </div>
                    </form>
                </div>
            </ModalFrame>

            <ConfirmDialog open=confirm_open on_close=on_cancel_confirm>
                <ConfirmBody
                    title=confirm_title.get_value()
                    message=confirm_message
                    busy=submitting
                    on_confirm=on_confirm
                    on_cancel=on_cancel_confirm
                />
            </ConfirmDialog>

            <ConfirmDialog
                open=discard_open
                on_close=Callback::new(move |_| model.keep_editing())
            >
                <ConfirmBody
                    title="Discard changes?"
                    message="Your unsaved changes will be lost."
                    confirm_label="Discard"
                    variant="danger"
                    on_confirm=Callback::new(move |_| model.discard())
                    on_cancel=Callback::new(move |_| model.keep_editing())
                />
            </ConfirmDialog>
        </Show>
    }
}
