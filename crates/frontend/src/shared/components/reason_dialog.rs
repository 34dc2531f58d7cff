use contracts::domain::a001_admin_user::schema::{fields, reason_schema};
use contracts::shared::validation::{FieldValue, FormValues};
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Textarea};
use crate::shared::confirm_dialog::ConfirmDialog;
use crate::shared::forms::FormState;

fn blank_reason() -> FormState {
    let mut initial = FormValues::new();
    initial.insert(fields::REASON.to_string(), FieldValue::text(""));
    FormState::new(reason_schema(), initial)
}

/// Confirmation that asks for a moderation reason.
///
/// `on_submit` receives the trimmed reason of a valid form; the caller runs
/// the mutation and closes the dialog by clearing `open` on success.
#[component]
pub fn ReasonDialog(
    open: RwSignal<bool>,
    #[prop(into)]
    title: Signal<String>,
    #[prop(into)]
    confirm_label: Signal<String>,
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    on_submit: Callback<String>,
) -> impl IntoView {
    let form = RwSignal::new(blank_reason());
    let is_busy = Signal::derive(move || busy.get().unwrap_or(false));

    Effect::new(move |_| {
        if open.get() {
            form.set(blank_reason());
        }
    });

    let submit = move || {
        let mut valid = false;
        form.update(|f| valid = f.validate());
        if valid {
            let reason = form.with_untracked(|f| f.text(fields::REASON).trim().to_string());
            on_submit.run(reason);
        }
    };
    let close = Callback::new(move |_| {
        if !is_busy.get_untracked() {
            open.set(false);
        }
    });

    view! {
        <ConfirmDialog open=open on_close=close>
            <h3 class="confirm-dialog__title">{move || title.get()}</h3>
            <Textarea
                label="Reason"
                value=Signal::derive(move || form.with(|f| f.text(fields::REASON)))
                on_input=Callback::new(move |v: String| {
                    form.update(|f| f.set(fields::REASON, FieldValue::Text(v)))
                })
                error=Signal::derive(move || {
                    form.with(|f| f.error(fields::REASON).map(|e| e.message.clone()))
                })
                rows=4
                max_length=250
            />
            <div class="confirm-dialog__actions">
                <Button variant="secondary" disabled=is_busy on_click=Callback::new(move |_| close.run(()))>
                    "Cancel"
                </Button>
                <Button variant="danger" loading=is_busy on_click=Callback::new(move |_| submit())>
                    {move || confirm_label.get()}
                </Button>
            </div>
        </ConfirmDialog>
    }
}
