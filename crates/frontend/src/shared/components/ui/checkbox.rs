use leptos::prelude::*;

/// Checkbox with a tri-state display (checked / indeterminate / unchecked)
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Partially selected children; rendered as the indeterminate dash
    #[prop(optional, into)]
    indeterminate: MaybeProp<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// ID for the checkbox element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();
    let is_disabled = move || disabled.get().unwrap_or(false);

    view! {
        <div class="form__checkbox-wrapper" class:form__checkbox-wrapper--disabled=is_disabled>
            <input
                id=checkbox_id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                prop:indeterminate=move || indeterminate.get().unwrap_or(false)
                disabled=is_disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form__checkbox-label" for=checkbox_id>
                {label}
            </label>
        </div>
    }
}
