use leptos::prelude::*;

/// Textarea with label, character counter and validation message
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// Shows "n / max" under the field
    #[prop(optional)]
    max_length: Option<usize>,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {l}
                </label>
            })}
            <textarea
                id=textarea_id
                class="form__textarea"
                class:form__textarea--error=has_error
                placeholder=textarea_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                rows=textarea_rows
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            <div class="form__hint-row">
                {move || error.get().map(|e| view! {
                    <span class="form__error">{e}</span>
                })}
                {max_length.map(|max| view! {
                    <span class="form__counter">
                        {move || format!("{} / {}", value.with(|v| v.chars().count()), max)}
                    </span>
                })}
            </div>
        </div>
    }
}
