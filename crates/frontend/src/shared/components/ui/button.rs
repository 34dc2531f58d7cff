use leptos::prelude::*;

/// Button with variants (primary, secondary, danger, ghost) and a busy state
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", "danger" or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default) or "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Shows a spinner and disables the button
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "danger" => "button--danger",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };

    let size_class = move || {
        if size.get().as_deref() == Some("sm") {
            "button--small"
        } else {
            ""
        }
    };

    let is_loading = move || loading.get().unwrap_or(false);
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("button {} {}", variant_class(), size_class())
            class:button--loading=is_loading
            disabled=move || disabled.get().unwrap_or(false) || is_loading()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            <Show when=is_loading>
                <span class="button__spinner" aria-hidden="true"></span>
            </Show>
            {children()}
        </button>
    }
}
