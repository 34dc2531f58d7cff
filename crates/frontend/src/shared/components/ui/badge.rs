use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

/// Badge variant for a status string
pub fn status_variant(status: &str) -> &'static str {
    match status {
        "active" | "approved" => "success",
        "pending" | "flagged" => "warning",
        "blocked" | "rejected" | "deleted" => "error",
        _ => "neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant("active"), "success");
        assert_eq!(status_variant("flagged"), "warning");
        assert_eq!(status_variant("deleted"), "error");
        assert_eq!(status_variant("archived"), "neutral");
    }
}
