use leptos::prelude::*;

use crate::shared::icons::icon;

/// Appends `raw` unless it is blank or already present. Surrounding
/// whitespace is kept so validation can report it.
pub fn add_tag(tags: &[String], raw: &str) -> Vec<String> {
    let mut next = tags.to_vec();
    if !raw.trim().is_empty() && !tags.iter().any(|t| t == raw) {
        next.push(raw.to_string());
    }
    next
}

/// Free-text chips: Enter or the Add button commits the draft.
#[component]
pub fn TagInput(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let draft = RwSignal::new(String::new());
    let is_disabled = move || disabled.get().unwrap_or(false);

    let commit = move || {
        let raw = draft.get_untracked();
        let next = value.with_untracked(|tags| add_tag(tags, &raw));
        if next.len() != value.with_untracked(Vec::len) {
            on_change.run(next);
        }
        draft.set(String::new());
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <span class="form__label">{l}</span> })}
            <div class="tag-input">
                <input
                    type="text"
                    class="form__input"
                    class:form__input--error=move || error.get().is_some()
                    placeholder=move || placeholder.get().unwrap_or_default()
                    disabled=is_disabled
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            commit();
                        }
                    }
                />
                <button
                    type="button"
                    class="button button--secondary button--sm"
                    disabled=is_disabled
                    on:click=move |_| commit()
                >
                    "Add"
                </button>
            </div>
            <div class="chips">
                {move || {
                    value
                        .get()
                        .into_iter()
                        .map(|tag| {
                            let removed = tag.clone();
                            view! {
                                <span class="chip">
                                    <span class="chip__label">{tag}</span>
                                    <button
                                        type="button"
                                        class="chip__remove"
                                        aria-label="Remove"
                                        disabled=is_disabled
                                        on:click=move |_| {
                                            on_change.run(value.with(|tags| {
                                                tags.iter().filter(|t| **t != removed).cloned().collect()
                                            }));
                                        }
                                    >
                                        {icon("x")}
                                    </button>
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_tag() {
        let tags = vec!["Football".to_string()];
        assert_eq!(add_tag(&tags, "Tennis"), vec!["Football", "Tennis"]);
        assert_eq!(add_tag(&tags, "Football"), tags);
        assert_eq!(add_tag(&tags, "   "), tags);
        assert_eq!(add_tag(&tags, " Golf"), vec!["Football", " Golf"]);
    }
}
