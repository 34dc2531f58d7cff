use leptos::prelude::*;

/// One entry of a select control
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Label of the blank entry; its value is the empty string.
pub const SELECT_PLACEHOLDER: &str = "Select";

/// Entries actually rendered: the blank sentinel, every option with a
/// non-empty value, and the current value itself when no option matches it.
pub fn select_entries(options: &[SelectOption], value: &str) -> Vec<SelectOption> {
    let mut entries = vec![SelectOption::new("", SELECT_PLACEHOLDER)];
    entries.extend(options.iter().filter(|o| !o.value.is_empty()).cloned());
    if !value.is_empty() && !options.iter().any(|o| o.value == value) {
        entries.push(SelectOption::new(value, value));
    }
    entries
}

/// Single-select bound to a string value, with an error line below it.
///
/// Holds no state: the selected entry is always `value`, and a change is
/// reported through `on_change` right away.
#[component]
pub fn StyledSelect(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value, `""` when nothing is selected
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    /// Validation message shown under the control
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                class:form__select--error=has_error
                aria-invalid=move || has_error().to_string()
                disabled=move || disabled.get().unwrap_or(false)
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {move || {
                    let current = value.get();
                    options.with(|opts| select_entries(opts, &current))
                        .into_iter()
                        .map(|o| {
                            let selected = o.value == current;
                            view! {
                                <option value=o.value selected=selected>
                                    {o.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            {move || error.get().map(|e| view! {
                <span class="form__error">{e}</span>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("r1", "Moderator"),
            SelectOption::new("", "Broken"),
            SelectOption::new("r2", "Reviewer"),
        ]
    }

    #[test]
    fn test_sentinel_first_and_empty_values_dropped() {
        let entries = select_entries(&options(), "");
        let values: Vec<&str> = entries.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["", "r1", "r2"]);
        assert_eq!(entries[0].label, SELECT_PLACEHOLDER);
    }

    #[test]
    fn test_stale_value_shown_raw() {
        let entries = select_entries(&options(), "r9");
        let last = entries.last().unwrap();
        assert_eq!(last.value, "r9");
        assert_eq!(last.label, "r9");
        assert_eq!(select_entries(&options(), "r2").len(), 3);
    }
}
