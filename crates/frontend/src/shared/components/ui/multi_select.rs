use leptos::prelude::*;

use super::select::{SelectOption, SELECT_PLACEHOLDER};
use crate::shared::icons::icon;

/// Removable tag under a multi-select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub value: String,
    pub label: String,
}

/// One chip per selected value, in selection order. Values without a
/// matching option keep their raw value as label.
pub fn chips(options: &[SelectOption], selected: &[String]) -> Vec<Chip> {
    selected
        .iter()
        .map(|value| Chip {
            value: value.clone(),
            label: options
                .iter()
                .find(|o| &o.value == value)
                .map(|o| o.label.clone())
                .unwrap_or_else(|| value.clone()),
        })
        .collect()
}

/// Adds `value` at the end, or removes it when already selected.
pub fn toggle(selected: &[String], value: &str) -> Vec<String> {
    if selected.iter().any(|v| v == value) {
        remove(selected, value)
    } else {
        let mut next = selected.to_vec();
        next.push(value.to_string());
        next
    }
}

pub fn remove(selected: &[String], value: &str) -> Vec<String> {
    selected.iter().filter(|v| *v != value).cloned().collect()
}

/// Multi-select with removable chips.
///
/// Picking an entry toggles it; the control snaps back to the blank entry
/// so the same option can be picked again to deselect it.
#[component]
pub fn MultiSelect(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let is_disabled = move || disabled.get().unwrap_or(false);
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
                disabled=is_disabled
                prop:value=move || {
                    value.track();
                    String::new()
                }
                on:change=move |ev| {
                    let picked = event_target_value(&ev);
                    if !picked.is_empty() {
                        on_change.run(value.with(|s| toggle(s, &picked)));
                    }
                }
            >
                <option value="" selected=true>{SELECT_PLACEHOLDER}</option>
                {move || {
                    let selected = value.get();
                    options.get()
                        .into_iter()
                        .filter(|o| !o.value.is_empty())
                        .map(|o| {
                            let mark = if selected.contains(&o.value) { "✓ " } else { "" };
                            view! {
                                <option value=o.value.clone()>
                                    {format!("{}{}", mark, o.label)}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            <div class="chips">
                {move || {
                    let selected = value.get();
                    options.with(|opts| chips(opts, &selected))
                        .into_iter()
                        .map(|chip| {
                            let chip_value = chip.value.clone();
                            view! {
                                <span class="chip">
                                    <span class="chip__label">{chip.label}</span>
                                    <button
                                        type="button"
                                        class="chip__remove"
                                        aria-label="Remove"
                                        disabled=is_disabled
                                        on:click=move |_| {
                                            on_change.run(value.with(|s| remove(s, &chip_value)));
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
            SelectOption::new("ios", "iOS"),
            SelectOption::new("android", "Android"),
            SelectOption::new("web", "Web"),
        ]
    }

    fn selected(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_one_chip_per_value() {
        let chips = chips(&options(), &selected(&["web", "ios"]));
        assert_eq!(chips.len(), 2);
        assert_eq!(chips[0].label, "Web");
        assert_eq!(chips[1].label, "iOS");
    }

    #[test]
    fn test_unmatched_chip_uses_raw_value() {
        let chips = chips(&options(), &selected(&["smart-tv"]));
        assert_eq!(chips[0].label, "smart-tv");
    }

    #[test]
    fn test_remove_then_select_again() {
        let s = selected(&["ios", "web"]);
        let without = remove(&s, "ios");
        assert_eq!(without, selected(&["web"]));
        assert_eq!(toggle(&without, "ios"), selected(&["web", "ios"]));
        assert_eq!(toggle(&s, "web"), selected(&["ios"]));
    }
}
