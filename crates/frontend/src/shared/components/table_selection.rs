//! Row selection for bulk actions in list tables.

use std::collections::BTreeSet;

use leptos::prelude::*;
use thaw::{TableCell, TableHeaderCell};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    None,
    Some,
    All,
}

/// State of the "select all" box for the rows currently on screen.
pub fn header_state(visible: &[String], selected: &BTreeSet<String>) -> HeaderState {
    let hits = visible.iter().filter(|id| selected.contains(*id)).count();
    match hits {
        0 => HeaderState::None,
        n if n == visible.len() => HeaderState::All,
        _ => HeaderState::Some,
    }
}

/// Header click: clears the visible rows when all are selected, selects them otherwise.
pub fn toggle_all(visible: &[String], selected: &BTreeSet<String>) -> BTreeSet<String> {
    let mut next = selected.clone();
    if header_state(visible, selected) == HeaderState::All {
        for id in visible {
            next.remove(id);
        }
    } else {
        next.extend(visible.iter().cloned());
    }
    next
}

#[component]
pub fn TableHeaderCheckbox(
    /// Ids of the rows on the current page
    #[prop(into)]
    visible: Signal<Vec<String>>,
    selected: RwSignal<BTreeSet<String>>,
) -> impl IntoView {
    let state = Signal::derive(move || selected.with(|s| visible.with(|v| header_state(v, s))));

    view! {
        <TableHeaderCell class="table__header-cell--checkbox">
            <input
                type="checkbox"
                class="table__checkbox"
                aria-label="Select all"
                prop:checked=move || state.get() == HeaderState::All
                prop:indeterminate=move || state.get() == HeaderState::Some
                on:change=move |_| {
                    let next = visible.with_untracked(|v| selected.with_untracked(|s| toggle_all(v, s)));
                    selected.set(next);
                }
            />
        </TableHeaderCell>
    }
}

#[component]
pub fn TableRowCheckbox(
    #[prop(into)]
    id: String,
    selected: RwSignal<BTreeSet<String>>,
) -> impl IntoView {
    let id = StoredValue::new(id);

    view! {
        <TableCell class="table__cell--checkbox">
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.with(|s| id.with_value(|id| s.contains(id)))
                on:click=|e| e.stop_propagation()
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    let id = id.get_value();
                    selected.update(|s| {
                        if checked {
                            s.insert(id);
                        } else {
                            s.remove(&id);
                        }
                    });
                }
            />
        </TableCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_header_state() {
        let visible = ids(&["a", "b"]);
        let mut selected = BTreeSet::new();
        assert_eq!(header_state(&visible, &selected), HeaderState::None);
        selected.insert("a".to_string());
        assert_eq!(header_state(&visible, &selected), HeaderState::Some);
        selected.insert("b".to_string());
        assert_eq!(header_state(&visible, &selected), HeaderState::All);
    }

    #[test]
    fn test_toggle_all_keeps_other_pages() {
        let selected: BTreeSet<String> = ids(&["z"]).into_iter().collect();
        let next = toggle_all(&ids(&["a", "b"]), &selected);
        assert_eq!(next.len(), 3);
        let cleared = toggle_all(&ids(&["a", "b"]), &next);
        assert_eq!(cleared, selected);
    }
}
