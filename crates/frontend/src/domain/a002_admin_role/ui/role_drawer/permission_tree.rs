use std::collections::BTreeSet;

use contracts::domain::a002_admin_role::{CheckState, PermissionNode};
use leptos::prelude::*;

use crate::shared::components::ui::Checkbox;

/// Nested permission checkboxes. Parents are derived from their leaves and
/// only leaf ids are reported through `on_change`.
#[component]
pub fn PermissionTree(
    forest: Vec<PermissionNode>,
    #[prop(into)]
    value: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
) -> impl IntoView {
    let selected = Signal::derive(move || value.with(|v| v.iter().cloned().collect::<BTreeSet<_>>()));

    view! {
        <ul class="permission-tree" role="tree">
            {forest
                .into_iter()
                .map(|node| render_node(node, 0, selected, on_change))
                .collect_view()}
        </ul>
    }
}

fn render_node(
    node: PermissionNode,
    depth: usize,
    selected: Signal<BTreeSet<String>>,
    on_change: Callback<Vec<String>>,
) -> AnyView {
    let children = node.children.clone();
    let name = node.name.clone();
    let node = StoredValue::new(node);
    let state = Signal::derive(move || selected.with(|s| node.with_value(|n| n.check_state(s))));

    view! {
        <li class="permission-tree__node" role="treeitem">
            <div class="permission-tree__label" style=format!("padding-left: {}rem", depth)>
                <Checkbox
                    label=name
                    checked=Signal::derive(move || state.get() == CheckState::Checked)
                    indeterminate=Signal::derive(move || state.get() == CheckState::Indeterminate)
                    on_change=Callback::new(move |_| {
                        let next = selected.with_untracked(|s| node.with_value(|n| n.toggle(s)));
                        on_change.run(next.into_iter().collect());
                    })
                />
            </div>
            {(!children.is_empty())
                .then(|| {
                    view! {
                        <ul class="permission-tree__children" role="group">
                            {children
                                .into_iter()
                                .map(|child| render_node(child, depth + 1, selected, on_change))
                                .collect_view()}
                        </ul>
                    }
                })}
        </li>
    }
    .into_any()
}
