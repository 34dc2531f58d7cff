use contracts::domain::a002_admin_role::schema::fields;
use contracts::domain::a002_admin_role::PermissionNode;
use leptos::prelude::*;

use super::permission_tree::PermissionTree;
use super::view_model::RoleDrawerViewModel;
use crate::domain::a002_admin_role::api::GetPermissions;
use crate::shared::components::ui::Input;
use crate::shared::components::{DrawerShell, QueryView};
use crate::shared::query::hooks::{refetch, use_query, use_query_client};

#[component]
pub fn RoleDrawer(vm: RoleDrawerViewModel) -> impl IntoView {
    let model = vm.model;
    let client = use_query_client();
    let permissions = use_query::<GetPermissions>(|| ());
    let edit_mode = vm.is_edit_mode();

    let title = Signal::derive(move || {
        let title = if edit_mode.get() { "Edit role" } else { "New role" };
        title.to_string()
    });
    let confirm_message = Signal::derive(move || {
        let name = model.text(fields::NAME).get();
        let count = model.list(fields::PERMISSION_IDS).with(Vec::len);
        format!("\"{}\" will grant {} permission(s).", name.trim(), count)
    });

    view! {
        <DrawerShell
            model=model
            title=title
            confirm_title="Save role?"
            confirm_message=confirm_message
            on_confirmed=Callback::new(move |values| vm.save(values))
        >
            <Input
                label="Role name"
                value=model.text(fields::NAME)
                on_input=model.on_text(fields::NAME)
                error=model.error(fields::NAME)
                max_length=30
            />
            <div class="form__group">
                <span class="form__label">"Permissions"</span>
                <QueryView
                    state=permissions
                    on_retry=Callback::new(move |_| refetch::<GetPermissions>(client, &()))
                    skeleton_columns=1
                    children={move |forest: Vec<PermissionNode>| {
                        view! {
                            <PermissionTree
                                forest=forest
                                value=model.list(fields::PERMISSION_IDS)
                                on_change=model.on_list(fields::PERMISSION_IDS)
                            />
                        }
                    }}
                />
                {move || {
                    model
                        .error(fields::PERMISSION_IDS)
                        .get()
                        .map(|e| view! { <span class="form__error">{e}</span> })
                }}
            </div>
        </DrawerShell>
    }
}
