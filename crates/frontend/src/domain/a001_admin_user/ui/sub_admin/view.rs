use contracts::domain::a001_admin_user::schema::fields;
use leptos::prelude::*;

use super::view_model::SubAdminDrawerViewModel;
use crate::domain::a001_admin_user::api::GetUserRoles;
use crate::shared::components::ui::{Input, SelectOption, StyledSelect};
use crate::shared::components::DrawerShell;
use crate::shared::query::hooks::use_query;

#[component]
pub fn SubAdminDrawer(vm: SubAdminDrawerViewModel) -> impl IntoView {
    let model = vm.model;
    let roles = use_query::<GetUserRoles>(|| ());
    let role_options = Signal::derive(move || {
        roles.with(|state| {
            state
                .data
                .iter()
                .flatten()
                .map(|role| SelectOption::new(role.id.clone(), role.name.clone()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <DrawerShell
            model=model
            title="Add sub-admin"
            submit_label="Create"
            confirm_title="Create sub-admin?"
            confirm_message=vm.confirm_message()
            on_confirmed=Callback::new(move |values| vm.create(values))
        >
            <Input
                label="Full name"
                value=model.text(fields::FULL_NAME)
                on_input=model.on_text(fields::FULL_NAME)
                error=model.error(fields::FULL_NAME)
                max_length=50
            />
            <Input
                label="Email"
                input_type="email"
                autocomplete="off"
                value=model.text(fields::EMAIL)
                on_input=model.on_text(fields::EMAIL)
                error=model.error(fields::EMAIL)
            />
            <StyledSelect
                label="Role"
                value=model.text(fields::ROLE)
                on_change=model.on_choice(fields::ROLE)
                options=role_options
                error=model.error(fields::ROLE)
                disabled=Signal::derive(move || roles.with(|s| s.is_loading()))
            />
        </DrawerShell>
    }
}
