use contracts::domain::a002_admin_role::AdminRole;
use contracts::shared::list::ListResponse;
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow};

use crate::domain::a002_admin_role::api::{DeleteAdminRole, GetAdminRoles};
use crate::domain::a002_admin_role::ui::role_drawer::{RoleDrawer, RoleDrawerViewModel};
use crate::shared::components::ui::Button;
use crate::shared::components::{PageHeader, QueryView};
use crate::shared::confirm_dialog::{ConfirmBody, ConfirmDialog};
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::query::hooks::{refetch, use_mutations, use_query, use_query_client};

/// Roles still assigned to admins cannot be deleted.
fn can_delete(role: &AdminRole) -> bool {
    role.assigned_admins == 0
}

#[component]
pub fn AdminRoleList() -> impl IntoView {
    let client = use_query_client();
    let mutations = use_mutations();
    let roles = use_query::<GetAdminRoles>(|| ());
    let drawer = RoleDrawerViewModel::new();

    let deleting = RwSignal::new(None::<AdminRole>);
    let busy = RwSignal::new(false);

    let confirm_delete = Callback::new(move |_| {
        let Some(role) = deleting.get_untracked() else {
            return;
        };
        busy.set(true);
        mutations.run::<DeleteAdminRole, _>(role.id, "Role deleted", move |result| {
            busy.set(false);
            if result.is_ok() {
                deleting.set(None);
            }
        });
    });
    let cancel_delete = Callback::new(move |_| {
        if !busy.get_untracked() {
            deleting.set(None);
        }
    });

    view! {
        <div class="page">
            <PageHeader title="Roles" subtitle="Permission sets assigned to sub-admins">
                <Button on_click=Callback::new(move |_| drawer.open_new())>
                    {icon("plus")}
                    "New role"
                </Button>
            </PageHeader>

            <QueryView
                state=roles
                on_retry=Callback::new(move |_| refetch::<GetAdminRoles>(client, &()))
                children={move |page: ListResponse<AdminRole>| {
                    view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Role"</TableHeaderCell>
                                    <TableHeaderCell>"Permissions"</TableHeaderCell>
                                    <TableHeaderCell>"Admins"</TableHeaderCell>
                                    <TableHeaderCell>"Created"</TableHeaderCell>
                                    <TableHeaderCell>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {page
                                    .items
                                    .into_iter()
                                    .map(|role| {
                                        let deletable = can_delete(&role);
                                        let role = StoredValue::new(role);
                                        view! {
                                            <TableRow>
                                                <TableCell>{role.with_value(|r| r.name.clone())}</TableCell>
                                                <TableCell>{role.with_value(|r| r.permission_ids.len())}</TableCell>
                                                <TableCell>{role.with_value(|r| r.assigned_admins)}</TableCell>
                                                <TableCell>
                                                    {role.with_value(|r| format_timestamp(r.created_at.as_deref()))}
                                                </TableCell>
                                                <TableCell class="table__cell--actions">
                                                    <Button
                                                        variant="ghost"
                                                        size="sm"
                                                        on_click=Callback::new(move |_| {
                                                            role.with_value(|r| drawer.open_edit(r))
                                                        })
                                                    >
                                                        "Edit"
                                                    </Button>
                                                    <Button
                                                        variant="ghost"
                                                        size="sm"
                                                        disabled=!deletable
                                                        on_click=Callback::new(move |_| {
                                                            deleting.set(Some(role.get_value()))
                                                        })
                                                    >
                                                        "Delete"
                                                    </Button>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()}
                            </TableBody>
                        </Table>
                    }
                }}
            />

            <ConfirmDialog
                open=Signal::derive(move || deleting.with(Option::is_some))
                on_close=cancel_delete
            >
                <ConfirmBody
                    title="Delete role?"
                    message=Signal::derive(move || {
                        deleting
                            .with(|r| r.as_ref().map(|r| format!("\"{}\" will be removed.", r.name)))
                            .unwrap_or_default()
                    })
                    confirm_label="Delete"
                    variant="danger"
                    busy=busy
                    on_confirm=confirm_delete
                    on_cancel=cancel_delete
                />
            </ConfirmDialog>
            <RoleDrawer vm=drawer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assigned_roles_cannot_be_deleted() {
        let mut role = AdminRole {
            id: "r1".into(),
            name: "Leads".into(),
            permission_ids: Vec::new(),
            assigned_admins: 3,
            created_at: None,
        };
        assert!(!can_delete(&role));
        role.assigned_admins = 0;
        assert!(can_delete(&role));
    }
}
