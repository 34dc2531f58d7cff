mod actions;

use std::collections::BTreeSet;

use contracts::domain::a001_admin_user::{AdminListArgs, AdminStatus, AdminUser};
use contracts::shared::list::ListResponse;
use contracts::shared::sentinel::ALL;
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

use self::actions::{AdminAction, AdminActionRequest};
use crate::domain::a001_admin_user::api::{BlockUnblockAdmins, DeleteReactivateAdmins, GetAdmins};
use crate::domain::a001_admin_user::ui::detail::AdminDetailPanel;
use crate::domain::a001_admin_user::ui::sub_admin::{SubAdminDrawer, SubAdminDrawerViewModel};
use crate::shared::components::ui::{status_variant, Badge, Button, Input, SelectOption, StyledSelect};
use crate::shared::components::{
    PageHeader, PaginationControls, QueryView, ReasonDialog, TableHeaderCheckbox, TableRowCheckbox,
};
use crate::shared::config::use_client_config;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::query::hooks::{refetch, use_mutations, use_query, use_query_client};

fn status_options() -> Vec<SelectOption> {
    [AdminStatus::Active, AdminStatus::Blocked, AdminStatus::Deleted]
        .iter()
        .map(|s| SelectOption::new(s.as_str(), s.label()))
        .collect()
}

#[component]
pub fn AdminUserList() -> impl IntoView {
    let client = use_query_client();
    let mutations = use_mutations();
    let paging = use_client_config().lists.pagination();

    let args = RwSignal::new(AdminListArgs {
        page: paging.page,
        limit: paging.limit,
        ..AdminListArgs::default()
    });
    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(BTreeSet::<String>::new());
    let pending_action = RwSignal::new(None::<AdminAction>);
    let reason_open = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let detail_id = RwSignal::new(None::<String>);

    let admins = use_query::<GetAdmins>(move || args.get());
    let sub_admin = SubAdminDrawerViewModel::new();

    let rows = Signal::derive(move || {
        admins.with(|s| s.data.as_ref().map(|page| page.items.clone()).unwrap_or_default())
    });
    let visible_ids = Signal::derive(move || rows.with(|r| r.iter().map(|a| a.id.clone()).collect::<Vec<_>>()));

    // ids of selected rows the action can change
    let targets = move |action: AdminAction| -> Vec<String> {
        rows.with_untracked(|r| {
            selected.with_untracked(|sel| {
                r.iter()
                    .filter(|a| sel.contains(&a.id) && action.applies_to(a.status))
                    .map(|a| a.id.clone())
                    .collect()
            })
        })
    };
    let action_enabled = move |action: AdminAction| {
        rows.with(|r| {
            selected.with(|sel| r.iter().any(|a| sel.contains(&a.id) && action.applies_to(a.status)))
        })
    };

    let start_action = move |action: AdminAction| {
        pending_action.set(Some(action));
        reason_open.set(true);
    };

    let run_action = Callback::new(move |reason: String| {
        let Some(action) = pending_action.get_untracked() else {
            return;
        };
        let ids = targets(action);
        if ids.is_empty() {
            reason_open.set(false);
            return;
        }
        busy.set(true);
        let done = move |ok: bool| {
            busy.set(false);
            if ok {
                reason_open.set(false);
                selected.set(BTreeSet::new());
            }
        };
        match action.request(ids, reason) {
            AdminActionRequest::BlockUnblock(req) => mutations
                .run::<BlockUnblockAdmins, _>(req, action.success_message(), move |r| done(r.is_ok())),
            AdminActionRequest::DeleteReactivate(req) => mutations
                .run::<DeleteReactivateAdmins, _>(req, action.success_message(), move |r| done(r.is_ok())),
        }
    });

    let reason_title = Signal::derive(move || {
        let count = selected.with(|s| s.len());
        pending_action
            .get()
            .map(|a| a.dialog_title(count))
            .unwrap_or_default()
    });
    let reason_confirm = Signal::derive(move || {
        pending_action.get().map(|a| a.label().to_string()).unwrap_or_default()
    });

    let status_value = Signal::derive(move || {
        args.with(|a| if a.status == ALL { String::new() } else { a.status.clone() })
    });
    let on_status = Callback::new(move |value: String| {
        args.update(|a| {
            a.status = if value.is_empty() { ALL.to_string() } else { value };
            a.page = 1;
        });
        selected.set(BTreeSet::new());
    });
    let apply_search = move || {
        let term = search.get_untracked().trim().to_string();
        args.update(|a| {
            a.search = term;
            a.page = 1;
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Admins" subtitle="Sub-admin accounts and their access">
                <Button on_click=Callback::new(move |_| sub_admin.open())>
                    {icon("plus")}
                    "Add sub-admin"
                </Button>
            </PageHeader>

            <div class="filter-bar">
                <form
                    class="filter-bar__search"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        apply_search();
                    }
                >
                    <Input
                        placeholder="Search name or email"
                        value=search
                        on_input=Callback::new(move |v| search.set(v))
                    />
                    <Button button_type="submit" variant="secondary">"Search"</Button>
                </form>
                <StyledSelect
                    id="admin-status-filter"
                    value=status_value
                    on_change=on_status
                    options=Signal::derive(status_options)
                />
                <div class="filter-bar__actions">
                    {AdminAction::ALL
                        .into_iter()
                        .map(|action| {
                            view! {
                                <Button
                                    variant="ghost"
                                    size="sm"
                                    disabled=Signal::derive(move || !action_enabled(action))
                                    on_click=Callback::new(move |_| start_action(action))
                                >
                                    {action.label()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <QueryView
                state=admins
                on_retry=Callback::new(move |_| refetch::<GetAdmins>(client, &args.get_untracked()))
                skeleton_columns=6
                children={move |page: ListResponse<AdminUser>| {
                    view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCheckbox visible=visible_ids selected=selected />
                                    <TableHeaderCell>"Name"</TableHeaderCell>
                                    <TableHeaderCell>"Email"</TableHeaderCell>
                                    <TableHeaderCell>"Role"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                    <TableHeaderCell>"Created"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {page
                                    .items
                                    .into_iter()
                                    .map(|admin| {
                                        let id_for_link = admin.id.clone();
                                        view! {
                                            <TableRow>
                                                <TableRowCheckbox id=admin.id.clone() selected=selected />
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <a
                                                            href="#"
                                                            class="table__link"
                                                            on:click=move |e| {
                                                                e.prevent_default();
                                                                detail_id.set(Some(id_for_link.clone()));
                                                            }
                                                        >
                                                            {admin.full_name}
                                                        </a>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>{admin.email}</TableCell>
                                                <TableCell>
                                                    {admin.role_name.unwrap_or_else(|| "—".to_string())}
                                                </TableCell>
                                                <TableCell>
                                                    <Badge variant=status_variant(admin.status.as_str())>
                                                        {admin.status.label()}
                                                    </Badge>
                                                </TableCell>
                                                <TableCell>{format_timestamp(admin.created_at.as_deref())}</TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()}
                            </TableBody>
                        </Table>
                    }
                }}
            />

            <PaginationControls
                page=Signal::derive(move || args.with(|a| a.page))
                limit=Signal::derive(move || args.with(|a| a.limit))
                total=Signal::derive(move || admins.with(|s| s.data.as_ref().map(|p| p.total).unwrap_or(0)))
                on_page_change=Callback::new(move |page| args.update(|a| a.page = page))
                on_limit_change=Callback::new(move |limit| {
                    args.update(|a| {
                        a.limit = limit;
                        a.page = 1;
                    })
                })
            />

            <ReasonDialog
                open=reason_open
                title=reason_title
                confirm_label=reason_confirm
                busy=busy
                on_submit=run_action
            />
            <SubAdminDrawer vm=sub_admin />
            {move || {
                detail_id
                    .get()
                    .map(|id| {
                        view! {
                            <AdminDetailPanel
                                user_id=id
                                on_close=Callback::new(move |_| detail_id.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}
