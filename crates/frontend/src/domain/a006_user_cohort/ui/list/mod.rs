use contracts::domain::a006_user_cohort::UserCohort;
use contracts::shared::list::{ListResponse, Pagination};
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow};

use crate::domain::a006_user_cohort::api::{DeleteCohort, GetCohort, GetCohorts};
use crate::domain::a006_user_cohort::ui::cohort_drawer::{
    platform_label, CohortDrawer, CohortDrawerViewModel,
};
use crate::shared::components::ui::Button;
use crate::shared::components::{PageHeader, PaginationControls, QueryView};
use crate::shared::config::use_client_config;
use crate::shared::confirm_dialog::{ConfirmBody, ConfirmDialog};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::modal_frame::{FramePlacement, ModalFrame};
use crate::shared::query::hooks::{refetch, use_mutations, use_query, use_query_client};

/// "18–35", "18+", "up to 35" or "Any age".
fn age_range(min: Option<u32>, max: Option<u32>) -> String {
    match (min, max) {
        (Some(lo), Some(hi)) => format!("{lo}–{hi}"),
        (Some(lo), None) => format!("{lo}+"),
        (None, Some(hi)) => format!("up to {hi}"),
        (None, None) => "Any age".to_string(),
    }
}

fn platforms(cohort: &UserCohort) -> String {
    cohort
        .platforms
        .iter()
        .map(|p| platform_label(p))
        .collect::<Vec<_>>()
        .join(", ")
}

fn signup_window(cohort: &UserCohort) -> String {
    format!(
        "{} – {}",
        format_date(cohort.signup_from),
        format_date(cohort.signup_to)
    )
}

#[component]
fn CohortDetailPanel(cohort_id: String, on_close: Callback<()>) -> impl IntoView {
    let client = use_query_client();
    let id = StoredValue::new(cohort_id);
    let cohort = use_query::<GetCohort>(move || id.get_value());

    view! {
        <ModalFrame placement=FramePlacement::Drawer on_close=on_close>
            <div class="drawer">
                <div class="drawer__header">
                    <h2 class="drawer__title">"Cohort"</h2>
                    <button
                        type="button"
                        class="drawer__close"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="drawer__body">
                    <QueryView
                        state=cohort
                        on_retry=Callback::new(move |_| refetch::<GetCohort>(client, &id.get_value()))
                        skeleton_columns=2
                        children={|c: UserCohort| {
                            view! {
                                <dl class="detail-list">
                                    <dt>"Name"</dt>
                                    <dd>{c.name.clone()}</dd>
                                    <dt>"Description"</dt>
                                    <dd>{c.description.clone().unwrap_or_else(|| "—".to_string())}</dd>
                                    <dt>"Platforms"</dt>
                                    <dd>{platforms(&c)}</dd>
                                    <dt>"Signed up"</dt>
                                    <dd>{signup_window(&c)}</dd>
                                    <dt>"Age"</dt>
                                    <dd>{age_range(c.age_min, c.age_max)}</dd>
                                    <dt>"Gender"</dt>
                                    <dd>{c.gender.clone().unwrap_or_else(|| "any".to_string())}</dd>
                                    <dt>"Audience"</dt>
                                    <dd>{c.audience_size.map(|n| n.to_string()).unwrap_or_else(|| "—".to_string())}</dd>
                                </dl>
                            }
                        }}
                    />
                </div>
            </div>
        </ModalFrame>
    }
}

#[component]
pub fn CohortList() -> impl IntoView {
    let client = use_query_client();
    let mutations = use_mutations();
    let paging = RwSignal::new(use_client_config().lists.pagination());
    let cohorts = use_query::<GetCohorts>(move || paging.get());
    let drawer = CohortDrawerViewModel::new();

    let detail_id = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(None::<UserCohort>);
    let busy = RwSignal::new(false);

    let confirm_delete = Callback::new(move |_| {
        let Some(cohort) = deleting.get_untracked() else {
            return;
        };
        busy.set(true);
        mutations.run::<DeleteCohort, _>(cohort.id, "Cohort deleted", move |result| {
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
            <PageHeader title="User cohorts" subtitle="Audience segments for targeting">
                <Button on_click=Callback::new(move |_| drawer.open_new())>
                    {icon("plus")}
                    "New cohort"
                </Button>
            </PageHeader>

            <QueryView
                state=cohorts
                on_retry=Callback::new(move |_| refetch::<GetCohorts>(client, &paging.get_untracked()))
                skeleton_columns=6
                children={move |page: ListResponse<UserCohort>| {
                    view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Name"</TableHeaderCell>
                                    <TableHeaderCell>"Platforms"</TableHeaderCell>
                                    <TableHeaderCell>"Signed up"</TableHeaderCell>
                                    <TableHeaderCell>"Age"</TableHeaderCell>
                                    <TableHeaderCell>"Audience"</TableHeaderCell>
                                    <TableHeaderCell>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {page
                                    .items
                                    .into_iter()
                                    .map(|cohort| {
                                        let platforms = platforms(&cohort);
                                        let window = signup_window(&cohort);
                                        let ages = age_range(cohort.age_min, cohort.age_max);
                                        let audience = cohort
                                            .audience_size
                                            .map(|n| n.to_string())
                                            .unwrap_or_else(|| "—".to_string());
                                        let name = cohort.name.clone();
                                        let cohort = StoredValue::new(cohort);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            detail_id.set(Some(cohort.with_value(|c| c.id.clone())));
                                                        }
                                                    >
                                                        {name}
                                                    </a>
                                                </TableCell>
                                                <TableCell>{platforms}</TableCell>
                                                <TableCell>{window}</TableCell>
                                                <TableCell>{ages}</TableCell>
                                                <TableCell>{audience}</TableCell>
                                                <TableCell class="table__cell--actions">
                                                    <Button
                                                        variant="ghost"
                                                        size="sm"
                                                        on_click=Callback::new(move |_| {
                                                            cohort.with_value(|c| drawer.open_edit(c))
                                                        })
                                                    >
                                                        "Edit"
                                                    </Button>
                                                    <Button
                                                        variant="ghost"
                                                        size="sm"
                                                        on_click=Callback::new(move |_| {
                                                            deleting.set(Some(cohort.get_value()))
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

            <PaginationControls
                page=Signal::derive(move || paging.with(|p| p.page))
                limit=Signal::derive(move || paging.with(|p| p.limit))
                total=Signal::derive(move || cohorts.with(|s| s.data.as_ref().map(|p| p.total).unwrap_or(0)))
                on_page_change=Callback::new(move |page| paging.update(|p| p.page = page))
                on_limit_change=Callback::new(move |limit| paging.set(Pagination::new(1, limit)))
            />

            <ConfirmDialog
                open=Signal::derive(move || deleting.with(Option::is_some))
                on_close=cancel_delete
            >
                <ConfirmBody
                    title="Delete cohort?"
                    message=Signal::derive(move || {
                        deleting
                            .with(|c| c.as_ref().map(|c| format!("\"{}\" will be removed.", c.name)))
                            .unwrap_or_default()
                    })
                    confirm_label="Delete"
                    variant="danger"
                    busy=busy
                    on_confirm=confirm_delete
                    on_cancel=cancel_delete
                />
            </ConfirmDialog>
            <CohortDrawer vm=drawer />
            {move || {
                detail_id
                    .get()
                    .map(|id| {
                        view! {
                            <CohortDetailPanel
                                cohort_id=id
                                on_close=Callback::new(move |_| detail_id.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_range() {
        assert_eq!(age_range(Some(18), Some(35)), "18–35");
        assert_eq!(age_range(Some(18), None), "18+");
        assert_eq!(age_range(None, Some(17)), "up to 17");
        assert_eq!(age_range(None, None), "Any age");
    }
}
