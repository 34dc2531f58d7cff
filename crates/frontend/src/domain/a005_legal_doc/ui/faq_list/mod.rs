use contracts::domain::a005_legal_doc::{Faq, LegalDocArgs};
use contracts::shared::list::{ListResponse, Pagination};
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

use crate::domain::a005_legal_doc::api::GetLegalDocs;
use crate::domain::a005_legal_doc::ui::faq_drawer::{FaqDrawer, FaqDrawerViewModel};
use crate::shared::components::ui::Button;
use crate::shared::components::{PaginationControls, QueryView};
use crate::shared::config::use_client_config;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::query::hooks::{refetch, use_query, use_query_client};

const ANSWER_PREVIEW: usize = 120;

/// First `ANSWER_PREVIEW` characters of an answer, cut on a char boundary.
fn preview(answer: &str) -> String {
    match answer.char_indices().nth(ANSWER_PREVIEW) {
        Some((cut, _)) => format!("{}…", answer[..cut].trim_end()),
        None => answer.to_string(),
    }
}

#[component]
pub fn FaqList() -> impl IntoView {
    let client = use_query_client();
    let paging = RwSignal::new(use_client_config().lists.pagination());
    let faqs = use_query::<GetLegalDocs>(move || LegalDocArgs::faq_page(paging.get()));
    let drawer = FaqDrawerViewModel::new();

    view! {
        <div class="toolbar">
            <Button on_click=Callback::new(move |_| drawer.open_new())>
                {icon("plus")}
                "New FAQ"
            </Button>
        </div>

        <QueryView
            state=faqs
            on_retry=Callback::new(move |_| {
                refetch::<GetLegalDocs>(client, &LegalDocArgs::faq_page(paging.get_untracked()))
            })
            skeleton_columns=4
            children={move |page: ListResponse<Faq>| {
                view! {
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Question"</TableHeaderCell>
                                <TableHeaderCell>"Answer"</TableHeaderCell>
                                <TableHeaderCell>"Updated"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {page
                                .items
                                .into_iter()
                                .map(|faq| {
                                    let answer = preview(&faq.answer);
                                    let updated = format_timestamp(faq.updated_at.as_deref());
                                    let question = faq.question.clone();
                                    let faq = StoredValue::new(faq);
                                    view! {
                                        <TableRow>
                                            <TableCell>{question}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{answer}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{updated}</TableCell>
                                            <TableCell class="table__cell--actions">
                                                <Button
                                                    variant="ghost"
                                                    size="sm"
                                                    on_click=Callback::new(move |_| {
                                                        faq.with_value(|f| drawer.open_edit(f))
                                                    })
                                                >
                                                    "Edit"
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
            total=Signal::derive(move || faqs.with(|s| s.data.as_ref().map(|p| p.total).unwrap_or(0)))
            on_page_change=Callback::new(move |page| paging.update(|p| p.page = page))
            on_limit_change=Callback::new(move |limit| paging.set(Pagination::new(1, limit)))
        />

        <FaqDrawer vm=drawer />
    }
}
