use std::collections::BTreeSet;

use contracts::domain::a007_blocked_keyword::{
    BlockedKeyword, BlockedKeywordArgs, RemoveBlockedKeywordsRequest,
};
use contracts::shared::list::{ListResponse, Pagination};
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow};

use crate::domain::a007_blocked_keyword::api::{GetBlockedKeywords, RemoveBlockedKeywords};
use crate::domain::a007_blocked_keyword::ui::add_drawer::{AddKeywordsDrawer, AddKeywordsViewModel};
use crate::shared::components::ui::{Button, Input};
use crate::shared::components::{
    PageHeader, PaginationControls, QueryView, TableHeaderCheckbox, TableRowCheckbox,
};
use crate::shared::config::use_client_config;
use crate::shared::confirm_dialog::{ConfirmBody, ConfirmDialog};
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::query::hooks::{refetch, use_mutations, use_query, use_query_client};

#[component]
pub fn BlockedKeywordList() -> impl IntoView {
    let client = use_query_client();
    let mutations = use_mutations();
    let args = RwSignal::new(BlockedKeywordArgs {
        pagination: use_client_config().lists.pagination(),
        search: String::new(),
    });
    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(BTreeSet::<String>::new());
    let confirming = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let keywords = use_query::<GetBlockedKeywords>(move || args.get());
    let add = AddKeywordsViewModel::new();

    let visible_ids = Signal::derive(move || {
        keywords.with(|s| {
            s.data
                .iter()
                .flat_map(|p| p.items.iter())
                .map(|k| k.id.clone())
                .collect::<Vec<_>>()
        })
    });
    let selected_count = Signal::derive(move || selected.with(BTreeSet::len));

    let remove = Callback::new(move |_| {
        let keyword_ids: Vec<String> = selected.get_untracked().into_iter().collect();
        if keyword_ids.is_empty() {
            confirming.set(false);
            return;
        }
        busy.set(true);
        mutations.run::<RemoveBlockedKeywords, _>(
            RemoveBlockedKeywordsRequest { keyword_ids },
            "Keywords unblocked",
            move |result| {
                busy.set(false);
                if result.is_ok() {
                    confirming.set(false);
                    selected.set(BTreeSet::new());
                }
            },
        );
    });
    let cancel = Callback::new(move |_| {
        if !busy.get_untracked() {
            confirming.set(false);
        }
    });
    let apply_search = move || {
        let term = search.get_untracked().trim().to_string();
        args.update(|a| {
            a.search = term;
            a.pagination.page = 1;
        });
        selected.set(BTreeSet::new());
    };

    view! {
        <div class="page">
            <PageHeader title="Blocked keywords" subtitle="Content matching these words is never ingested">
                <Button on_click=Callback::new(move |_| add.open())>
                    {icon("plus")}
                    "Block keywords"
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
                        placeholder="Search keywords"
                        value=search
                        on_input=Callback::new(move |v| search.set(v))
                    />
                    <Button button_type="submit" variant="secondary">"Search"</Button>
                </form>
                <div class="filter-bar__actions">
                    <Button
                        variant="ghost"
                        size="sm"
                        disabled=Signal::derive(move || selected_count.get() == 0)
                        on_click=Callback::new(move |_| confirming.set(true))
                    >
                        {move || format!("Unblock ({})", selected_count.get())}
                    </Button>
                </div>
            </div>

            <QueryView
                state=keywords
                on_retry=Callback::new(move |_| refetch::<GetBlockedKeywords>(client, &args.get_untracked()))
                skeleton_columns=3
                children={move |page: ListResponse<BlockedKeyword>| {
                    view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCheckbox visible=visible_ids selected=selected />
                                    <TableHeaderCell>"Keyword"</TableHeaderCell>
                                    <TableHeaderCell>"Blocked on"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {page
                                    .items
                                    .into_iter()
                                    .map(|k| {
                                        view! {
                                            <TableRow>
                                                <TableRowCheckbox id=k.id selected=selected />
                                                <TableCell>{k.keyword}</TableCell>
                                                <TableCell>{format_timestamp(k.created_at.as_deref())}</TableCell>
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
                page=Signal::derive(move || args.with(|a| a.pagination.page))
                limit=Signal::derive(move || args.with(|a| a.pagination.limit))
                total=Signal::derive(move || keywords.with(|s| s.data.as_ref().map(|p| p.total).unwrap_or(0)))
                on_page_change=Callback::new(move |page| args.update(|a| a.pagination.page = page))
                on_limit_change=Callback::new(move |limit| {
                    args.update(|a| a.pagination = Pagination::new(1, limit))
                })
            />

            <ConfirmDialog open=confirming on_close=cancel>
                <ConfirmBody
                    title="Unblock keywords?"
                    message=Signal::derive(move || {
                        format!("{} keyword(s) will be allowed again.", selected_count.get())
                    })
                    confirm_label="Unblock"
                    variant="danger"
                    busy=busy
                    on_confirm=remove
                    on_cancel=cancel
                />
            </ConfirmDialog>
            <AddKeywordsDrawer vm=add />
        </div>
    }
}
