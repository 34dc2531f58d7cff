mod actions;

use std::collections::BTreeSet;

use contracts::domain::a003_category::CategoryListArgs;
use contracts::domain::a004_content_library::{
    ContentItem, ContentListArgs, ContentStatus, ModerationAction,
};
use contracts::shared::list::{ListResponse, SortOrder};
use contracts::shared::sentinel::ALL;
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

use self::actions::{build_request, dialog_title, success_message, target_status, ACTIONS};
use crate::domain::a003_category::api::GetCategories;
use crate::domain::a004_content_library::api::{ContentAction, GetContentLibrary};
use crate::domain::a004_content_library::ui::metadata_drawer::{
    MetadataDrawer, MetadataDrawerViewModel,
};
use crate::domain::a004_content_library::ui::vetting_log::VettingLogPanel;
use crate::shared::components::ui::{status_variant, Badge, Button, Input, SelectOption, StyledSelect};
use crate::shared::components::{
    PageHeader, PaginationControls, QueryView, ReasonDialog, TableHeaderCheckbox, TableRowCheckbox,
};
use crate::shared::config::use_client_config;
use crate::shared::date_utils::format_timestamp;
use crate::shared::query::hooks::{refetch, use_mutations, use_query, use_query_client};

fn status_options() -> Vec<SelectOption> {
    ContentStatus::ALL
        .iter()
        .map(|s| SelectOption::new(s.as_str(), s.label()))
        .collect()
}

fn confidence_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("asc", "Confidence: low first"),
        SelectOption::new("desc", "Confidence: high first"),
    ]
}

fn format_confidence(score: Option<f64>) -> String {
    score
        .map(|s| format!("{:.0}%", s * 100.0))
        .unwrap_or_else(|| "—".to_string())
}

#[component]
pub fn ContentLibraryList() -> impl IntoView {
    let client = use_query_client();
    let mutations = use_mutations();
    let paging = use_client_config().lists.pagination();

    let args = RwSignal::new(ContentListArgs {
        page: paging.page,
        limit: paging.limit,
        ..ContentListArgs::default()
    });
    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(BTreeSet::<String>::new());
    let pending_action = RwSignal::new(None::<ModerationAction>);
    let reason_open = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let history_for = RwSignal::new(None::<String>);

    let content = use_query::<GetContentLibrary>(move || args.get());
    let categories = use_query::<GetCategories>(CategoryListArgs::all);
    let metadata = MetadataDrawerViewModel::new();

    let rows = Signal::derive(move || {
        content.with(|s| s.data.as_ref().map(|page| page.items.clone()).unwrap_or_default())
    });
    let visible_ids = Signal::derive(move || rows.with(|r| r.iter().map(|c| c.id.clone()).collect::<Vec<_>>()));

    let targets = move |action: ModerationAction| -> Vec<String> {
        let status = target_status(action);
        rows.with_untracked(|r| {
            selected.with_untracked(|sel| {
                r.iter()
                    .filter(|c| sel.contains(&c.id) && c.status != status)
                    .map(|c| c.id.clone())
                    .collect()
            })
        })
    };
    let action_enabled = move |action: ModerationAction| {
        let status = target_status(action);
        rows.with(|r| selected.with(|sel| r.iter().any(|c| sel.contains(&c.id) && c.status != status)))
    };

    let run = move |action: ModerationAction, reason: Option<String>| {
        let ids = targets(action);
        if ids.is_empty() {
            reason_open.set(false);
            return;
        }
        busy.set(true);
        mutations.run::<ContentAction, _>(
            build_request(action, ids, reason),
            success_message(action),
            move |result| {
                busy.set(false);
                if result.is_ok() {
                    reason_open.set(false);
                    selected.set(BTreeSet::new());
                }
            },
        );
    };

    let start_action = move |action: ModerationAction| {
        if action.needs_reason() {
            pending_action.set(Some(action));
            reason_open.set(true);
        } else {
            run(action, None);
        }
    };
    let submit_reason = Callback::new(move |reason: String| {
        if let Some(action) = pending_action.get_untracked() {
            run(action, Some(reason));
        }
    });

    let reason_title = Signal::derive(move || {
        let count = selected.with(|s| s.len());
        pending_action.get().map(|a| dialog_title(a, count)).unwrap_or_default()
    });
    let reason_confirm = Signal::derive(move || {
        pending_action.get().map(|a| a.label().to_string()).unwrap_or_default()
    });

    let update_filter = move |f: &dyn Fn(&mut ContentListArgs)| {
        args.update(|a| {
            f(a);
            a.page = 1;
        });
        selected.set(BTreeSet::new());
    };
    let status_value = Signal::derive(move || {
        args.with(|a| if a.status == ALL { String::new() } else { a.status.clone() })
    });
    let category_options = Signal::derive(move || {
        categories.with(|s| {
            s.data
                .iter()
                .flat_map(|p| p.items.iter())
                .map(|c| SelectOption::new(c.id.clone(), c.category_name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let apply_search = move || {
        let term = search.get_untracked().trim().to_string();
        update_filter(&|a| a.search = term.clone());
    };

    view! {
        <div class="page">
            <PageHeader title="Content library" subtitle="Review, tag and moderate ingested content" />

            <div class="filter-bar">
                <form
                    class="filter-bar__search"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        apply_search();
                    }
                >
                    <Input
                        placeholder="Search titles"
                        value=search
                        on_input=Callback::new(move |v| search.set(v))
                    />
                    <Button button_type="submit" variant="secondary">"Search"</Button>
                </form>
                <StyledSelect
                    id="content-status-filter"
                    value=status_value
                    on_change=Callback::new(move |v: String| {
                        update_filter(&|a| a.status = if v.is_empty() { ALL.to_string() } else { v.clone() })
                    })
                    options=Signal::derive(status_options)
                />
                <StyledSelect
                    id="content-category-filter"
                    value=Signal::derive(move || args.with(|a| a.category_id.clone()))
                    on_change=Callback::new(move |v: String| update_filter(&|a| a.category_id = v.clone()))
                    options=category_options
                />
                <StyledSelect
                    id="content-confidence-sort"
                    value=Signal::derive(move || args.with(|a| a.confidence_score_sort.clone()))
                    on_change=Callback::new(move |v: String| {
                        update_filter(&|a| a.confidence_score_sort = v.clone())
                    })
                    options=Signal::derive(confidence_options)
                />
                <Button
                    variant="ghost"
                    size="sm"
                    on_click=Callback::new(move |_| args.update(|a| a.sort_order = a.sort_order.toggled()))
                >
                    {move || match args.with(|a| a.sort_order) {
                        SortOrder::Desc => "Newest first",
                        SortOrder::Asc => "Oldest first",
                    }}
                </Button>
                <div class="filter-bar__actions">
                    {ACTIONS
                        .into_iter()
                        .map(|action| {
                            view! {
                                <Button
                                    variant="ghost"
                                    size="sm"
                                    disabled=Signal::derive(move || !action_enabled(action) || busy.get())
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
                state=content
                on_retry=Callback::new(move |_| refetch::<GetContentLibrary>(client, &args.get_untracked()))
                skeleton_columns=7
                children={move |page: ListResponse<ContentItem>| {
                    view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCheckbox visible=visible_ids selected=selected />
                                    <TableHeaderCell>"Title"</TableHeaderCell>
                                    <TableHeaderCell>"Category"</TableHeaderCell>
                                    <TableHeaderCell>"Confidence"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                    <TableHeaderCell>"Added"</TableHeaderCell>
                                    <TableHeaderCell>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {page
                                    .items
                                    .into_iter()
                                    .map(|item| {
                                        let id = StoredValue::new(item.id.clone());
                                        view! {
                                            <TableRow>
                                                <TableRowCheckbox id=item.id.clone() selected=selected />
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {match item.source_url {
                                                            Some(url) => view! {
                                                                <a href=url class="table__link" target="_blank" rel="noopener">
                                                                    {item.title}
                                                                </a>
                                                            }
                                                            .into_any(),
                                                            None => view! { <span>{item.title}</span> }.into_any(),
                                                        }}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    {item.category_name.unwrap_or_else(|| "—".to_string())}
                                                </TableCell>
                                                <TableCell>{format_confidence(item.confidence_score)}</TableCell>
                                                <TableCell>
                                                    <Badge variant=status_variant(item.status.as_str())>
                                                        {item.status.label()}
                                                    </Badge>
                                                </TableCell>
                                                <TableCell>{format_timestamp(item.created_at.as_deref())}</TableCell>
                                                <TableCell class="table__cell--actions">
                                                    <Button
                                                        variant="ghost"
                                                        size="sm"
                                                        on_click=Callback::new(move |_| metadata.open(id.get_value()))
                                                    >
                                                        "Tags"
                                                    </Button>
                                                    <Button
                                                        variant="ghost"
                                                        size="sm"
                                                        on_click=Callback::new(move |_| history_for.set(Some(id.get_value())))
                                                    >
                                                        "History"
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
                page=Signal::derive(move || args.with(|a| a.page))
                limit=Signal::derive(move || args.with(|a| a.limit))
                total=Signal::derive(move || content.with(|s| s.data.as_ref().map(|p| p.total).unwrap_or(0)))
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
                on_submit=submit_reason
            />
            <MetadataDrawer vm=metadata />
            {move || {
                history_for
                    .get()
                    .map(|id| {
                        view! {
                            <VettingLogPanel
                                content_id=id
                                on_close=Callback::new(move |_| history_for.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}
