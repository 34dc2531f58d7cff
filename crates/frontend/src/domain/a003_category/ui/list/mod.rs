use contracts::domain::a003_category::{Category, CategoryListArgs};
use contracts::shared::list::{ListResponse, Pagination};
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow};

use crate::domain::a003_category::api::GetCategories;
use crate::domain::a003_category::ui::category_drawer::{CategoryDrawer, CategoryDrawerViewModel};
use crate::domain::a003_category::ui::subcategory_drawer::{
    SubcategoryDrawer, SubcategoryDrawerViewModel,
};
use crate::shared::components::ui::{Button, Input};
use crate::shared::components::{PageHeader, PaginationControls, QueryView};
use crate::shared::config::use_client_config;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::query::hooks::{refetch, use_query, use_query_client};

#[component]
pub fn CategoryList() -> impl IntoView {
    let client = use_query_client();
    let args = RwSignal::new(CategoryListArgs {
        pagination: use_client_config().lists.pagination(),
        ..CategoryListArgs::default()
    });
    let search = RwSignal::new(String::new());
    let categories = use_query::<GetCategories>(move || args.get());

    let category_drawer = CategoryDrawerViewModel::new();
    let subcategory_drawer = SubcategoryDrawerViewModel::new();

    let apply_search = move || {
        let term = search.get_untracked().trim().to_string();
        args.update(|a| {
            a.search = term;
            a.pagination.page = 1;
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Categories" subtitle="Content categories and their sub-categories">
                <Button on_click=Callback::new(move |_| category_drawer.open())>
                    {icon("plus")}
                    "New category"
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
                        placeholder="Search categories"
                        value=search
                        on_input=Callback::new(move |v| search.set(v))
                    />
                    <Button button_type="submit" variant="secondary">"Search"</Button>
                </form>
            </div>

            <QueryView
                state=categories
                on_retry=Callback::new(move |_| refetch::<GetCategories>(client, &args.get_untracked()))
                skeleton_columns=4
                children={move |page: ListResponse<Category>| {
                    view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Category"</TableHeaderCell>
                                    <TableHeaderCell>"Sub-categories"</TableHeaderCell>
                                    <TableHeaderCell>"Created"</TableHeaderCell>
                                    <TableHeaderCell>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {page
                                    .items
                                    .into_iter()
                                    .map(|category| {
                                        let target = (category.id.clone(), category.category_name.clone());
                                        view! {
                                            <TableRow>
                                                <TableCell>{category.category_name}</TableCell>
                                                <TableCell>
                                                    <div class="chips">
                                                        {category
                                                            .subcategories
                                                            .into_iter()
                                                            .map(|s| view! { <span class="chip">{s.subcategory_name}</span> })
                                                            .collect_view()}
                                                    </div>
                                                </TableCell>
                                                <TableCell>{format_timestamp(category.created_at.as_deref())}</TableCell>
                                                <TableCell class="table__cell--actions">
                                                    <Button
                                                        variant="ghost"
                                                        size="sm"
                                                        on_click=Callback::new(move |_| {
                                                            let (id, name) = target.clone();
                                                            subcategory_drawer.open_for(id, name);
                                                        })
                                                    >
                                                        "Add sub-category"
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
                page=Signal::derive(move || args.with(|a| a.pagination.page))
                limit=Signal::derive(move || args.with(|a| a.pagination.limit))
                total=Signal::derive(move || categories.with(|s| s.data.as_ref().map(|p| p.total).unwrap_or(0)))
                on_page_change=Callback::new(move |page| args.update(|a| a.pagination.page = page))
                on_limit_change=Callback::new(move |limit| {
                    args.update(|a| a.pagination = Pagination::new(1, limit))
                })
            />

            <CategoryDrawer vm=category_drawer />
            <SubcategoryDrawer vm=subcategory_drawer />
        </div>
    }
}
