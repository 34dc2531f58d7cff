use crate::shared::icons::icon;
use contracts::shared::list::total_pages;
use leptos::prelude::*;

const PAGE_SIZE_OPTIONS: [i64; 4] = [10, 25, 50, 100];

/// Prev / next controls and page size for 1-based server-side paging
#[component]
pub fn PaginationControls(
    /// Current page, starting at 1
    #[prop(into)]
    page: Signal<i64>,
    /// Page size
    #[prop(into)]
    limit: Signal<i64>,
    /// Total count of items
    #[prop(into)]
    total: Signal<u64>,
    on_page_change: Callback<i64>,
    on_limit_change: Callback<i64>,
) -> impl IntoView {
    let pages = move || total_pages(total.get(), limit.get());

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                aria-label="Previous page"
                on:click=move |_| on_page_change.run(page.get() - 1)
                disabled=move || page.get() <= 1
            >
                <span class="icon-flip">{icon("chevron-right")}</span>
            </button>
            <span class="pagination-info">
                {move || format!("Page {} of {} ({})", page.get(), pages().max(1), total.get())}
            </span>
            <button
                class="pagination-btn"
                aria-label="Next page"
                on:click=move |_| on_page_change.run(page.get() + 1)
                disabled=move || page.get() >= pages()
            >
                {icon("chevron-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_limit_change.run(size);
                    }
                }
                prop:value=move || limit.get().to_string()
            >
                {PAGE_SIZE_OPTIONS.iter().map(|&size| view! {
                    <option value=size.to_string() selected=move || limit.get() == size>
                        {format!("{size} / page")}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}
