use leptos::prelude::*;

/// Grey placeholder block shown while data loads
#[component]
pub fn Skeleton(
    #[prop(optional, into)]
    width: MaybeProp<String>,
    #[prop(optional, into)]
    height: MaybeProp<String>,
) -> impl IntoView {
    let style = move || {
        format!(
            "width: {}; height: {};",
            width.get().unwrap_or_else(|| "100%".to_string()),
            height.get().unwrap_or_else(|| "1rem".to_string())
        )
    };
    view! { <span class="skeleton" style=style aria-hidden="true"></span> }
}

/// Table-shaped skeleton for list screens
#[component]
pub fn TableSkeleton(
    #[prop(optional)]
    rows: Option<usize>,
    #[prop(optional)]
    columns: Option<usize>,
) -> impl IntoView {
    let rows = rows.unwrap_or(5);
    let columns = columns.unwrap_or(4);

    view! {
        <div class="table-skeleton" aria-busy="true">
            {(0..rows).map(|_| view! {
                <div class="table-skeleton__row">
                    {(0..columns).map(|_| view! { <Skeleton height="1.25rem" /> }).collect_view()}
                </div>
            }).collect_view()}
        </div>
    }
}
