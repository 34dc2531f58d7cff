use leptos::prelude::*;

use crate::shared::components::skeleton::TableSkeleton;
use crate::shared::components::ui::Button;
use crate::shared::query::QueryState;

/// Renders a query state: skeleton while the first load runs, an error
/// panel with retry, or `children` with the data. Data already shown stays
/// on screen during background refetches.
#[component]
pub fn QueryView<T, F, V>(
    #[prop(into)]
    state: Signal<QueryState<T>>,
    on_retry: Callback<()>,
    #[prop(optional)]
    skeleton_columns: Option<usize>,
    children: F,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || {
        let current = state.get();
        match (current.data, current.error) {
            (Some(data), _) => view! {
                <div class="query-view" class:query-view--refreshing=current.is_fetching>
                    {children(data)}
                </div>
            }
            .into_any(),
            (None, Some(error)) => view! {
                <div class="query-view__error" role="alert">
                    <span>{error.user_message()}</span>
                    <Button variant="secondary" size="sm" on_click=Callback::new(move |_| on_retry.run(()))>
                        "Retry"
                    </Button>
                </div>
            }
            .into_any(),
            (None, None) => view! { <TableSkeleton columns=skeleton_columns.unwrap_or(4) /> }.into_any(),
        }
    }
}
