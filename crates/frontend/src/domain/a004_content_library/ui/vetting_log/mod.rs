use contracts::domain::a004_content_library::{ModerationAction, VettingLog, VettingLogArgs};
use contracts::shared::list::{ListResponse, Pagination};
use leptos::prelude::*;

use crate::domain::a004_content_library::api::GetVettingLogs;
use crate::shared::components::ui::Badge;
use crate::shared::components::{PaginationControls, QueryView};
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::modal_frame::{FramePlacement, ModalFrame};
use crate::shared::query::hooks::{refetch, use_query, use_query_client};

fn action_variant(action: ModerationAction) -> &'static str {
    match action {
        ModerationAction::Approve => "success",
        ModerationAction::Reject => "error",
        ModerationAction::Flag => "warning",
    }
}

/// Moderation history of one content item, newest first.
#[component]
pub fn VettingLogPanel(content_id: String, on_close: Callback<()>) -> impl IntoView {
    let client = use_query_client();
    let args = RwSignal::new(VettingLogArgs {
        pagination: Pagination::default(),
        content_id,
    });
    let logs = use_query::<GetVettingLogs>(move || args.get());

    view! {
        <ModalFrame placement=FramePlacement::Drawer on_close=on_close>
            <div class="drawer">
                <div class="drawer__header">
                    <h2 class="drawer__title">"Vetting log"</h2>
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
                        state=logs
                        on_retry=Callback::new(move |_| refetch::<GetVettingLogs>(client, &args.get_untracked()))
                        skeleton_columns=3
                        children={|page: ListResponse<VettingLog>| {
                            if page.items.is_empty() {
                                return view! { <p class="empty-state">"No moderation actions yet."</p> }.into_any();
                            }
                            view! {
                                <ol class="timeline">
                                    {page
                                        .items
                                        .into_iter()
                                        .map(|entry| {
                                            view! {
                                                <li class="timeline__item">
                                                    <div class="timeline__head">
                                                        <Badge variant=action_variant(entry.action)>
                                                            {entry.action.label()}
                                                        </Badge>
                                                        <span class="timeline__meta">
                                                            {entry.performed_by.unwrap_or_else(|| "—".to_string())}
                                                            " · "
                                                            {format_timestamp(entry.created_at.as_deref())}
                                                        </span>
                                                    </div>
                                                    {entry.reason.map(|r| view! { <p class="timeline__reason">{r}</p> })}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ol>
                            }
                            .into_any()
                        }}
                    />
                    <PaginationControls
                        page=Signal::derive(move || args.with(|a| a.pagination.page))
                        limit=Signal::derive(move || args.with(|a| a.pagination.limit))
                        total=Signal::derive(move || logs.with(|s| s.data.as_ref().map(|p| p.total).unwrap_or(0)))
                        on_page_change=Callback::new(move |page| args.update(|a| a.pagination.page = page))
                        on_limit_change=Callback::new(move |limit| {
                            args.update(|a| a.pagination = Pagination::new(1, limit))
                        })
                    />
                </div>
            </div>
        </ModalFrame>
    }
}
