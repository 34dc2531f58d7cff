use contracts::domain::a001_admin_user::AdminDetail;
use leptos::prelude::*;

use crate::domain::a001_admin_user::api::GetAdmin;
use crate::shared::components::ui::{status_variant, Badge};
use crate::shared::components::QueryView;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::modal_frame::{FramePlacement, ModalFrame};
use crate::shared::query::hooks::{refetch, use_query, use_query_client};

/// Read-only side panel with the full admin record.
#[component]
pub fn AdminDetailPanel(user_id: String, on_close: Callback<()>) -> impl IntoView {
    let client = use_query_client();
    let id = StoredValue::new(user_id);
    let state = use_query::<GetAdmin>(move || id.get_value());

    view! {
        <ModalFrame placement=FramePlacement::Drawer on_close=on_close>
            <div class="drawer">
                <div class="drawer__header">
                    <h2 class="drawer__title">"Admin details"</h2>
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
                        state=state
                        on_retry=Callback::new(move |_| refetch::<GetAdmin>(client, &id.get_value()))
                        skeleton_columns=2
                        children={|admin: AdminDetail| view! { <AdminDetailFields admin=admin /> }}
                    />
                </div>
            </div>
        </ModalFrame>
    }
}

#[component]
fn AdminDetailFields(admin: AdminDetail) -> impl IntoView {
    let reason = admin.admin_blocked_un_blocked_reason.clone();

    view! {
        <dl class="detail-list">
            <dt>"Name"</dt>
            <dd>{admin.full_name}</dd>
            <dt>"Email"</dt>
            <dd>{admin.email}</dd>
            <dt>"Role"</dt>
            <dd>{admin.role_name.unwrap_or_else(|| "—".to_string())}</dd>
            <dt>"Status"</dt>
            <dd>
                <Badge variant=status_variant(admin.status.as_str())>{admin.status.label()}</Badge>
            </dd>
            <dt>"Permissions"</dt>
            <dd>{admin.permission_ids.len()}</dd>
            <dt>"Created"</dt>
            <dd>{format_timestamp(admin.created_at.as_deref())}</dd>
            <dt>"Last login"</dt>
            <dd>{format_timestamp(admin.last_login_at.as_deref())}</dd>
            {reason.map(|r| view! {
                <dt>"Status reason"</dt>
                <dd>{r}</dd>
            })}
        </dl>
    }
}
