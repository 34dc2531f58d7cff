use crate::domain::a001_admin_user::ui::list::AdminUserList;
use crate::domain::a002_admin_role::ui::list::AdminRoleList;
use crate::domain::a003_category::ui::list::CategoryList;
use crate::domain::a004_content_library::ui::list::ContentLibraryList;
use crate::domain::a005_legal_doc::ui::LegalDocsPage;
use crate::domain::a006_user_cohort::ui::list::CohortList;
use crate::domain::a007_blocked_keyword::ui::list::BlockedKeywordList;
use crate::layout::global_context::{use_app_context, Section};
use leptos::prelude::*;

/// Renders the active section; switching remounts the screen.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div data-zone="center" class="app-main__content">
            {move || match ctx.active.get() {
                Section::Admins => view! { <AdminUserList /> }.into_any(),
                Section::Roles => view! { <AdminRoleList /> }.into_any(),
                Section::Categories => view! { <CategoryList /> }.into_any(),
                Section::ContentLibrary => view! { <ContentLibraryList /> }.into_any(),
                Section::LegalDocs => view! { <LegalDocsPage /> }.into_any(),
                Section::Cohorts => view! { <CohortList /> }.into_any(),
                Section::BlockedKeywords => view! { <BlockedKeywordList /> }.into_any(),
            }}
        </div>
    }
}
