//! Top bar: sidebar toggle, console title and account actions.

use crate::domain::a001_admin_user::ui::change_password::ChangePasswordDrawer;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::system::auth::storage;
use leptos::prelude::*;
use web_sys::window;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let password_open = RwSignal::new(false);

    let logout = move |_| {
        storage::clear_access_token();
        if let Some(w) = window() {
            if let Err(e) = w.location().reload() {
                log::warn!("reload after logout failed: {e:?}");
            }
        }
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Moderation Console"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    title="Change password"
                    on:click=move |_| password_open.set(true)
                >
                    {icon("key")}
                </button>
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
            <ChangePasswordDrawer open=password_open />
        </div>
    }
}
