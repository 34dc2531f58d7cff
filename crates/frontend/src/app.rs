use std::rc::Rc;

use leptos::prelude::*;

use crate::domain::a001_admin_user::encryption::{encryptor_from_config, EncryptorHandle};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::api_utils::api_base;
use crate::shared::config::{load_config, ClientConfig};
use crate::shared::notifications::{NotificationHost, NotificationService};
use crate::shared::query::hooks::provide_query_client;
use crate::shared::query::{BrowserRuntime, HttpTransport, QueryClient};

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("embedded config is invalid, using built-in defaults: {e}");
        ClientConfig::default()
    });

    let base = api_base(&config);
    log::info!("API base: {base}");
    provide_query_client(QueryClient::new(
        Rc::new(HttpTransport::new(base)),
        Rc::new(BrowserRuntime),
        config.keep_unused_for(),
    ));

    let timeout_ms = u32::try_from(config.notification_timeout().as_millis()).unwrap_or(u32::MAX);
    provide_context(NotificationService::new(timeout_ms));
    provide_context(EncryptorHandle(encryptor_from_config(&config.encryption)));
    provide_context(config);

    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_location_sync();

    view! {
        <Shell />
        <NotificationHost />
    }
}
