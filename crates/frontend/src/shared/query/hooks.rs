//! Leptos bindings for the query client.

use leptos::prelude::*;

use super::{ApiError, MutationEndpoint, QueryClient, QueryEndpoint, QueryState, Subscription};
use crate::shared::notifications::{use_notifications, NotificationService};

/// Handle placed in context. The client itself is `!Send`, the handle is `Copy`.
pub type QueryClientHandle = StoredValue<QueryClient, LocalStorage>;

pub fn provide_query_client(client: QueryClient) -> QueryClientHandle {
    let handle = StoredValue::new_local(client);
    provide_context(handle);
    handle
}

pub fn use_query_client() -> QueryClientHandle {
    use_context::<QueryClientHandle>().expect("QueryClient not found in component tree")
}

/// Subscribes to `E` with the arguments produced by `args`.
///
/// Re-subscribes whenever a signal read inside `args` changes; the previous
/// subscription is released after the new one is in place, so switching
/// between pages of a list never evicts an entry the user returns to.
pub fn use_query<E>(args: impl Fn() -> E::Args + 'static) -> Signal<QueryState<E::Output>>
where
    E: QueryEndpoint,
    E::Output: Send + Sync,
{
    let client = use_query_client();
    let state = RwSignal::new(QueryState::<E::Output>::default());
    let subscription = StoredValue::new_local(None::<Subscription>);

    Effect::new(move |_| {
        let args = args();
        let next = client.with_value(|c| {
            c.subscribe::<E, _>(&args, move |snapshot| {
                let _ = state.try_set(snapshot);
            })
        });
        subscription.set_value(Some(next));
    });

    on_cleanup(move || {
        let _ = subscription.try_update_value(|s| s.take());
    });

    state.into()
}

/// Fires a refetch of `E(args)` if the entry is cached.
pub fn refetch<E: QueryEndpoint>(client: QueryClientHandle, args: &E::Args) {
    client.with_value(|c| c.refetch::<E>(args));
}

/// Mutation runner captured at component creation, usable from event handlers.
///
/// Failures are reported through the notification channel and handed back
/// to the caller; the caller decides what happens to its form.
#[derive(Clone, Copy)]
pub struct Mutations {
    client: QueryClientHandle,
    notifications: NotificationService,
}

pub fn use_mutations() -> Mutations {
    Mutations {
        client: use_query_client(),
        notifications: use_notifications(),
    }
}

impl Mutations {
    pub fn notifications(&self) -> NotificationService {
        self.notifications
    }

    pub fn run<M, F>(&self, args: M::Args, success: &'static str, on_done: F)
    where
        M: MutationEndpoint,
        F: FnOnce(Result<M::Output, ApiError>) + 'static,
    {
        let pending = self.client.with_value(|c| c.mutate::<M>(args));
        let notifications = self.notifications;
        leptos::task::spawn_local(async move {
            let result = pending.await;
            match &result {
                Ok(_) => notifications.success(success),
                Err(e) => notifications.error(e.user_message()),
            }
            on_done(result);
        });
    }
}
