//! Global notification channel.
//!
//! Mutation results and other one-line messages are pushed here and shown by
//! `NotificationHost` until dismissed or until the configured timeout fires.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification--success",
            NotificationKind::Error => "notification notification--error",
            NotificationKind::Info => "notification notification--info",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "check",
            NotificationKind::Error => "alert-triangle",
            NotificationKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Ordered list of visible notifications, oldest first.
///
/// Identical messages already on screen are not repeated; the existing id
/// is returned instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
    limit: usize,
}

impl NotificationQueue {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
            limit,
        }
    }

    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let message = message.into();
        if let Some(existing) = self
            .items
            .iter()
            .find(|n| n.kind == kind && n.message == message)
        {
            return existing.id;
        }

        self.next_id += 1;
        self.items.push(Notification {
            id: self.next_id,
            kind,
            message,
        });
        if self.limit > 0 && self.items.len() > self.limit {
            let overflow = self.items.len() - self.limit;
            self.items.drain(..overflow);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        before != self.items.len()
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

const MAX_VISIBLE: usize = 4;

#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
    timeout_ms: u32,
}

impl NotificationService {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::with_limit(MAX_VISIBLE)),
            timeout_ms,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NotificationKind::Info, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    fn push(&self, kind: NotificationKind, message: impl Into<String>) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));

        let svc = *self;
        let timeout = self.timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            svc.dismiss(id);
        });
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>()
        .expect("NotificationService not provided in context (provide it in app root)")
}

/// Renders the notification stack in the top-right corner.
///
/// Must be mounted exactly once.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_notifications();

    view! {
        <div class="notification-host" role="status" aria-live="polite">
            <For
                each=move || svc.queue.with(|q| q.items().to_vec())
                key=|n| n.id
                children={move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class()>
                            <span class="notification__icon">{icon(n.kind.icon())}</span>
                            <span class="notification__message">{n.message}</span>
                            <button
                                class="notification__close"
                                aria-label="Dismiss"
                                on:click=move |_| svc.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut q = NotificationQueue::with_limit(4);
        let a = q.push(NotificationKind::Success, "Role created");
        let b = q.push(NotificationKind::Error, "Network error, please try again");
        assert_ne!(a, b);
        assert_eq!(q.items().len(), 2);

        assert!(q.dismiss(a));
        assert!(!q.dismiss(a));
        assert_eq!(q.items()[0].id, b);
    }

    #[test]
    fn test_duplicates_collapse() {
        let mut q = NotificationQueue::with_limit(4);
        let a = q.push(NotificationKind::Error, "Request failed (500)");
        let b = q.push(NotificationKind::Error, "Request failed (500)");
        assert_eq!(a, b);
        assert_eq!(q.items().len(), 1);
    }

    #[test]
    fn test_oldest_dropped_over_limit() {
        let mut q = NotificationQueue::with_limit(2);
        q.push(NotificationKind::Info, "one");
        q.push(NotificationKind::Info, "two");
        q.push(NotificationKind::Info, "three");
        let messages: Vec<&str> = q.items().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }
}
