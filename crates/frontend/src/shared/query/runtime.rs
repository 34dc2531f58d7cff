use std::time::Duration;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;

/// Task spawning and timers used by the query client.
pub trait Runtime {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Browser event loop: `spawn_local` + `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRuntime;

impl Runtime for BrowserRuntime {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        leptos::task::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).boxed_local()
    }
}
