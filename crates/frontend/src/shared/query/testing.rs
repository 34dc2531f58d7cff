//! In-memory transport and runtime for driving the query client in tests.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;
use futures::executor::{LocalPool, LocalSpawner};
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use futures::FutureExt;
use serde_json::Value;

use super::{ApiError, QueryClient, RequestSpec, Runtime, Transport, TransportFuture};

type Reply = oneshot::Sender<Result<Value, ApiError>>;

/// Records every request and holds it open until the test resolves it.
#[derive(Default)]
pub struct MockTransport {
    sent: RefCell<Vec<RequestSpec>>,
    pending: RefCell<Vec<(RequestSpec, Reply)>>,
}

impl MockTransport {
    pub fn send_count(&self) -> usize {
        self.sent.borrow().len()
    }

    pub fn sent(&self) -> Vec<RequestSpec> {
        self.sent.borrow().clone()
    }

    pub fn pending_urls(&self) -> Vec<String> {
        self.pending
            .borrow()
            .iter()
            .map(|(request, _)| request.url.clone())
            .collect()
    }

    /// Completes the oldest open request for `url`.
    pub fn resolve(&self, url: &str, result: Result<Value, ApiError>) {
        let reply = {
            let mut pending = self.pending.borrow_mut();
            let index = pending
                .iter()
                .position(|(request, _)| request.url == url)
                .unwrap_or_else(|| panic!("no open request for {url}"));
            pending.remove(index).1
        };
        let _ = reply.send(result);
    }
}

impl Transport for MockTransport {
    fn send(&self, request: RequestSpec) -> TransportFuture {
        let (tx, rx) = oneshot::channel();
        self.sent.borrow_mut().push(request.clone());
        self.pending.borrow_mut().push((request, tx));
        rx.map(|reply| {
            reply.unwrap_or_else(|_| Err(ApiError::Network("request dropped".into())))
        })
        .boxed_local()
    }
}

/// Spawns onto a `LocalPool`; timers fire only when the test says so.
pub struct ManualRuntime {
    spawner: LocalSpawner,
    timers: RefCell<Vec<oneshot::Sender<()>>>,
}

impl ManualRuntime {
    pub fn new(spawner: LocalSpawner) -> Self {
        Self {
            spawner,
            timers: RefCell::new(Vec::new()),
        }
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    pub fn fire_timers(&self) {
        let timers = std::mem::take(&mut *self.timers.borrow_mut());
        for timer in timers {
            let _ = timer.send(());
        }
    }
}

impl Runtime for ManualRuntime {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.spawner
            .spawn_local(task)
            .expect("local pool is gone");
    }

    fn sleep(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
        let (tx, rx) = oneshot::channel();
        self.timers.borrow_mut().push(tx);
        rx.map(|_| ()).boxed_local()
    }
}

/// Client wired to the mock transport and manual runtime.
pub struct Harness {
    pub pool: LocalPool,
    pub transport: Rc<MockTransport>,
    pub runtime: Rc<ManualRuntime>,
    pub client: QueryClient,
}

impl Harness {
    pub fn new() -> Self {
        let pool = LocalPool::new();
        let transport = Rc::new(MockTransport::default());
        let runtime = Rc::new(ManualRuntime::new(pool.spawner()));
        let client = QueryClient::new(
            transport.clone(),
            runtime.clone(),
            Duration::from_secs(60),
        );
        Self {
            pool,
            transport,
            runtime,
            client,
        }
    }

    /// Drives spawned tasks until none can make progress.
    pub fn run(&mut self) {
        self.pool.run_until_stalled();
    }

    pub fn block_on<F: Future>(&mut self, future: F) -> F::Output {
        self.pool.run_until(future)
    }
}
