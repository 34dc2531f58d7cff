use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::{Rc, Weak};
use std::time::Duration;

use futures::future::{LocalBoxFuture, Shared};
use futures::FutureExt;
use serde_json::Value;

use super::endpoint::{decode, MutationEndpoint, QueryEndpoint, RequestSpec};
use super::error::ApiError;
use super::runtime::Runtime;
use super::state::{EntrySnapshot, QueryState, QueryStatus};
use super::tags::Tag;
use super::transport::Transport;

/// Endpoint name + canonical JSON of the arguments.
///
/// Arguments that fail to serialize are keyed by the request they build,
/// so distinct requests never share an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey {
    pub endpoint: &'static str,
    pub args: String,
}

impl CacheKey {
    pub fn of<E: QueryEndpoint>(args: &E::Args) -> Self {
        Self {
            endpoint: E::NAME,
            args: match serde_json::to_string(args) {
                Ok(json) => json,
                Err(e) => {
                    log::error!("cannot serialize {} args: {}", E::NAME, e);
                    format!("{:?}", E::request(args))
                }
            },
        }
    }
}

type Observer = Rc<dyn Fn(&EntrySnapshot)>;
type SharedFetch = Shared<LocalBoxFuture<'static, Result<Value, ApiError>>>;

struct Entry {
    request: RequestSpec,
    provides: Vec<Tag>,
    data: Option<Value>,
    error: Option<ApiError>,
    settled: bool,
    in_flight: Option<(u64, SharedFetch)>,
    refetch_pending: bool,
    stale: bool,
    observers: BTreeMap<u64, Observer>,
    eviction_epoch: u64,
}

impl Entry {
    fn new(request: RequestSpec, provides: Vec<Tag>) -> Self {
        Self {
            request,
            provides,
            data: None,
            error: None,
            settled: false,
            in_flight: None,
            refetch_pending: false,
            stale: false,
            observers: BTreeMap::new(),
            eviction_epoch: 0,
        }
    }

    fn snapshot(&self) -> EntrySnapshot {
        let is_fetching = self.in_flight.is_some();
        let status = if !self.settled {
            if is_fetching {
                QueryStatus::Loading
            } else {
                QueryStatus::Uninitialized
            }
        } else if self.error.is_some() {
            QueryStatus::Error
        } else {
            QueryStatus::Success
        };
        EntrySnapshot {
            status,
            data: self.data.clone(),
            error: self.error.clone(),
            is_fetching,
        }
    }

    /// Unsettled, stale and failed entries all fetch on subscribe.
    fn needs_fetch(&self) -> bool {
        self.in_flight.is_none() && (!self.settled || self.stale || self.error.is_some())
    }

    fn provides_any(&self, tags: &[Tag]) -> bool {
        self.provides.iter().any(|t| tags.contains(t))
    }
}

#[derive(Default)]
struct State {
    entries: HashMap<CacheKey, Entry>,
    next_id: u64,
}

impl State {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

struct QueryClientInner {
    state: RefCell<State>,
    transport: Rc<dyn Transport>,
    runtime: Rc<dyn Runtime>,
    keep_unused_for: Duration,
}

/// Shared request cache.
///
/// One entry per endpoint + arguments. Concurrent readers of the same entry
/// share a single request. Entries carry the tags their endpoint provides;
/// a successful mutation marks every entry providing one of its tags stale
/// and refetches the ones somebody is watching. Entries without subscribers
/// are dropped after `keep_unused_for`.
///
/// Observers are always called with the internal state released, so an
/// observer may call back into the client.
#[derive(Clone)]
pub struct QueryClient {
    inner: Rc<QueryClientInner>,
}

impl QueryClient {
    pub fn new(
        transport: Rc<dyn Transport>,
        runtime: Rc<dyn Runtime>,
        keep_unused_for: Duration,
    ) -> Self {
        Self {
            inner: Rc::new(QueryClientInner {
                state: RefCell::new(State::default()),
                transport,
                runtime,
                keep_unused_for,
            }),
        }
    }

    /// Watch an entry. The observer receives the current state right away
    /// and again after every change until the subscription is dropped.
    pub fn subscribe<E, F>(&self, args: &E::Args, observer: F) -> Subscription
    where
        E: QueryEndpoint,
        F: Fn(QueryState<E::Output>) + 'static,
    {
        let key = CacheKey::of::<E>(args);
        let observer: Observer = Rc::new(move |snapshot: &EntrySnapshot| {
            observer(snapshot.decode::<E::Output>())
        });

        let (id, snapshot, fetch) = {
            let mut state = self.inner.state.borrow_mut();
            let id = state.next_id();
            let entry = state
                .entries
                .entry(key.clone())
                .or_insert_with(|| Entry::new(E::request(args), E::provides(args)));
            entry.observers.insert(id, observer.clone());
            // cancels a pending eviction
            entry.eviction_epoch += 1;
            (id, entry.snapshot(), entry.needs_fetch())
        };

        observer(&snapshot);
        if fetch {
            self.start_fetch(&key);
        }

        Subscription {
            client: Rc::downgrade(&self.inner),
            key,
            id,
        }
    }

    /// One-off read. Resolves from cache when the entry is fresh, otherwise
    /// joins (or starts) the entry's request.
    pub fn fetch<E: QueryEndpoint>(
        &self,
        args: &E::Args,
    ) -> LocalBoxFuture<'static, Result<E::Output, ApiError>> {
        let key = CacheKey::of::<E>(args);
        let (cached, created) = {
            let mut state = self.inner.state.borrow_mut();
            let created = !state.entries.contains_key(&key);
            let entry = state
                .entries
                .entry(key.clone())
                .or_insert_with(|| Entry::new(E::request(args), E::provides(args)));
            let cached = if entry.settled && !entry.stale && entry.error.is_none() {
                entry.data.clone()
            } else {
                None
            };
            (cached, created)
        };

        if let Some(value) = cached {
            return async move { decode::<E::Output>(value) }.boxed_local();
        }

        let pending = self.shared_fetch(&key);
        if created {
            self.schedule_eviction(&key);
        }
        async move { pending.await.and_then(decode::<E::Output>) }.boxed_local()
    }

    /// Force a request for a cached entry. No-op when one is already running.
    pub fn refetch<E: QueryEndpoint>(&self, args: &E::Args) {
        let key = CacheKey::of::<E>(args);
        let exists = self.inner.state.borrow().entries.contains_key(&key);
        if exists {
            self.start_fetch(&key);
        }
    }

    /// Current state of an entry without subscribing.
    pub fn read<E: QueryEndpoint>(&self, args: &E::Args) -> QueryState<E::Output> {
        let key = CacheKey::of::<E>(args);
        let snapshot = self
            .inner
            .state
            .borrow()
            .entries
            .get(&key)
            .map(Entry::snapshot);
        snapshot.map(|s| s.decode()).unwrap_or_default()
    }

    pub fn subscriber_count<E: QueryEndpoint>(&self, args: &E::Args) -> usize {
        let key = CacheKey::of::<E>(args);
        self.inner
            .state
            .borrow()
            .entries
            .get(&key)
            .map(|e| e.observers.len())
            .unwrap_or(0)
    }

    pub fn is_cached<E: QueryEndpoint>(&self, args: &E::Args) -> bool {
        let key = CacheKey::of::<E>(args);
        self.inner.state.borrow().entries.contains_key(&key)
    }

    /// Mark every entry providing one of `tags` stale.
    ///
    /// Watched idle entries refetch now. Entries with a request running
    /// refetch once it settles. Unwatched entries refetch on their next
    /// subscription.
    pub fn invalidate(&self, tags: &[Tag]) {
        if tags.is_empty() {
            return;
        }
        let refetch: Vec<CacheKey> = {
            let mut state = self.inner.state.borrow_mut();
            let mut refetch = Vec::new();
            for (key, entry) in state.entries.iter_mut() {
                if !entry.provides_any(tags) {
                    continue;
                }
                entry.stale = true;
                if entry.in_flight.is_some() {
                    entry.refetch_pending = true;
                } else if !entry.observers.is_empty() {
                    refetch.push(key.clone());
                }
            }
            refetch
        };

        log::debug!(
            "invalidated {:?}, refetching {} entr{}",
            tags,
            refetch.len(),
            if refetch.len() == 1 { "y" } else { "ies" }
        );
        for key in refetch {
            self.start_fetch(&key);
        }
    }

    /// Run a write. Invalidates the endpoint's tags on success only.
    pub fn mutate<M: MutationEndpoint>(
        &self,
        args: M::Args,
    ) -> LocalBoxFuture<'static, Result<M::Output, ApiError>> {
        let request = M::request(&args);
        let tags = M::invalidates(&args);
        let send = self.inner.transport.send(request);
        let client = self.clone();
        async move {
            match send.await {
                Ok(value) => {
                    client.invalidate(&tags);
                    decode::<M::Output>(value)
                }
                Err(e) => {
                    log::warn!("{} failed: {}", M::NAME, e);
                    Err(e)
                }
            }
        }
        .boxed_local()
    }

    fn start_fetch(&self, key: &CacheKey) {
        let _pending = self.shared_fetch(key);
    }

    /// Joins the entry's running request or starts a new one.
    fn shared_fetch(&self, key: &CacheKey) -> SharedFetch {
        let (id, request) = {
            let mut state = self.inner.state.borrow_mut();
            let id = state.next_id();
            match state.entries.get(key) {
                Some(Entry {
                    in_flight: Some((_, pending)),
                    ..
                }) => return pending.clone(),
                Some(entry) => (id, entry.request.clone()),
                None => {
                    return futures::future::ready(Err(ApiError::Network(format!(
                        "no cache entry for {}",
                        key.endpoint
                    ))))
                    .boxed_local()
                    .shared()
                }
            }
        };

        let send = self.inner.transport.send(request);
        let client = Rc::downgrade(&self.inner);
        let settle_key = key.clone();
        let pending = async move {
            let result = send.await;
            if let Some(inner) = client.upgrade() {
                QueryClient { inner }.settle(&settle_key, id, result.clone());
            }
            result
        }
        .boxed_local()
        .shared();

        if let Some(entry) = self.inner.state.borrow_mut().entries.get_mut(key) {
            entry.in_flight = Some((id, pending.clone()));
        }
        self.inner
            .runtime
            .spawn(pending.clone().map(|_| ()).boxed_local());
        self.notify(key);
        pending
    }

    fn settle(&self, key: &CacheKey, id: u64, result: Result<Value, ApiError>) {
        let refetch = {
            let mut state = self.inner.state.borrow_mut();
            let Some(entry) = state.entries.get_mut(key) else {
                log::debug!("discarding result for evicted {}", key.endpoint);
                return;
            };
            if !matches!(entry.in_flight, Some((current, _)) if current == id) {
                log::debug!("discarding superseded result for {}", key.endpoint);
                return;
            }
            entry.in_flight = None;
            entry.settled = true;
            match result {
                Ok(value) => {
                    entry.data = Some(value);
                    entry.error = None;
                }
                Err(e) => {
                    log::warn!("{} failed: {}", key.endpoint, e);
                    entry.error = Some(e);
                }
            }
            entry.stale = entry.refetch_pending;
            let refetch = entry.refetch_pending && !entry.observers.is_empty();
            entry.refetch_pending = false;
            refetch
        };

        self.notify(key);
        if refetch {
            self.start_fetch(key);
        }
    }

    fn notify(&self, key: &CacheKey) {
        let (observers, snapshot) = {
            let state = self.inner.state.borrow();
            let Some(entry) = state.entries.get(key) else {
                return;
            };
            let observers: Vec<Observer> = entry.observers.values().cloned().collect();
            (observers, entry.snapshot())
        };
        for observer in observers {
            observer(&snapshot);
        }
    }

    fn unsubscribe(&self, key: &CacheKey, id: u64) {
        let removed = {
            let mut state = self.inner.state.borrow_mut();
            let Some(entry) = state.entries.get_mut(key) else {
                return;
            };
            entry.observers.remove(&id)
        };
        // observer closures may own reactive handles; drop them unborrowed
        drop(removed);

        let unused = self
            .inner
            .state
            .borrow()
            .entries
            .get(key)
            .is_some_and(|e| e.observers.is_empty());
        if unused {
            self.schedule_eviction(key);
        }
    }

    fn schedule_eviction(&self, key: &CacheKey) {
        let epoch = {
            let mut state = self.inner.state.borrow_mut();
            let Some(entry) = state.entries.get_mut(key) else {
                return;
            };
            entry.eviction_epoch += 1;
            entry.eviction_epoch
        };

        let sleep = self.inner.runtime.sleep(self.inner.keep_unused_for);
        let client = Rc::downgrade(&self.inner);
        let key = key.clone();
        self.inner.runtime.spawn(
            async move {
                sleep.await;
                if let Some(inner) = client.upgrade() {
                    QueryClient { inner }.evict_if_unused(&key, epoch);
                }
            }
            .boxed_local(),
        );
    }

    fn evict_if_unused(&self, key: &CacheKey, epoch: u64) {
        let removed = {
            let mut state = self.inner.state.borrow_mut();
            let unused = state
                .entries
                .get(key)
                .is_some_and(|e| e.observers.is_empty() && e.eviction_epoch == epoch);
            if unused {
                state.entries.remove(key)
            } else {
                None
            }
        };
        if removed.is_some() {
            log::debug!("evicted {} {}", key.endpoint, key.args);
        }
    }
}

/// Keeps an entry alive and its observer registered. Unsubscribes on drop.
pub struct Subscription {
    client: Weak<QueryClientInner>,
    key: CacheKey,
    id: u64,
}

impl Subscription {
    pub fn key(&self) -> &CacheKey {
        &self.key
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.client.upgrade() {
            QueryClient { inner }.unsubscribe(&self.key, self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_admin_user::api::{BlockUnblockAdmins, CreateSubAdmin, GetAdmin};
    use crate::domain::a002_admin_role::api::{CreateAdminRole, GetAdminRoles};
    use crate::shared::query::testing::Harness;
    use contracts::domain::a001_admin_user::{
        AdminDetail, BlockAction, BlockUnblockRequest, CreateSubAdminRequest,
    };
    use contracts::domain::a002_admin_role::{AdminRole, RoleUpsert};
    use contracts::shared::list::ListResponse;
    use serde_json::json;
    use std::cell::RefCell;

    fn admin_json(id: &str, name: &str) -> Value {
        json!({ "id": id, "fullName": name, "email": "a@b.co", "status": "active" })
    }

    fn empty_page() -> Value {
        json!({ "items": [], "total": 0, "page": 1, "limit": 10 })
    }

    fn role_body() -> RoleUpsert {
        RoleUpsert {
            name: "Moderators".into(),
            permission_ids: vec!["content.view".into()],
        }
    }

    fn recorder<T: 'static>() -> (Rc<RefCell<Vec<QueryState<T>>>>, impl Fn(QueryState<T>)) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |state| sink.borrow_mut().push(state))
    }

    #[test]
    fn test_concurrent_subscribers_share_one_request() {
        let mut h = Harness::new();
        let (first, on_first) = recorder::<AdminDetail>();
        let (second, on_second) = recorder::<AdminDetail>();

        let _a = h.client.subscribe::<GetAdmin, _>(&"123".to_string(), on_first);
        let _b = h.client.subscribe::<GetAdmin, _>(&"123".to_string(), on_second);
        assert_eq!(h.transport.send_count(), 1);
        assert_eq!(h.client.subscriber_count::<GetAdmin>(&"123".to_string()), 2);

        h.transport.resolve("/admin/user/user-details/123", Ok(admin_json("123", "Ana")));
        h.run();

        let a = first.borrow().last().cloned().unwrap();
        let b = second.borrow().last().cloned().unwrap();
        assert!(a.is_success());
        assert_eq!(a.data, b.data);
        assert_eq!(a.data.unwrap().full_name, "Ana");
    }

    #[test]
    fn test_concurrent_fetches_share_one_request() {
        let mut h = Harness::new();
        let one = h.client.fetch::<GetAdmin>(&"123".to_string());
        let two = h.client.fetch::<GetAdmin>(&"123".to_string());
        assert_eq!(h.transport.send_count(), 1);

        h.transport.resolve("/admin/user/user-details/123", Ok(admin_json("123", "Ana")));
        let (one, two) = h.block_on(futures::future::join(one, two));
        assert_eq!(one.unwrap(), two.unwrap());

        // fresh entry is served from cache
        let three = h.block_on(h.client.fetch::<GetAdmin>(&"123".to_string()));
        assert!(three.is_ok());
        assert_eq!(h.transport.send_count(), 1);
    }

    #[test]
    fn test_subscriber_sees_loading_then_success() {
        let mut h = Harness::new();
        let (seen, observer) = recorder::<AdminDetail>();
        let _sub = h.client.subscribe::<GetAdmin, _>(&"7".to_string(), observer);

        h.transport.resolve("/admin/user/user-details/7", Ok(admin_json("7", "Bo")));
        h.run();

        let statuses: Vec<QueryStatus> = seen.borrow().iter().map(|s| s.status).collect();
        assert_eq!(
            statuses,
            vec![
                QueryStatus::Uninitialized,
                QueryStatus::Loading,
                QueryStatus::Success
            ]
        );
    }

    #[test]
    fn test_mutation_refetches_only_matching_tags() {
        let mut h = Harness::new();
        let (roles_seen, on_roles) = recorder::<ListResponse<AdminRole>>();
        let (admin_seen, on_admin) = recorder::<AdminDetail>();
        let _roles = h.client.subscribe::<GetAdminRoles, _>(&(), on_roles);
        let _admin = h.client.subscribe::<GetAdmin, _>(&"123".to_string(), on_admin);

        h.transport.resolve("/admin/user/roles", Ok(empty_page()));
        h.transport.resolve("/admin/user/user-details/123", Ok(admin_json("123", "Ana")));
        h.run();
        assert_eq!(h.transport.send_count(), 2);

        let created = h.client.mutate::<CreateAdminRole>(role_body());
        h.transport.resolve("/admin/user/roles", Ok(json!({ "id": "r1" })));
        assert!(h.block_on(created).is_ok());

        // roles list refetched, admin detail untouched
        assert_eq!(h.transport.send_count(), 4);
        assert_eq!(h.transport.pending_urls(), vec!["/admin/user/roles".to_string()]);
        assert!(roles_seen.borrow().last().unwrap().is_fetching);
        assert!(!admin_seen.borrow().last().unwrap().is_fetching);
    }

    #[test]
    fn test_failed_mutation_invalidates_nothing() {
        let mut h = Harness::new();
        let (_seen, on_roles) = recorder::<ListResponse<AdminRole>>();
        let _roles = h.client.subscribe::<GetAdminRoles, _>(&(), on_roles);
        h.transport.resolve("/admin/user/roles", Ok(empty_page()));
        h.run();

        let created = h.client.mutate::<CreateAdminRole>(role_body());
        h.transport.resolve(
            "/admin/user/roles",
            Err(ApiError::Http {
                status: 409,
                message: "Role name already exists".into(),
            }),
        );
        let result = h.block_on(created);
        assert!(matches!(result, Err(ApiError::Http { status: 409, .. })));
        assert_eq!(h.transport.send_count(), 2);
        assert!(h.transport.pending_urls().is_empty());
    }

    #[test]
    fn test_invalidation_while_in_flight_refetches_once() {
        let mut h = Harness::new();
        let (_seen, on_admin) = recorder::<AdminDetail>();
        let _sub = h.client.subscribe::<GetAdmin, _>(&"123".to_string(), on_admin);
        assert_eq!(h.transport.send_count(), 1);

        h.client.invalidate(&[Tag::Admin]);
        h.client.invalidate(&[Tag::Admin]);
        assert_eq!(h.transport.send_count(), 1);

        h.transport.resolve("/admin/user/user-details/123", Ok(admin_json("123", "Old")));
        h.run();
        assert_eq!(h.transport.send_count(), 2);

        h.transport.resolve("/admin/user/user-details/123", Ok(admin_json("123", "New")));
        h.run();
        assert_eq!(h.transport.send_count(), 2);
        let state = h.client.read::<GetAdmin>(&"123".to_string());
        assert_eq!(state.data.unwrap().full_name, "New");
    }

    #[test]
    fn test_unwatched_stale_entry_refetches_on_subscribe() {
        let mut h = Harness::new();
        let sub = h
            .client
            .subscribe::<GetAdmin, _>(&"123".to_string(), |_: QueryState<AdminDetail>| {});
        h.transport.resolve("/admin/user/user-details/123", Ok(admin_json("123", "Ana")));
        h.run();
        drop(sub);

        let blocked = h.client.mutate::<BlockUnblockAdmins>(BlockUnblockRequest {
            user_ids: vec!["123".into()],
            action: BlockAction::Block,
            admin_blocked_un_blocked_reason: "Spam reports".into(),
        });
        h.transport.resolve("/admin/user/block-unblock", Ok(Value::Null));
        assert!(h.block_on(blocked).is_ok());
        // nobody watching: no request yet
        assert_eq!(h.transport.send_count(), 2);

        let (seen, observer) = recorder::<AdminDetail>();
        let _again = h.client.subscribe::<GetAdmin, _>(&"123".to_string(), observer);
        assert_eq!(h.transport.send_count(), 3);
        // stale data is shown while the refetch runs
        let first = seen.borrow()[0].clone();
        assert_eq!(first.data.unwrap().full_name, "Ana");
    }

    #[test]
    fn test_unused_entry_evicted_after_grace() {
        let mut h = Harness::new();
        let args = "123".to_string();
        let sub = h
            .client
            .subscribe::<GetAdmin, _>(&args, |_: QueryState<AdminDetail>| {});
        h.transport.resolve("/admin/user/user-details/123", Ok(admin_json("123", "Ana")));
        h.run();

        drop(sub);
        h.run();
        assert!(h.client.is_cached::<GetAdmin>(&args));
        assert_eq!(h.runtime.pending_timers(), 1);

        h.runtime.fire_timers();
        h.run();
        assert!(!h.client.is_cached::<GetAdmin>(&args));
    }

    #[test]
    fn test_resubscribe_within_grace_keeps_entry() {
        let mut h = Harness::new();
        let args = "123".to_string();
        let sub = h
            .client
            .subscribe::<GetAdmin, _>(&args, |_: QueryState<AdminDetail>| {});
        h.transport.resolve("/admin/user/user-details/123", Ok(admin_json("123", "Ana")));
        h.run();
        drop(sub);

        let _again = h
            .client
            .subscribe::<GetAdmin, _>(&args, |_: QueryState<AdminDetail>| {});
        h.runtime.fire_timers();
        h.run();
        assert!(h.client.is_cached::<GetAdmin>(&args));
        assert_eq!(h.transport.send_count(), 1);
    }

    #[test]
    fn test_late_result_after_eviction_is_discarded() {
        let mut h = Harness::new();
        let args = "123".to_string();
        let sub = h
            .client
            .subscribe::<GetAdmin, _>(&args, |_: QueryState<AdminDetail>| {});
        drop(sub);
        h.runtime.fire_timers();
        h.run();
        assert!(!h.client.is_cached::<GetAdmin>(&args));

        h.transport.resolve("/admin/user/user-details/123", Ok(admin_json("123", "Late")));
        h.run();
        assert!(!h.client.is_cached::<GetAdmin>(&args));
        assert_eq!(h.client.read::<GetAdmin>(&args).status, QueryStatus::Uninitialized);
    }

    #[test]
    fn test_failed_refetch_keeps_last_data() {
        let mut h = Harness::new();
        let args = "123".to_string();
        let _sub = h
            .client
            .subscribe::<GetAdmin, _>(&args, |_: QueryState<AdminDetail>| {});
        h.transport.resolve("/admin/user/user-details/123", Ok(admin_json("123", "Ana")));
        h.run();

        h.client.refetch::<GetAdmin>(&args);
        h.transport.resolve(
            "/admin/user/user-details/123",
            Err(ApiError::Network("offline".into())),
        );
        h.run();

        let state = h.client.read::<GetAdmin>(&args);
        assert!(state.is_error());
        assert_eq!(state.data.unwrap().full_name, "Ana");
    }

    #[test]
    fn test_new_sub_admin_refetches_roles() {
        let mut h = Harness::new();
        let (_seen, on_roles) = recorder::<ListResponse<AdminRole>>();
        let _roles = h.client.subscribe::<GetAdminRoles, _>(&(), on_roles);
        h.transport.resolve("/admin/user/roles", Ok(empty_page()));
        h.run();

        let created = h.client.mutate::<CreateSubAdmin>(CreateSubAdminRequest {
            full_name: "Ana".into(),
            email: "ana@example.com".into(),
            role: "r1".into(),
        });
        h.transport.resolve("/admin/user/create-sub-admin", Ok(json!({ "id": "u9" })));
        assert!(h.block_on(created).is_ok());

        // assigned-admin counts on roles changed
        assert_eq!(h.transport.pending_urls(), vec!["/admin/user/roles".to_string()]);
    }

    #[test]
    fn test_failed_entry_retried_on_resubscribe() {
        let mut h = Harness::new();
        let args = "123".to_string();
        let sub = h
            .client
            .subscribe::<GetAdmin, _>(&args, |_: QueryState<AdminDetail>| {});
        h.transport.resolve(
            "/admin/user/user-details/123",
            Err(ApiError::Network("offline".into())),
        );
        h.run();
        drop(sub);
        assert!(h.client.read::<GetAdmin>(&args).is_error());

        let (seen, observer) = recorder::<AdminDetail>();
        let _again = h.client.subscribe::<GetAdmin, _>(&args, observer);
        assert_eq!(h.transport.send_count(), 2);

        h.transport.resolve("/admin/user/user-details/123", Ok(admin_json("123", "Ana")));
        h.run();
        assert!(seen.borrow().last().unwrap().is_success());
    }

    #[derive(Clone)]
    struct Opaque(u32);

    impl serde::Serialize for Opaque {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("opaque"))
        }
    }

    struct GetOpaque;

    impl QueryEndpoint for GetOpaque {
        const NAME: &'static str = "getOpaque";
        type Args = Opaque;
        type Output = Value;

        fn request(args: &Self::Args) -> RequestSpec {
            RequestSpec::get(format!("/opaque/{}", args.0))
        }

        fn provides(_: &Self::Args) -> Vec<Tag> {
            Vec::new()
        }
    }

    #[test]
    fn test_unserializable_args_keep_distinct_keys() {
        let one = CacheKey::of::<GetOpaque>(&Opaque(1));
        let two = CacheKey::of::<GetOpaque>(&Opaque(2));
        assert_ne!(one, two);
        assert!(one.args.contains("/opaque/1"));
        assert_eq!(one, CacheKey::of::<GetOpaque>(&Opaque(1)));
    }
}
