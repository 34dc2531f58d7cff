//! Declarative endpoint definitions on top of a tag-invalidated query cache.
//!
//! Queries are cached per `(endpoint, serialized args)` and shared by every
//! subscriber; mutations invalidate tags, and every subscribed query that
//! provides one of those tags is refetched in the background.

mod client;
mod endpoint;
mod error;
pub mod hooks;
mod params;
mod runtime;
mod state;
mod tags;
mod transport;

pub use client::{CacheKey, QueryClient, Subscription};
pub use endpoint::{decode, Method, MutationEndpoint, QueryEndpoint, RequestSpec};
pub use error::ApiError;
pub use params::QueryParams;
pub use runtime::{BrowserRuntime, Runtime};
pub use state::{QueryState, QueryStatus};
pub use tags::Tag;
pub use transport::{HttpTransport, Transport, TransportFuture};

#[cfg(test)]
pub(crate) mod testing;
