use serde::de::DeserializeOwned;
use serde_json::Value;

use super::endpoint::decode;
use super::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryStatus {
    /// Nothing requested yet
    #[default]
    Uninitialized,
    /// First request in flight
    Loading,
    /// Last settled request succeeded
    Success,
    /// Last settled request failed
    Error,
}

/// What a subscriber sees of a cache entry.
///
/// `data` survives refetches and failed refetches, so a list keeps showing
/// its last good rows while `is_fetching` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    pub status: QueryStatus,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub is_fetching: bool,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            status: QueryStatus::Uninitialized,
            data: None,
            error: None,
            is_fetching: false,
        }
    }
}

impl<T> QueryState<T> {
    /// No data yet and a request is running
    pub fn is_loading(&self) -> bool {
        self.data.is_none() && matches!(self.status, QueryStatus::Loading | QueryStatus::Uninitialized)
    }

    pub fn is_success(&self) -> bool {
        self.status == QueryStatus::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == QueryStatus::Error
    }
}

/// Type-erased snapshot stored by the client.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EntrySnapshot {
    pub status: QueryStatus,
    pub data: Option<Value>,
    pub error: Option<ApiError>,
    pub is_fetching: bool,
}

impl EntrySnapshot {
    pub fn decode<T: DeserializeOwned>(&self) -> QueryState<T> {
        let data = match self.data.clone().map(decode::<T>).transpose() {
            Ok(data) => data,
            Err(e) => {
                log::error!("cache entry does not match endpoint output: {}", e);
                return QueryState {
                    status: QueryStatus::Error,
                    data: None,
                    error: Some(e),
                    is_fetching: self.is_fetching,
                };
            }
        };
        QueryState {
            status: self.status,
            data,
            error: self.error.clone(),
            is_fetching: self.is_fetching,
        }
    }
}
