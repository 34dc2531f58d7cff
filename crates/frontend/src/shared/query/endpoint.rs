use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;
use super::tags::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// What an endpoint sends: method, path relative to the API base, JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

impl RequestSpec {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: &impl Serialize) -> Self {
        Self::with_body(Method::Post, url, body)
    }

    pub fn put(url: impl Into<String>, body: &impl Serialize) -> Self {
        Self::with_body(Method::Put, url, body)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            url: url.into(),
            body: None,
        }
    }

    pub fn delete_with(url: impl Into<String>, body: &impl Serialize) -> Self {
        Self::with_body(Method::Delete, url, body)
    }

    fn with_body(method: Method, url: impl Into<String>, body: &impl Serialize) -> Self {
        Self {
            method,
            url: url.into(),
            body: Some(serde_json::to_value(body).unwrap_or(Value::Null)),
        }
    }
}

/// Read endpoint. Results are cached and shared per argument value.
pub trait QueryEndpoint: 'static {
    const NAME: &'static str;
    type Args: Serialize + Clone + 'static;
    type Output: DeserializeOwned + Clone + 'static;

    fn request(args: &Self::Args) -> RequestSpec;

    fn provides(args: &Self::Args) -> Vec<Tag>;
}

/// Write endpoint. A successful call invalidates `invalidates(args)`.
pub trait MutationEndpoint: 'static {
    const NAME: &'static str;
    type Args: 'static;
    type Output: DeserializeOwned + 'static;

    fn request(args: &Self::Args) -> RequestSpec;

    fn invalidates(args: &Self::Args) -> Vec<Tag>;
}

pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
