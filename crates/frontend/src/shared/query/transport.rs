use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;

use super::endpoint::{Method, RequestSpec};
use super::error::ApiError;
use crate::system::auth::storage;

pub type TransportFuture = LocalBoxFuture<'static, Result<Value, ApiError>>;

/// Sends a request and yields the JSON response body.
pub trait Transport {
    fn send(&self, request: RequestSpec) -> TransportFuture;
}

/// `fetch`-based transport with bearer auth from local storage.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: RequestSpec) -> TransportFuture {
        let url = format!("{}{}", self.base_url, request.url);
        async move {
            let mut builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            };
            if let Some(token) = storage::get_access_token() {
                builder = builder.header("Authorization", &format!("Bearer {}", token));
            }
            log::debug!("{} {}", request.method.as_str(), url);

            let response = send_builder(builder, request.body.as_ref()).await?;
            read_json(response).await
        }
        .boxed_local()
    }
}

async fn send_builder(builder: RequestBuilder, body: Option<&Value>) -> Result<Response, ApiError> {
    let sent = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await,
        None => builder.send().await,
    };
    sent.map_err(|e| ApiError::Network(e.to_string()))
}

async fn read_json(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    if !response.ok() {
        if status == 401 {
            log::warn!("access token rejected, clearing it");
            storage::clear_access_token();
        }
        return Err(ApiError::Http {
            status,
            message: error_message(&text).unwrap_or_else(|| response.status_text()),
        });
    }

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pulls `message` out of a JSON error body, if there is one.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"message":"Role name already exists"}"#),
            Some("Role name already exists".to_string())
        );
        assert_eq!(error_message("Bad Gateway"), None);
        assert_eq!(error_message(r#"{"error":true}"#), None);
    }
}
