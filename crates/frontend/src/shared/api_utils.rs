//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::ClientConfig;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the configured backend port and path prefix.
///
/// # Returns
/// - API base URL like "http://localhost:3000/api/v1"
/// - Just the prefix if window is not available
pub fn api_base(config: &ClientConfig) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return config.api.prefix.clone(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    origin_url(&protocol, &hostname, config)
}

fn origin_url(protocol: &str, hostname: &str, config: &ClientConfig) -> String {
    format!(
        "{}//{}:{}{}",
        protocol, hostname, config.api.port, config.api.prefix
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_url() {
        let config = ClientConfig::default();
        assert_eq!(
            origin_url("https:", "admin.example.com", &config),
            "https://admin.example.com:3000/api/v1"
        );
    }
}
