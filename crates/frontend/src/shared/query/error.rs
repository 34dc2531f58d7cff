use thiserror::Error;

/// Failure of a request issued through the query layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),

    #[error("Request failed with status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }

    /// Text for the notification channel. Server messages pass through.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Http { status, .. } => format!("Request failed ({})", status),
            ApiError::Network(_) => "Network error, please try again".to_string(),
            ApiError::Decode(_) | ApiError::Encode(_) => "Unexpected server response".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let conflict = ApiError::Http {
            status: 409,
            message: "Role name already exists".into(),
        };
        assert_eq!(conflict.user_message(), "Role name already exists");
        assert_eq!(
            ApiError::Http { status: 500, message: String::new() }.user_message(),
            "Request failed (500)"
        );
        assert!(ApiError::Http { status: 401, message: String::new() }.is_unauthorized());
    }
}
