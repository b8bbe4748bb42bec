use thiserror::Error;

/// Everything that can go wrong talking to the backend.
///
/// `Unauthorized` is special: when a stored token was rejected the client
/// has already cleared it (and, on wasm, redirected to `/login`) by the
/// time a caller sees it, so pages generally treat it as "nothing left to
/// render". A failed login is the one caller that handles it directly.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unauthorized")]
    Unauthorized,

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for a local error banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Could not reach the server. Check your connection.".into(),
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Status { status, .. } => format!("Request failed ({status})"),
            ApiError::Unauthorized => "Your session has expired. Please sign in again.".into(),
            ApiError::Decode(_) => "Unexpected response from the server.".into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_prefers_server_text() {
        let err = ApiError::Status {
            status: 422,
            message: "title must not be empty".into(),
        };
        assert_eq!(err.user_message(), "title must not be empty");

        let bare = ApiError::Status {
            status: 500,
            message: String::new(),
        };
        assert_eq!(bare.user_message(), "Request failed (500)");
    }
}
