//! Error types for cart operations.
//!
//! Every collaborator failure is caught at the orchestration boundary and
//! converted to a user-visible message; none of these propagate past the
//! service uncaught, and none of them mutate committed local state.

use thiserror::Error;

/// Errors from cart synchronization and checkout operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// Transport-level failure (connectivity, timeouts, protocol errors).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status. `message` carries the
    /// server-supplied message field when the body had one.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// A success response whose body does not match the expected snapshot
    /// shape. Treated like a load failure: prior state is kept.
    #[error("Malformed snapshot: {0}")]
    MalformedSnapshot(String),
}

impl CartError {
    /// Server-supplied message suitable for user display, if the failure
    /// carried one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_present() {
        let err = CartError::Api {
            status: 400,
            message: "Inventory unavailable".to_string(),
        };
        assert_eq!(err.server_message(), Some("Inventory unavailable"));
    }

    #[test]
    fn test_server_message_absent_for_empty_body() {
        let err = CartError::Api {
            status: 500,
            message: String::new(),
        };
        assert!(err.server_message().is_none());
    }

    #[test]
    fn test_server_message_absent_for_malformed() {
        let err = CartError::MalformedSnapshot("missing field `total`".to_string());
        assert!(err.server_message().is_none());
    }

    #[test]
    fn test_display() {
        let err = CartError::Api {
            status: 400,
            message: "Shopping cart is empty.".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 400 - Shopping cart is empty.");
    }
}
