//! User session context attached to every cart request.
//!
//! The session is an explicit value threaded through the store and the
//! service - never ambient global state. It is created at session start
//! and torn down on logout.

use secrecy::{ExposeSecret, SecretString};

/// Authentication context for cart requests.
///
/// The token is opaque to the cart core. When absent, requests go out
/// unauthenticated and the server decides whether to reject them.
#[derive(Clone)]
pub struct UserSession {
    token: Option<SecretString>,
}

impl UserSession {
    /// A session with no credentials.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { token: None }
    }

    /// A session carrying a bearer token supplied by the auth layer.
    #[must_use]
    pub const fn authenticated(token: SecretString) -> Self {
        Self { token: Some(token) }
    }

    /// Whether this session carries credentials.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Bearer token value to attach to a request, if present.
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Drop credentials on logout.
    pub fn logout(&mut self) {
        self.token = None;
    }
}

impl std::fmt::Debug for UserSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserSession")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
