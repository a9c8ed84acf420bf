//! The authenticated session a request acts on behalf of.

use std::fmt;

/// Session credentials attached to an inbound request.
///
/// The token is opaque to this crate; it is handed to the admin client
/// factory, which knows how to present it to the cluster.
#[derive(Clone, PartialEq, Eq)]
pub struct Principal {
    session_token: String,
}

impl Principal {
    /// Creates a principal from a session token.
    pub fn new(session_token: impl Into<String>) -> Self {
        Self {
            session_token: session_token.into(),
        }
    }

    /// The raw session token.
    pub fn session_token(&self) -> &str {
        &self.session_token
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Principal")
            .field("session_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let principal = Principal::new("secret-session");
        let rendered = format!("{principal:?}");
        assert!(!rendered.contains("secret-session"));
        assert_eq!(principal.session_token(), "secret-session");
    }
}
