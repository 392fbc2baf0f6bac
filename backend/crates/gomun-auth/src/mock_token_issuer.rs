use crate::TokenIssuer;

use gomun_core::{DEFAULT_TOKEN_PREFIX, User};

/// Deterministic placeholder token: a fixed prefix followed by the email.
///
/// Not secret, not unique per session, never expires, and accepted nowhere.
#[derive(Debug, Clone)]
pub struct MockTokenIssuer {
    prefix: String,
}

impl MockTokenIssuer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for MockTokenIssuer {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_PREFIX)
    }
}

impl TokenIssuer for MockTokenIssuer {
    fn issue(&self, user: &User) -> String {
        format!("{}{}", self.prefix, user.email)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
