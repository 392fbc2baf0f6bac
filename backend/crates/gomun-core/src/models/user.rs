//! Account record held by the user store.

use crate::{DEFAULT_USER_NAME, UserRole};

use serde::{Deserialize, Serialize};

/// A registered account.
///
/// `email` is the unique key and is compared byte-for-byte (no case folding).
/// `password` is kept in plaintext; this backend is a demo and never hashes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub role: UserRole,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Create a user, falling back to the placeholder name when none (or an empty one) is given
    pub fn new(role: UserRole, email: String, password: String, name: Option<String>) -> Self {
        let name = name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| String::from(DEFAULT_USER_NAME));

        Self {
            role,
            name,
            email,
            password,
        }
    }

    /// Exact match on all three login fields
    pub fn matches_credentials(&self, role: UserRole, email: &str, password: &str) -> bool {
        self.role == role && self.email == email && self.password == password
    }
}
