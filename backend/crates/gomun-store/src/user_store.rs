//! In-memory account list.
//!
//! Records are kept in insertion order and never removed. Lookups are linear
//! scans; the first matching record wins.

use crate::{Result as StoreErrorResult, StoreError, seed};

use gomun_core::{User, UserRole};

use std::sync::Arc;

use log::debug;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct UserStore {
    inner: Arc<RwLock<Vec<User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the demo accounts
    pub fn seeded() -> Self {
        Self::from_users(seed::users())
    }

    /// Build a store from existing records without checking email uniqueness
    pub fn from_users(users: Vec<User>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(users)),
        }
    }

    /// First user whose role, email and password all match exactly
    pub async fn find_by_credentials(
        &self,
        role: UserRole,
        email: &str,
        password: &str,
    ) -> Option<User> {
        let users = self.inner.read().await;
        users
            .iter()
            .find(|u| u.matches_credentials(role, email, password))
            .cloned()
    }

    /// Append a user. Fails if any existing record has the same email, whatever its role.
    pub async fn insert(&self, user: User) -> StoreErrorResult<User> {
        let mut users = self.inner.write().await;

        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::email_taken(user.email));
        }

        debug!("Appending user {} ({})", user.email, user.role);
        users.push(user.clone());
        Ok(user)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
