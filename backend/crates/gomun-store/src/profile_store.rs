//! In-memory profile map keyed by owner email.

use crate::seed;

use gomun_core::{Profile, ProfilePatch};

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct ProfileStore {
    inner: Arc<RwLock<HashMap<String, Profile>>>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the demo profiles
    pub fn seeded() -> Self {
        Self::from_profiles(seed::profiles())
    }

    pub fn from_profiles(profiles: HashMap<String, Profile>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(profiles)),
        }
    }

    pub async fn get(&self, email: &str) -> Option<Profile> {
        self.inner.read().await.get(email).cloned()
    }

    /// Insert or replace the profile for `email`
    pub async fn insert(&self, email: String, profile: Profile) {
        debug!("Storing profile for {}", email);
        self.inner.write().await.insert(email, profile);
    }

    /// Merge `patch` into the stored profile and return the result.
    /// Returns `None` if no profile exists for `email`.
    pub async fn update(&self, email: &str, patch: ProfilePatch) -> Option<Profile> {
        let mut profiles = self.inner.write().await;
        let profile = profiles.get_mut(email)?;
        profile.apply(patch);
        Some(profile.clone())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
