use gomun_auth::{AuthService, MockTokenIssuer, TokenIssuer};
use gomun_config::Config;
use gomun_store::{ProfileStore, UserStore};

use std::sync::Arc;

use log::info;

/// Shared state handed to every HTTP handler
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub users: UserStore,
    pub profiles: ProfileStore,
}

impl AppState {
    /// Wire stores and the token issuer together
    pub fn new(users: UserStore, profiles: ProfileStore, issuer: Arc<dyn TokenIssuer>) -> Self {
        let auth = AuthService::new(users.clone(), profiles.clone(), issuer);
        Self {
            auth,
            users,
            profiles,
        }
    }

    /// Build state as configured: seeded or empty stores, mock token issuer
    pub fn from_config(config: &Config) -> Self {
        let (users, profiles) = if config.store.seed {
            info!("Loading demo users and profiles");
            (UserStore::seeded(), ProfileStore::seeded())
        } else {
            info!("Starting with empty stores");
            (UserStore::new(), ProfileStore::new())
        };

        let issuer = Arc::new(MockTokenIssuer::new(config.auth.token_prefix.clone()));
        let state = Self::new(users, profiles, issuer);
        info!("Token issuer: {}", state.auth.issuer_name());

        state
    }
}
