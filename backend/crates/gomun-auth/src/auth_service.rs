//! Login and registration against the in-memory stores.
//!
//! Login role semantics: the supplied role is only an equality filter on the
//! stored record. There is no further role check; acceptable for the demo only.
//! A role string that names no known role can match no record, so it fails
//! like any other credential mismatch.

use crate::{AuthError, AuthenticatedUser, Result as AuthErrorResult, TokenIssuer};

use gomun_core::{Profile, User, UserRole};
use gomun_store::{ProfileStore, UserStore};

use std::str::FromStr;
use std::sync::Arc;

use log::{debug, info, warn};

#[derive(Clone)]
pub struct AuthService {
    users: UserStore,
    profiles: ProfileStore,
    issuer: Arc<dyn TokenIssuer>,
}

impl AuthService {
    pub fn new(users: UserStore, profiles: ProfileStore, issuer: Arc<dyn TokenIssuer>) -> Self {
        Self {
            users,
            profiles,
            issuer,
        }
    }

    pub fn issuer_name(&self) -> &'static str {
        self.issuer.name()
    }

    /// Authenticate by exact role, email and password match. First match wins.
    pub async fn login(
        &self,
        role: &str,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<AuthenticatedUser> {
        let role = match UserRole::from_str(role) {
            Ok(role) => role,
            Err(e) => {
                warn!("Login failed for {}: {}", email, e);
                return Err(AuthError::invalid_credentials(email));
            }
        };

        let Some(user) = self.users.find_by_credentials(role, email, password).await else {
            warn!("Login failed for {} ({})", email, role);
            return Err(AuthError::invalid_credentials(email));
        };

        let token = self.issuer.issue(&user);
        info!("Login succeeded for {} ({})", user.email, user.role);
        Ok(AuthenticatedUser::new(token, user))
    }

    /// Create an account. Any existing record with the same email blocks
    /// registration regardless of role. Experts also get a placeholder profile.
    pub async fn register(
        &self,
        role: UserRole,
        email: String,
        password: String,
        name: Option<String>,
    ) -> AuthErrorResult<AuthenticatedUser> {
        let user = self
            .users
            .insert(User::new(role, email, password, name))
            .await
            .inspect_err(|e| warn!("Registration rejected: {}", e))?;

        if user.role.has_profile() {
            debug!("Creating placeholder profile for {}", user.email);
            self.profiles
                .insert(user.email.clone(), Profile::placeholder(&user.name))
                .await;
        }

        let token = self.issuer.issue(&user);
        info!("Registered {} ({})", user.email, user.role);
        Ok(AuthenticatedUser::new(token, user))
    }
}
