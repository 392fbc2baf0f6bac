use gomun_auth::AuthenticatedUser;
use gomun_core::UserRole;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub role: UserRole,
    pub name: String,
    pub email: String,
}

impl From<AuthenticatedUser> for AuthResponse {
    fn from(a: AuthenticatedUser) -> Self {
        Self {
            token: a.token,
            role: a.role,
            name: a.name,
            email: a.email,
        }
    }
}
