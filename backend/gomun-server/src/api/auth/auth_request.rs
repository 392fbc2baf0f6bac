use gomun_core::UserRole;

use serde::Deserialize;

/// Body of `/api/register`
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    /// "expert" or "company"
    pub role: UserRole,

    pub email: String,

    pub password: String,

    /// Display name; empty or absent becomes the placeholder name
    #[serde(default)]
    pub name: Option<String>,
}
