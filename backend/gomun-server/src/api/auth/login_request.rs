use serde::Deserialize;

/// Body of `/api/login`
///
/// `role` stays a plain string: a value naming no known role is a failed
/// login, not a malformed request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub role: String,

    pub email: String,

    pub password: String,

    /// Accepted for symmetry with register and ignored
    #[serde(default)]
    pub name: Option<String>,
}
