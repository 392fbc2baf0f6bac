use gomun_core::{User, UserRole};

/// Result of a successful login or registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub token: String,
    pub role: UserRole,
    pub name: String,
    pub email: String,
}

impl AuthenticatedUser {
    pub fn new(token: String, user: User) -> Self {
        Self {
            token,
            role: user.role,
            name: user.name,
            email: user.email,
        }
    }
}
