use gomun_core::User;

/// Produces the token handed back on login and registration.
///
/// Handlers only depend on this trait, so a real credential issuer can replace
/// [`crate::MockTokenIssuer`] without touching the HTTP contract.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &User) -> String;

    /// Short name for startup logging
    fn name(&self) -> &'static str;
}
