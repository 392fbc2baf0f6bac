pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::profile::Profile;
pub use models::profile_patch::ProfilePatch;
pub use models::user::User;
pub use models::user_role::UserRole;

#[cfg(test)]
mod tests;

/// Name assigned to a user who registers without one
pub const DEFAULT_USER_NAME: &str = "사용자";

/// Prefix of the placeholder login token when none is configured
pub const DEFAULT_TOKEN_PREFIX: &str = "mock-";

const DEFAULT_PROFILE_TITLE: &str = "전문가";
const DEFAULT_PROFILE_REGION: &str = "서울";
const DEFAULT_PROFILE_AVAILABILITY: &str = "즉시 투입";
const DEFAULT_PROFILE_RESPONSE_TIME: &str = "평균 4시간";
