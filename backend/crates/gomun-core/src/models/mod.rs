pub mod profile;
pub mod profile_patch;
pub mod user;
pub mod user_role;
