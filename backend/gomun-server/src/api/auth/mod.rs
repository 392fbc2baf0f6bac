#[allow(clippy::module_inception)]
pub mod auth;
pub mod auth_request;
pub mod auth_response;
pub mod login_request;
