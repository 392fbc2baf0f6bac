pub mod profile_dto;
#[allow(clippy::module_inception)]
pub mod profiles;
pub mod update_profile_request;
