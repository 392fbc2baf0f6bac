pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, register},
        auth_request::AuthRequest,
        auth_response::AuthResponse,
        login_request::LoginRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    profiles::{
        profile_dto::ProfileDto,
        profiles::{get_profile, update_profile},
        update_profile_request::UpdateProfileRequest,
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
