//! Login and registration handlers

use crate::{ApiResult, AppState, AuthRequest, AuthResponse, LoginRequest};

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use log::debug;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/login
///
/// Returns a token when role, email and password all match a known account.
/// An unrecognised role fails the same way as a wrong password.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(req) = payload?;
    debug!("-> login handler ({}, {})", req.email, req.role);

    let auth = state
        .auth
        .login(&req.role, &req.email, &req.password)
        .await?;

    Ok(Json(auth.into()))
}

/// POST /api/register
///
/// Creates an account; experts also get a placeholder profile
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<AuthRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(req) = payload?;
    debug!("-> register handler ({}, {})", req.email, req.role);

    let auth = state
        .auth
        .register(req.role, req.email, req.password, req.name)
        .await?;

    Ok(Json(auth.into()))
}
