//! Profile REST API handlers

use crate::{ApiError, ApiResult, AppState, ProfileDto, UpdateProfileRequest};

use gomun_core::ProfilePatch;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use log::{debug, info};

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/profile/{email}
pub async fn get_profile(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<ProfileDto>> {
    debug!("-> get_profile handler ({})", email);

    let profile = state
        .profiles
        .get(&email)
        .await
        .ok_or_else(ApiError::profile_not_found)?;

    Ok(Json(profile.into()))
}

/// PATCH /api/profile/{email}
///
/// Shallow merge of the provided fields into the stored profile
pub async fn update_profile(
    State(state): State<AppState>,
    Path(email): Path<String>,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> ApiResult<Json<ProfileDto>> {
    let Json(req) = payload?;
    debug!("-> update_profile handler ({})", email);

    let patch = ProfilePatch::from(req);
    if patch.is_empty() {
        debug!("Empty patch for {}, returning stored profile", email);
    }

    let profile = state
        .profiles
        .update(&email, patch)
        .await
        .ok_or_else(ApiError::profile_not_found)?;

    info!("Updated profile for {}", email);
    Ok(Json(profile.into()))
}
