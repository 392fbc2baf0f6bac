//! REST API error types
//!
//! Every failure maps to one status code and a fixed JSON body:
//! `{"detail": "...", "code": "..."}`.

use gomun_auth::AuthError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "계정 정보를 확인해 주세요.";
pub const EMAIL_TAKEN_MESSAGE: &str = "이미 등록된 이메일입니다.";
pub const PROFILE_NOT_FOUND_MESSAGE: &str = "프로필을 찾을 수 없습니다.";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    /// Human-readable error message
    pub detail: String,
    /// Machine-readable error code (e.g., "NOT_FOUND", "CONFLICT")
    pub code: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login credentials did not match any account (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Email already registered (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Request body could not be parsed into the expected shape (422)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn profile_not_found() -> Self {
        ApiError::NotFound {
            message: PROFILE_NOT_FOUND_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized { .. } => "UNAUTHORIZED",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Conflict { .. } => "CONFLICT",
            ApiError::Validation { .. } => "VALIDATION_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log the error with location for debugging
        log::warn!("{}", self);

        let code = self.code().to_string();
        let detail = match self {
            ApiError::Unauthorized { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Conflict { message, .. }
            | ApiError::Validation { message, .. } => message,
        };

        (status, Json(ApiErrorResponse { detail, code })).into_response()
    }
}

/// Convert auth failures to their fixed client-facing messages
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidCredentials { .. } => ApiError::Unauthorized {
                message: INVALID_CREDENTIALS_MESSAGE.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::EmailTaken { .. } => ApiError::Conflict {
                message: EMAIL_TAKEN_MESSAGE.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert body extraction failures (bad JSON, missing field, unknown role on register)
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
