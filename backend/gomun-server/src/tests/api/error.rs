use crate::ApiError;
use crate::api::error::{EMAIL_TAKEN_MESSAGE, INVALID_CREDENTIALS_MESSAGE, PROFILE_NOT_FOUND_MESSAGE};

use gomun_auth::AuthError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_profile_not_found_returns_404_with_fixed_detail() {
    let (status, json) = body_json(ApiError::profile_not_found()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["detail"], PROFILE_NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn test_invalid_credentials_converts_to_401() {
    let error = ApiError::from(AuthError::invalid_credentials("a@b.kr"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["detail"], INVALID_CREDENTIALS_MESSAGE);
}

#[tokio::test]
async fn test_email_taken_converts_to_409() {
    let error = ApiError::from(AuthError::EmailTaken {
        email: "a@b.kr".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["detail"], EMAIL_TAKEN_MESSAGE);
}

#[tokio::test]
async fn test_validation_error_returns_422() {
    let error = ApiError::Validation {
        message: "missing field `email`".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["detail"], "missing field `email`");
}

#[test]
fn test_error_display_includes_message() {
    let error = ApiError::Conflict {
        message: EMAIL_TAKEN_MESSAGE.into(),
        location: ErrorLocation::from(Location::caller()),
    };

    assert!(error.to_string().contains(EMAIL_TAKEN_MESSAGE));
}
