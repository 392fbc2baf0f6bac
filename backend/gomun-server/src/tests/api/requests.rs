use crate::{AuthRequest, LoginRequest, ProfileDto, UpdateProfileRequest};

use gomun_core::{Profile, ProfilePatch, UserRole};

#[test]
fn test_auth_request_name_is_optional() {
    let req: AuthRequest =
        serde_json::from_str(r#"{"role":"company","email":"a@b.kr","password":"p"}"#).unwrap();

    assert_eq!(req.role, UserRole::Company);
    assert_eq!(req.name, None);
}

#[test]
fn test_auth_request_rejects_unknown_role() {
    let result = serde_json::from_str::<AuthRequest>(
        r#"{"role":"admin","email":"a@b.kr","password":"p"}"#,
    );

    assert!(result.is_err());
}

#[test]
fn test_login_request_keeps_any_role_string() {
    let req: LoginRequest = serde_json::from_str(
        r#"{"role":"admin","email":"a@b.kr","password":"p","name":"무시"}"#,
    )
    .unwrap();

    assert_eq!(req.role, "admin");
    assert_eq!(req.email, "a@b.kr");
    assert_eq!(req.name.as_deref(), Some("무시"));
}

#[test]
fn test_login_request_requires_role_field() {
    let result =
        serde_json::from_str::<LoginRequest>(r#"{"email":"a@b.kr","password":"p"}"#);

    assert!(result.is_err());
}

#[test]
fn test_update_request_converts_to_patch() {
    let req: UpdateProfileRequest =
        serde_json::from_str(r#"{"responseTime":"1시간","bio":null}"#).unwrap();

    let patch = ProfilePatch::from(req);

    assert_eq!(patch.response_time.as_deref(), Some("1시간"));
    assert_eq!(patch.bio, None);
    assert_eq!(patch.title, None);
}

#[test]
fn test_profile_dto_serializes_camel_case_with_nulls() {
    let dto = ProfileDto::from(Profile {
        response_time: Some("평균 4시간".into()),
        ..Profile::default()
    });

    let json = serde_json::to_value(dto).unwrap();

    assert_eq!(json["responseTime"], "평균 4시간");
    assert!(json["title"].is_null());
    assert_eq!(json.as_object().unwrap().len(), 9);
}
