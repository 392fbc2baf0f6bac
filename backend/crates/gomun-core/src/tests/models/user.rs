use crate::{DEFAULT_USER_NAME, User, UserRole};

#[test]
fn test_user_new_keeps_given_name() {
    let user = User::new(
        UserRole::Expert,
        "a@b.kr".into(),
        "pw".into(),
        Some("홍길동".into()),
    );

    assert_eq!(user.name, "홍길동");
    assert_eq!(user.email, "a@b.kr");
}

#[test]
fn test_user_new_defaults_missing_name() {
    let user = User::new(UserRole::Company, "a@b.kr".into(), "pw".into(), None);
    assert_eq!(user.name, DEFAULT_USER_NAME);
}

#[test]
fn test_user_new_defaults_empty_name() {
    let user = User::new(UserRole::Company, "a@b.kr".into(), "pw".into(), Some(String::new()));
    assert_eq!(user.name, DEFAULT_USER_NAME);
}

#[test]
fn test_matches_credentials_requires_all_fields() {
    let user = User::new(UserRole::Expert, "a@b.kr".into(), "pw".into(), None);

    assert!(user.matches_credentials(UserRole::Expert, "a@b.kr", "pw"));
    assert!(!user.matches_credentials(UserRole::Company, "a@b.kr", "pw"));
    assert!(!user.matches_credentials(UserRole::Expert, "A@b.kr", "pw"));
    assert!(!user.matches_credentials(UserRole::Expert, "a@b.kr", "PW"));
}
