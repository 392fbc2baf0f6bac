use crate::UserRole;

use std::str::FromStr;

#[test]
fn test_user_role_as_str() {
    assert_eq!(UserRole::Expert.as_str(), "expert");
    assert_eq!(UserRole::Company.as_str(), "company");
}

#[test]
fn test_user_role_from_str() {
    assert_eq!(UserRole::from_str("expert").unwrap(), UserRole::Expert);
    assert_eq!(UserRole::from_str("company").unwrap(), UserRole::Company);
    assert!(UserRole::from_str("admin").is_err());
    // Roles are case-sensitive
    assert!(UserRole::from_str("Expert").is_err());
}

#[test]
fn test_user_role_serde_uses_lowercase() {
    let json = serde_json::to_string(&UserRole::Company).unwrap();
    assert_eq!(json, "\"company\"");

    let role: UserRole = serde_json::from_str("\"expert\"").unwrap();
    assert_eq!(role, UserRole::Expert);

    assert!(serde_json::from_str::<UserRole>("\"admin\"").is_err());
}

#[test]
fn test_only_expert_has_profile() {
    assert!(UserRole::Expert.has_profile());
    assert!(!UserRole::Company.has_profile());
}
