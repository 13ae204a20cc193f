use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Contributor.as_str(), "contributor");
    assert_eq!(Role::Explorer.as_str(), "explorer");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("contributor").unwrap(), Role::Contributor);
    assert_eq!(Role::from_str("explorer").unwrap(), Role::Explorer);
    assert!(Role::from_str("admin").is_err());
}

#[test]
fn test_role_from_legacy_names() {
    assert_eq!(Role::from_str("scientist").unwrap(), Role::Contributor);
    assert_eq!(Role::from_str("user").unwrap(), Role::Explorer);
}

#[test]
fn test_role_from_str_is_case_sensitive() {
    match Role::from_str("Contributor") {
        Err(CoreError::InvalidRole { value, .. }) => assert_eq!(value, "Contributor"),
        other => panic!("Expected InvalidRole, got {other:?}"),
    }
}

#[test]
fn test_role_serde_uses_snake_case_and_accepts_aliases() {
    assert_eq!(
        serde_json::to_string(&Role::Contributor).unwrap(),
        "\"contributor\""
    );
    let role: Role = serde_json::from_str("\"scientist\"").unwrap();
    assert_eq!(role, Role::Contributor);
    let role: Role = serde_json::from_str("\"user\"").unwrap();
    assert_eq!(role, Role::Explorer);
}

#[test]
fn test_role_default() {
    assert_eq!(Role::default(), Role::Explorer);
}
