use crate::{Identity, Role};

use googletest::prelude::*;

#[test]
fn given_new_identity_when_created_then_fields_are_set() {
    let identity = Identity::new("Ada".into(), "ada@example.com".into(), Role::Contributor);

    assert_that!(identity.name.as_str(), eq("Ada"));
    assert_that!(identity.email.as_str(), eq("ada@example.com"));
    assert_that!(identity.is_contributor(), eq(true));
}

#[test]
fn given_two_identities_when_created_then_ids_differ() {
    let a = Identity::new("A".into(), "a@example.com".into(), Role::Explorer);
    let b = Identity::new("B".into(), "b@example.com".into(), Role::Explorer);

    assert_that!(a.id, not(eq(b.id)));
    assert_that!(a.is_contributor(), eq(false));
}

#[test]
fn given_identity_when_serialized_then_contains_no_secret_field() {
    let identity = Identity::new("Ada".into(), "ada@example.com".into(), Role::Explorer);

    let json = serde_json::to_string(&identity).unwrap();

    assert_that!(json.as_str(), contains_substring("\"role\":\"explorer\""));
    assert_that!(json.as_str(), not(contains_substring("secret")));
    assert_that!(json.as_str(), not(contains_substring("password")));
}
