use crate::{Identity, Innovation, NewInnovation, Role};

use chrono::Utc;
use googletest::prelude::*;

fn owner() -> Identity {
    Identity::new(
        "Dr. Sarah Johnson".into(),
        "sarah@example.com".into(),
        Role::Contributor,
    )
}

#[test]
fn given_new_innovation_when_created_then_captures_owner_and_today() {
    let owner = owner();
    let new = NewInnovation::new("Quantum Computing Algorithm", "Optimization")
        .with_field("Computer Science");

    let innovation = Innovation::new(new, &owner);

    assert_that!(innovation.owner_id, eq(owner.id));
    assert_that!(innovation.owner_name.as_str(), eq("Dr. Sarah Johnson"));
    assert_that!(innovation.field.as_deref(), some(eq("Computer Science")));
    assert_that!(innovation.created_at, eq(Utc::now().date_naive()));
}

#[test]
fn given_owner_renamed_later_when_reading_innovation_then_keeps_original_name() {
    let mut owner = owner();
    let innovation = Innovation::new(NewInnovation::new("Title", "Desc"), &owner);

    owner.name = "Prof. Sarah Johnson".into();

    assert_that!(innovation.owner_name.as_str(), eq("Dr. Sarah Johnson"));
}

#[test]
fn given_innovation_when_matching_then_checks_title_description_and_field() {
    let innovation = Innovation::new(
        NewInnovation::new("Biodegradable Plastic Alternative", "Made from algae")
            .with_field("Materials Science"),
        &owner(),
    );

    assert_that!(innovation.matches("plastic"), eq(true));
    assert_that!(innovation.matches("algae"), eq(true));
    assert_that!(innovation.matches("materials"), eq(true));
    assert_that!(innovation.matches("quantum"), eq(false));
}

#[test]
fn given_mixed_case_needle_when_matching_then_case_is_ignored() {
    let innovation = Innovation::new(
        NewInnovation::new("Biodegradable Plastic Alternative", "Made from algae")
            .with_field("Materials Science"),
        &owner(),
    );

    assert_that!(innovation.matches("PLASTIC"), eq(true));
    assert_that!(innovation.matches("Algae"), eq(true));
    assert_that!(innovation.matches("MaTeRiAlS"), eq(true));
    assert_that!(innovation.matches("QUANTUM"), eq(false));
}

#[test]
fn given_innovation_without_field_when_matching_then_field_is_ignored() {
    let innovation = Innovation::new(NewInnovation::new("Title", "Desc"), &owner());

    assert_that!(innovation.matches("science"), eq(false));
}
