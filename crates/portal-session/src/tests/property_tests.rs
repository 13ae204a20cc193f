use crate::{InnovationCatalog, UserDirectory};

use portal_core::{Identity, NewInnovation, Role};

use proptest::prelude::*;

fn owner() -> Identity {
    Identity::new("Owner".into(), "owner@example.com".into(), Role::Contributor)
}

// =========================================================================
// Property-Based Tests - Directory
// =========================================================================

proptest! {
    #[test]
    fn given_added_email_when_checked_then_exists_forever(
        emails in prop::collection::hash_set("[a-z]{1,8}@[a-z]{1,6}\\.com", 1..20)
    ) {
        let mut directory = UserDirectory::new();
        let mut added = Vec::new();

        for email in &emails {
            prop_assert!(directory.add("Name", email, "secret", Role::Explorer).is_ok());
            added.push(email.clone());
            for earlier in &added {
                prop_assert!(directory.exists(earlier));
            }
        }

        prop_assert_eq!(directory.len(), emails.len());
    }

    #[test]
    fn given_duplicate_email_when_added_then_rejected_and_count_unchanged(
        email in "[a-z]{1,8}@[a-z]{1,6}\\.com"
    ) {
        let mut directory = UserDirectory::new();
        prop_assert!(directory.add("First", &email, "a", Role::Contributor).is_ok());

        prop_assert!(directory.add("Second", &email, "b", Role::Explorer).is_err());
        prop_assert_eq!(directory.len(), 1);
    }

    #[test]
    fn given_registered_pair_when_looked_up_then_only_exact_pair_matches(
        email in "[a-z]{1,8}@[a-z]{1,6}\\.com",
        secret in "[a-zA-Z0-9]{1,12}",
        other_secret in "[a-zA-Z0-9]{1,12}",
    ) {
        let mut directory = UserDirectory::new();
        directory.add("Name", &email, &secret, Role::Explorer).unwrap();

        prop_assert!(directory.find_by_email_and_secret(&email, &secret).is_some());
        if other_secret != secret {
            prop_assert!(directory.find_by_email_and_secret(&email, &other_secret).is_none());
        }
        prop_assert!(directory.find_by_email_and_secret(&email.to_uppercase(), &secret).is_none());
    }
}

// =========================================================================
// Property-Based Tests - Catalog
// =========================================================================

proptest! {
    #[test]
    fn given_submission_when_listed_then_first_and_size_grows_by_one(
        title in "[A-Za-z ]{1,30}",
        description in "[A-Za-z ]{1,60}",
        existing in 0usize..5,
    ) {
        let mut catalog = InnovationCatalog::new();
        let owner = owner();
        for i in 0..existing {
            catalog.submit(NewInnovation::new(format!("Old {i}"), "old"), &owner);
        }

        let innovation = catalog.submit(NewInnovation::new(title, description), &owner);

        prop_assert_eq!(catalog.len(), existing + 1);
        prop_assert_eq!(catalog.list_all()[0].id, innovation.id);
    }

    #[test]
    fn given_title_substring_when_searched_in_any_case_then_found(
        title in "[A-Za-z]{3,20}",
        start in 0usize..3,
    ) {
        let mut catalog = InnovationCatalog::new();
        let innovation = catalog.submit(NewInnovation::new(title.clone(), "d"), &owner());
        let needle = &title[start..];

        let lower = catalog.search(&needle.to_lowercase());
        let upper = catalog.search(&needle.to_uppercase());

        prop_assert!(lower.iter().any(|found| found.id == innovation.id));
        prop_assert!(upper.iter().any(|found| found.id == innovation.id));
    }

    #[test]
    fn given_whitespace_keyword_when_searched_then_matches_nothing(keyword in r"\s{0,10}") {
        let catalog = InnovationCatalog::with_demo_innovations();

        prop_assert!(catalog.search(&keyword).is_empty());
    }
}
