//! Demo accounts and records the portal ships with.

use portal_core::{Identity, Innovation, Role};

use chrono::NaiveDate;
use uuid::Uuid;

pub const DEMO_SECRET: &str = "password";

pub const DEMO_CONTRIBUTOR_ID: Uuid = Uuid::from_u128(0x0000_0001);
pub const DEMO_CONTRIBUTOR_NAME: &str = "Dr. Sarah Johnson";
pub const DEMO_CONTRIBUTOR_EMAIL: &str = "sarah@example.com";

pub const DEMO_EXPLORER_ID: Uuid = Uuid::from_u128(0x0000_0002);
pub const DEMO_EXPLORER_NAME: &str = "John Explorer";
pub const DEMO_EXPLORER_EMAIL: &str = "john@example.com";

const QUANTUM_ID: Uuid = Uuid::from_u128(0x1000_0001);
const PLASTIC_ID: Uuid = Uuid::from_u128(0x1000_0002);

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid demo date"),
    }
}

const QUANTUM_DATE: NaiveDate = date(2024, 1, 15);
const PLASTIC_DATE: NaiveDate = date(2024, 1, 10);

pub fn contributor() -> Identity {
    Identity {
        id: DEMO_CONTRIBUTOR_ID,
        name: DEMO_CONTRIBUTOR_NAME.to_string(),
        email: DEMO_CONTRIBUTOR_EMAIL.to_string(),
        role: Role::Contributor,
    }
}

pub fn explorer() -> Identity {
    Identity {
        id: DEMO_EXPLORER_ID,
        name: DEMO_EXPLORER_NAME.to_string(),
        email: DEMO_EXPLORER_EMAIL.to_string(),
        role: Role::Explorer,
    }
}

/// Demo records, newest first.
pub fn innovations() -> Vec<Innovation> {
    vec![
        Innovation {
            id: QUANTUM_ID,
            title: "Quantum Computing Algorithm".to_string(),
            description: "Revolutionary quantum algorithm for optimization problems".to_string(),
            field: Some("Computer Science".to_string()),
            owner_id: DEMO_CONTRIBUTOR_ID,
            owner_name: DEMO_CONTRIBUTOR_NAME.to_string(),
            created_at: QUANTUM_DATE,
        },
        Innovation {
            id: PLASTIC_ID,
            title: "Biodegradable Plastic Alternative".to_string(),
            description: "New material from algae that decomposes in 30 days".to_string(),
            field: Some("Materials Science".to_string()),
            owner_id: DEMO_CONTRIBUTOR_ID,
            owner_name: DEMO_CONTRIBUTOR_NAME.to_string(),
            created_at: PLASTIC_DATE,
        },
    ]
}
