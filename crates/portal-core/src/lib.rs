pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::identity::Identity;
pub use models::innovation::Innovation;
pub use models::new_innovation::NewInnovation;
pub use models::role::Role;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
