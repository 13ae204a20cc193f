use portal_config::ConfigError;
use portal_core::Role;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Negative outcomes of session and catalog operations.
///
/// None of these are fatal; the caller decides what to show the user.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Email already registered: {email} {location}")]
    EmailAlreadyRegistered {
        email: String,
        location: ErrorLocation,
    },

    #[error("Not authenticated {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("Role {role} may not submit innovations {location}")]
    NotContributor { role: Role, location: ErrorLocation },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl SessionError {
    /// Message suitable for showing to the person at the keyboard.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "Invalid email or password. Please try again.",
            Self::EmailAlreadyRegistered { .. } => {
                "Email already exists. Please try a different email."
            }
            Self::NotAuthenticated { .. } => "Please log in first.",
            Self::NotContributor { .. } => "Only contributors can submit innovations.",
            Self::Validation { .. } => "Please check the highlighted fields.",
            Self::Logger { .. } | Self::Config(_) => {
                "Something went wrong on this device. Please try again."
            }
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn email_already_registered(email: impl Into<String>) -> Self {
        Self::EmailAlreadyRegistered {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_authenticated() -> Self {
        Self::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_contributor(role: Role) -> Self {
        Self::NotContributor {
            role,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
