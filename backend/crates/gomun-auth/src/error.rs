use gomun_store::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials for {email} {location}")]
    InvalidCredentials {
        email: String,
        location: ErrorLocation,
    },

    #[error("Email already registered: {email} {location}")]
    EmailTaken {
        email: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn invalid_credentials(email: impl Into<String>) -> Self {
        Self::InvalidCredentials {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::EmailTaken { email, location } => Self::EmailTaken { email, location },
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
