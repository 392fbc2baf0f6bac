use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Which side of the marketplace an account belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Freelance expert; owns a profile
    Expert,
    /// Hiring company; has no profile
    Company,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expert => "expert",
            Self::Company => "company",
        }
    }

    /// Only experts get a profile record at registration
    pub fn has_profile(&self) -> bool {
        matches!(self, Self::Expert)
    }
}

impl FromStr for UserRole {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "expert" => Ok(Self::Expert),
            "company" => Ok(Self::Company),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
