use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Portal role, deciding the landing dashboard and which gated views open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Volunteer,
    Donor,
    Beneficiary,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Admin,
        Role::Volunteer,
        Role::Donor,
        Role::Beneficiary,
    ];

    /// Convert to storage string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Volunteer => "volunteer",
            Self::Donor => "donor",
            Self::Beneficiary => "beneficiary",
        }
    }

    /// Capitalized label used in panel headers and the demo account list.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Volunteer => "Volunteer",
            Self::Donor => "Donor",
            Self::Beneficiary => "Beneficiary",
        }
    }

    /// Dashboard a signed-in user of this role lands on.
    pub fn landing_path(&self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Volunteer => "/volunteer",
            Self::Donor => "/donor",
            Self::Beneficiary => "/beneficiary",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "admin" => Ok(Self::Admin),
            "volunteer" => Ok(Self::Volunteer),
            "donor" => Ok(Self::Donor),
            "beneficiary" => Ok(Self::Beneficiary),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
