use crate::{CoreError, Result as CoreErrorResult, Role, UserStatus, is_valid_email};

use serde::{Deserialize, Serialize};

/// Partial profile update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
}

impl IdentityPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Form-level checks applied before a profile edit is submitted.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if let Some(ref name) = self.name
            && name.trim().is_empty()
        {
            return Err(CoreError::validation("name cannot be blank"));
        }

        if let Some(ref email) = self.email
            && !is_valid_email(email)
        {
            return Err(CoreError::validation(format!(
                "'{email}' is not a valid email address"
            )));
        }

        Ok(())
    }
}
