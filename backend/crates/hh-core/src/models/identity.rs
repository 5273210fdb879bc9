use crate::{IdentityPatch, Role, UserStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile record of the signed-in user, persisted as-is in local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: Role,
    pub status: UserStatus,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identity {
    /// Returns a copy with every field present in `patch` overwritten and
    /// `updated_at` set to `now`.
    pub fn merged(&self, patch: &IdentityPatch, now: DateTime<Utc>) -> Self {
        let mut updated = self.clone();

        if let Some(ref name) = patch.name {
            updated.name = name.clone();
        }
        if let Some(ref email) = patch.email {
            updated.email = email.clone();
        }
        if let Some(ref phone) = patch.phone {
            updated.phone = Some(phone.clone());
        }
        if let Some(ref avatar) = patch.avatar {
            updated.avatar = Some(avatar.clone());
        }
        if let Some(role) = patch.role {
            updated.role = role;
        }
        if let Some(status) = patch.status {
            updated.status = status;
        }

        updated.updated_at = now;
        updated
    }

    pub fn has_role(&self, allowed: &[Role]) -> bool {
        allowed.contains(&self.role)
    }
}
