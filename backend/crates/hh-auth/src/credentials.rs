use hh_core::{Identity, Role, UserStatus};

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

/// One entry of the demo credential table.
#[derive(Debug, Clone)]
pub struct DemoAccount {
    pub identity: Identity,
    pub secret: String,
    pub description: &'static str,
}

/// Public view of a demo account, safe to print.
#[derive(Debug, Clone, Serialize)]
pub struct DemoAccountSummary {
    pub email: String,
    pub role: Role,
    pub label: &'static str,
    pub description: &'static str,
}

/// Fixed email -> secret table standing in for an identity provider.
#[derive(Debug, Clone)]
pub struct CredentialTable {
    accounts: Vec<DemoAccount>,
}

impl CredentialTable {
    pub fn new(accounts: Vec<DemoAccount>) -> Self {
        Self { accounts }
    }

    /// The four portal demo accounts, one per role.
    pub fn builtin() -> Self {
        Self::new(vec![
            demo(
                "1",
                "Admin User",
                "admin@helpinghands.org",
                "admin123",
                Role::Admin,
                "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face",
                Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0),
                "Full system access with all management features",
            ),
            demo(
                "2",
                "John Volunteer",
                "volunteer@helpinghands.org",
                "volunteer123",
                Role::Volunteer,
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face",
                Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0),
                "Event registration and hour tracking",
            ),
            demo(
                "3",
                "Sarah Donor",
                "donor@helpinghands.org",
                "donor123",
                Role::Donor,
                "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=100&h=100&fit=crop&crop=face",
                Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0),
                "Donation management and impact tracking",
            ),
            demo(
                "4",
                "Ahmed Beneficiary",
                "beneficiary@helpinghands.org",
                "beneficiary123",
                Role::Beneficiary,
                "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face",
                Utc.with_ymd_and_hms(2024, 2, 15, 0, 0, 0),
                "Aid requests and distribution tracking",
            ),
        ])
    }

    /// Exact, case-sensitive match on both email and secret.
    pub fn verify(&self, email: &str, secret: &str) -> Option<&Identity> {
        self.accounts
            .iter()
            .find(|account| account.identity.email == email)
            .filter(|account| account.secret == secret)
            .map(|account| &account.identity)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Identity> {
        self.accounts
            .iter()
            .map(|account| &account.identity)
            .find(|identity| identity.email == email)
    }

    pub fn accounts(&self) -> &[DemoAccount] {
        &self.accounts
    }

    pub fn summaries(&self) -> Vec<DemoAccountSummary> {
        self.accounts
            .iter()
            .map(|account| DemoAccountSummary {
                email: account.identity.email.clone(),
                role: account.identity.role,
                label: account.identity.role.label(),
                description: account.description,
            })
            .collect()
    }
}

impl Default for CredentialTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn demo(
    id: &str,
    name: &str,
    email: &str,
    secret: &str,
    role: Role,
    avatar: &str,
    created: chrono::LocalResult<DateTime<Utc>>,
    description: &'static str,
) -> DemoAccount {
    // Every builtin date is a valid UTC instant
    let created_at = created.single().unwrap_or_default();

    DemoAccount {
        identity: Identity {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            avatar: Some(avatar.to_string()),
            role,
            status: UserStatus::Active,
            created_at,
            updated_at: created_at,
        },
        secret: secret.to_string(),
        description,
    }
}
