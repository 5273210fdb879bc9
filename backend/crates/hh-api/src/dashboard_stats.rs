use serde::{Deserialize, Serialize};

/// Headline numbers on the public home page and admin dashboard.
///
/// The admin-only figures are absent from the `/stats` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_families_helped: u64,
    pub active_volunteers: u64,
    pub total_donations: u64,
    pub upcoming_events: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_users: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub this_month_donations: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_aid_distributed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_donation: Option<u64>,
}

impl DashboardStats {
    /// Figures the simulated `/stats` endpoint reports.
    pub fn headline() -> Self {
        Self {
            total_families_helped: 1247,
            active_volunteers: 156,
            total_donations: 2_456_789,
            upcoming_events: 8,
            ..Default::default()
        }
    }
}
