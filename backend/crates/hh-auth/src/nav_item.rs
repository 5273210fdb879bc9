use serde::Serialize;

/// Sidebar entry of a role dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
}

impl NavItem {
    pub(crate) const fn new(name: &'static str, href: &'static str) -> Self {
        Self {
            name,
            href,
            badge: None,
        }
    }

    pub(crate) const fn with_badge(self, badge: &'static str) -> Self {
        Self {
            badge: Some(badge),
            ..self
        }
    }
}
