//! Path decisions made from session state: landing pages, login redirects
//! and per-role navigation.

use crate::{AuthorizationGate, GateState, NavItem, SessionSnapshot};

use hh_core::Role;

use serde::Serialize;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const REDIRECT_PARAM: &str = "redirect";

const ADMIN_NAV: &[NavItem] = &[
    NavItem::new("Dashboard", "/admin"),
    NavItem::new("Volunteers", "/admin/volunteers"),
    NavItem::new("Donors", "/admin/donors"),
    NavItem::new("Beneficiaries", "/admin/beneficiaries"),
    NavItem::new("Events", "/admin/events"),
    NavItem::new("Donations", "/admin/donations"),
    NavItem::new("Aid Distribution", "/admin/aid"),
    NavItem::new("Blog Posts", "/admin/posts"),
    NavItem::new("Messages", "/admin/messages").with_badge("3"),
    NavItem::new("Settings", "/admin/settings"),
];

const VOLUNTEER_NAV: &[NavItem] = &[
    NavItem::new("Dashboard", "/volunteer"),
    NavItem::new("Events", "/volunteer/events"),
    NavItem::new("My Hours", "/volunteer/hours"),
    NavItem::new("Achievements", "/volunteer/achievements"),
    NavItem::new("Profile", "/volunteer/profile"),
];

const DONOR_NAV: &[NavItem] = &[
    NavItem::new("Dashboard", "/donor"),
    NavItem::new("Make Donation", "/donor/donate"),
    NavItem::new("Donation History", "/donor/history"),
    NavItem::new("Tax Receipts", "/donor/receipts"),
    NavItem::new("Settings", "/donor/settings"),
];

const BENEFICIARY_NAV: &[NavItem] = &[
    NavItem::new("Dashboard", "/beneficiary"),
    NavItem::new("Request Aid", "/beneficiary/request"),
    NavItem::new("Aid History", "/beneficiary/aid"),
    NavItem::new("Profile", "/beneficiary/profile"),
    NavItem::new("Help & Support", "/beneficiary/support"),
];

/// Outcome of navigating to a protected path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "target", rename_all = "snake_case")]
pub enum RouteDecision {
    /// Session not settled yet; show a spinner
    Wait,
    /// Send the browser elsewhere
    Redirect(String),
    /// Signed in but the role is not allowed here
    Forbidden,
    Render,
}

/// `/login?redirect=<path>` with the return path percent-encoded.
pub fn login_redirect(return_path: &str) -> String {
    format!(
        "{LOGIN_PATH}?{REDIRECT_PARAM}={}",
        urlencoding::encode(return_path)
    )
}

/// Extract and decode the `redirect` parameter from a raw query string.
pub fn redirect_from_query(query: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == REDIRECT_PARAM)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
}

/// Where to go after a successful login: the requested local path, else the
/// dashboard dispatcher.
pub fn post_login_target(redirect: Option<&str>) -> String {
    match redirect {
        Some(path) if is_local_path(path) => path.to_string(),
        _ => DASHBOARD_PATH.to_string(),
    }
}

/// `/dashboard` dispatch: role landing page when signed in, login otherwise.
/// `None` while the session is still loading.
pub fn dashboard_redirect(snapshot: &SessionSnapshot) -> Option<String> {
    if snapshot.loading {
        return None;
    }

    Some(match snapshot.identity {
        Some(ref identity) => identity.role.landing_path().to_string(),
        None => login_redirect(DASHBOARD_PATH),
    })
}

/// Gate a navigation to `path`, redirecting signed-out visitors to login.
pub fn protect(gate: &AuthorizationGate, snapshot: &SessionSnapshot, path: &str) -> RouteDecision {
    match gate.evaluate(snapshot) {
        GateState::Loading => RouteDecision::Wait,
        GateState::Denied => RouteDecision::Redirect(login_redirect(path)),
        GateState::Unauthorized => RouteDecision::Forbidden,
        GateState::Authorized => RouteDecision::Render,
    }
}

pub fn navigation_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::Admin => ADMIN_NAV,
        Role::Volunteer => VOLUNTEER_NAV,
        Role::Donor => DONOR_NAV,
        Role::Beneficiary => BENEFICIARY_NAV,
    }
}

/// Landing paths highlight only on an exact match; other entries also
/// highlight for their sub-pages.
pub fn is_active_route(href: &str, pathname: &str) -> bool {
    if Role::ALL.iter().any(|role| role.landing_path() == href) {
        return pathname == href;
    }
    pathname.starts_with(href)
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//")
}
