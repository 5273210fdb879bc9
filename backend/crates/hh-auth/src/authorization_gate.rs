use crate::{Denial, GateOutcome, GateState, SessionSnapshot};

use hh_core::{Identity, Role};

/// Wraps a protected view with an optional role allow-list.
///
/// The gate holds no state of its own; every decision is a pure function of
/// the session snapshot it is handed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizationGate {
    allowed_roles: Option<Vec<Role>>,
}

impl AuthorizationGate {
    /// Any signed-in user passes.
    pub fn authenticated() -> Self {
        Self {
            allowed_roles: None,
        }
    }

    /// Only the listed roles pass. An empty list admits nobody.
    pub fn for_roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed_roles: Some(roles.into_iter().collect()),
        }
    }

    pub fn allowed_roles(&self) -> Option<&[Role]> {
        self.allowed_roles.as_deref()
    }

    pub fn evaluate(&self, snapshot: &SessionSnapshot) -> GateState {
        if snapshot.loading {
            return GateState::Loading;
        }

        match snapshot.identity {
            None => GateState::Denied,
            Some(ref identity) if !self.admits(identity) => GateState::Unauthorized,
            Some(_) => GateState::Authorized,
        }
    }

    /// Render `view` for the signed-in identity, or the placeholder for the
    /// current gate state.
    pub fn render<V, F>(&self, snapshot: &SessionSnapshot, view: F) -> GateOutcome<V>
    where
        F: FnOnce(&Identity) -> V,
    {
        match (self.evaluate(snapshot), snapshot.identity.as_ref()) {
            (GateState::Authorized, Some(identity)) => GateOutcome::Authorized(view(identity)),
            (GateState::Unauthorized, _) => GateOutcome::Unauthorized(Denial::UNAUTHORIZED),
            (GateState::Loading, _) => GateOutcome::Loading,
            _ => GateOutcome::Denied(Denial::ACCESS_DENIED),
        }
    }

    fn admits(&self, identity: &Identity) -> bool {
        match self.allowed_roles {
            Some(ref roles) => identity.has_role(roles),
            None => true,
        }
    }
}
