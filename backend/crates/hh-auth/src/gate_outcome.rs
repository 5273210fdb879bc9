use serde::Serialize;

/// Which of the four gate states a session snapshot maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    Loading,
    Denied,
    Unauthorized,
    Authorized,
}

/// Text shown in place of a protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Denial {
    pub heading: &'static str,
    pub message: &'static str,
}

impl Denial {
    pub const ACCESS_DENIED: Denial = Denial {
        heading: "Access Denied",
        message: "Please log in to access this page.",
    };

    pub const UNAUTHORIZED: Denial = Denial {
        heading: "Unauthorized",
        message: "You don't have permission to access this page.",
    };
}

/// What the gate renders: a placeholder or the wrapped view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome<V> {
    Loading,
    Denied(Denial),
    Unauthorized(Denial),
    Authorized(V),
}

impl<V> GateOutcome<V> {
    pub fn state(&self) -> GateState {
        match self {
            Self::Loading => GateState::Loading,
            Self::Denied(_) => GateState::Denied,
            Self::Unauthorized(_) => GateState::Unauthorized,
            Self::Authorized(_) => GateState::Authorized,
        }
    }

    pub fn into_view(self) -> Option<V> {
        match self {
            Self::Authorized(view) => Some(view),
            _ => None,
        }
    }
}
