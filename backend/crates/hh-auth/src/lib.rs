pub mod authorization_gate;
pub mod credentials;
pub mod error;
pub mod file_storage;
pub mod gate_outcome;
pub mod load_result;
pub mod memory_storage;
pub mod nav_item;
pub mod notification;
pub mod routing;
pub mod session_snapshot;
pub mod session_storage;
pub mod session_store;

pub use authorization_gate::AuthorizationGate;
pub use credentials::{CredentialTable, DemoAccount, DemoAccountSummary};
pub use error::{AuthError, Result};
pub use file_storage::FileStorage;
pub use gate_outcome::{Denial, GateOutcome, GateState};
pub use load_result::LoadResult;
pub use memory_storage::MemoryStorage;
pub use nav_item::NavItem;
pub use notification::{Notification, NotificationLevel};
pub use routing::RouteDecision;
pub use session_snapshot::SessionSnapshot;
pub use session_storage::SessionStorage;
pub use session_store::SessionStore;

#[cfg(test)]
mod tests;
