mod memory_storage;

use crate::{CredentialTable, MemoryStorage, SessionStore};

use hh_config::SessionConfig;

use std::sync::Arc;

pub(crate) const ADMIN_EMAIL: &str = "admin@helpinghands.org";
pub(crate) const ADMIN_SECRET: &str = "admin123";
pub(crate) const DONOR_EMAIL: &str = "donor@helpinghands.org";
pub(crate) const DONOR_SECRET: &str = "donor123";

/// Store over shared memory storage so tests can inspect the raw record.
pub(crate) fn memory_store(
    storage: Arc<MemoryStorage>,
) -> SessionStore<Arc<MemoryStorage>> {
    SessionStore::new(
        storage,
        CredentialTable::builtin(),
        &SessionConfig::default(),
    )
}
