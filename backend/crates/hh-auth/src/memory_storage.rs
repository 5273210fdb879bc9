use crate::{LoadResult, Result as AuthErrorResult, SessionStorage};

use hh_core::Identity;

use std::sync::{Mutex, MutexGuard};

/// In-process storage holding the raw serialized record, like a browser
/// `localStorage` slot.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    record: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with an arbitrary raw record, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            record: Mutex::new(Some(raw.into())),
        }
    }

    /// Current raw record, if any.
    pub fn raw(&self) -> Option<String> {
        self.slot().clone()
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        // A panic while holding the lock cannot leave a half-written String
        self.record
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> AuthErrorResult<LoadResult> {
        Ok(match self.slot().as_deref() {
            Some(raw) => LoadResult::from_record(raw),
            None => LoadResult::empty(),
        })
    }

    fn save(&self, identity: &Identity) -> AuthErrorResult<()> {
        let json = serde_json::to_string(identity)?;
        *self.slot() = Some(json);
        Ok(())
    }

    fn clear(&self) -> AuthErrorResult<()> {
        *self.slot() = None;
        Ok(())
    }
}
