use crate::{LoadResult, Result as AuthErrorResult};

use hh_core::Identity;

/// Durable single-key storage for the signed-in identity.
///
/// Implementations hold at most one record. All calls are short and
/// synchronous; the session store never awaits while calling them.
pub trait SessionStorage: Send + Sync {
    /// Read the stored record.
    ///
    /// Returns:
    /// - `Ok(LoadResult { identity: Some(..), corruption_error: None })` - record restored
    /// - `Ok(LoadResult { identity: None, corruption_error: None })` - nothing stored
    /// - `Ok(LoadResult { identity: None, corruption_error: Some(..) })` - record unreadable
    fn load(&self) -> AuthErrorResult<LoadResult>;

    /// Replace the stored record.
    fn save(&self, identity: &Identity) -> AuthErrorResult<()>;

    /// Remove the stored record. Removing an absent record is not an error.
    fn clear(&self) -> AuthErrorResult<()>;
}

impl<S: SessionStorage + ?Sized> SessionStorage for std::sync::Arc<S> {
    fn load(&self) -> AuthErrorResult<LoadResult> {
        (**self).load()
    }

    fn save(&self, identity: &Identity) -> AuthErrorResult<()> {
        (**self).save(identity)
    }

    fn clear(&self) -> AuthErrorResult<()> {
        (**self).clear()
    }
}
