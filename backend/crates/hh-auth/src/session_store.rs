use crate::{
    AuthError, CredentialTable, Notification, Result as AuthErrorResult, SessionSnapshot,
    SessionStorage,
};

use hh_config::SessionConfig;
use hh_core::{Identity, IdentityPatch};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::Utc;
use log::{debug, error, info, warn};
use tokio::sync::{OnceCell, RwLock, broadcast};

const NOTIFICATION_CAPACITY: usize = 16;

/// Holder of at most one signed-in identity, persisted through `S`.
///
/// Construct one per process and share it by `Arc`. The state lock is never
/// held across a simulated delay.
pub struct SessionStore<S: SessionStorage> {
    storage: S,
    credentials: CredentialTable,
    login_delay: Duration,
    profile_delay: Duration,
    identity: RwLock<Option<Identity>>,
    initialized: OnceCell<()>,
    in_flight: AtomicUsize,
    notifications: broadcast::Sender<Notification>,
}

/// Keeps `loading` raised while a simulated request is pending, including
/// when the request future is dropped early.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn begin(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S, credentials: CredentialTable, config: &SessionConfig) -> Self {
        let (notifications, _) = broadcast::channel(NOTIFICATION_CAPACITY);
        Self {
            storage,
            credentials,
            login_delay: config.login_delay(),
            profile_delay: config.profile_delay(),
            identity: RwLock::new(None),
            initialized: OnceCell::new(),
            in_flight: AtomicUsize::new(0),
            notifications,
        }
    }

    /// Restore a previously persisted identity. Only the first call reads
    /// storage; later calls return the current identity.
    ///
    /// A corrupt record is discarded and removed. Storage failures are logged
    /// and treated as "no session".
    pub async fn initialize(&self) -> Option<Identity> {
        self.initialized
            .get_or_init(|| async {
                let restored = self.restore();
                *self.identity.write().await = restored;
            })
            .await;

        self.get().await
    }

    fn restore(&self) -> Option<Identity> {
        let loaded = match self.storage.load() {
            Ok(loaded) => loaded,
            Err(e) => {
                error!("Failed to read session record, starting signed out: {e}");
                return None;
            }
        };

        if let Some(ref message) = loaded.corruption_error {
            warn!("Discarding corrupt session record: {message}");
            if let Err(e) = self.storage.clear() {
                warn!("Failed to remove corrupt session record: {e}");
            }
            return None;
        }

        match loaded.identity {
            Some(identity) => {
                // The record carries the role with no signature or expiry.
                warn!(
                    "Restored unverified session for {} ({})",
                    identity.email, identity.role
                );
                Some(identity)
            }
            None => {
                debug!("No persisted session");
                None
            }
        }
    }

    pub async fn get(&self) -> Option<Identity> {
        self.identity.read().await.clone()
    }

    pub fn is_loading(&self) -> bool {
        !self.initialized.initialized() || self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let identity = self.get().await;
        SessionSnapshot {
            identity,
            loading: self.is_loading(),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.notifications.subscribe()
    }

    /// Simulated login against the credential table.
    ///
    /// On success the matched identity becomes the session and is persisted.
    /// On any failure the session is left exactly as it was.
    pub async fn login(&self, email: &str, secret: &str) -> AuthErrorResult<Identity> {
        let _in_flight = InFlight::begin(&self.in_flight);

        tokio::time::sleep(self.login_delay).await;

        let Some(identity) = self.credentials.verify(email, secret).cloned() else {
            info!("Login rejected for {email}");
            let err = AuthError::invalid_credentials();
            self.notify(Notification::error(err.user_message()));
            return Err(err);
        };

        let mut current = self.identity.write().await;

        if let Err(e) = self.storage.save(&identity) {
            error!("Failed to persist session for {email}: {e}");
            self.notify(Notification::error("Login failed. Please try again."));
            return Err(e);
        }

        *current = Some(identity.clone());
        drop(current);

        info!("Login succeeded for {} ({})", identity.email, identity.role);
        self.notify(Notification::success(format!(
            "Welcome back, {}!",
            identity.name
        )));
        Ok(identity)
    }

    /// Clear the session and its persisted record.
    ///
    /// The in-memory session is always cleared, even when removing the record fails.
    pub async fn logout(&self) -> AuthErrorResult<()> {
        let previous = self.identity.write().await.take();

        if let Some(ref identity) = previous {
            info!("Logged out {}", identity.email);
        }

        self.storage.clear()?;
        self.notify(Notification::success("Logged out successfully"));
        Ok(())
    }

    /// Merge `patch` into the signed-in identity and persist it.
    pub async fn update_profile(&self, patch: &IdentityPatch) -> AuthErrorResult<Identity> {
        if self.identity.read().await.is_none() {
            return Err(self.signed_out());
        }

        let _in_flight = InFlight::begin(&self.in_flight);

        tokio::time::sleep(self.profile_delay).await;

        let mut current = self.identity.write().await;

        // A logout may have landed during the delay
        let Some(ref existing) = *current else {
            return Err(self.signed_out());
        };

        let updated = existing.merged(patch, Utc::now());

        if let Err(e) = self.storage.save(&updated) {
            error!("Failed to persist profile update for {}: {e}", updated.email);
            self.notify(Notification::error("Failed to update profile"));
            return Err(e);
        }

        *current = Some(updated.clone());
        drop(current);

        info!("Profile updated for {}", updated.email);
        self.notify(Notification::success("Profile updated successfully"));
        Ok(updated)
    }

    pub fn credentials(&self) -> &CredentialTable {
        &self.credentials
    }

    #[track_caller]
    fn signed_out(&self) -> AuthError {
        let err = AuthError::no_active_session();
        self.notify(Notification::error(err.user_message()));
        err
    }

    fn notify(&self, notification: Notification) {
        // No subscribers is the common case outside interactive front ends
        let _ = self.notifications.send(notification);
    }
}
