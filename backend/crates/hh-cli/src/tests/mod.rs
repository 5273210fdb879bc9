
use crate::App;

use hh_api::MockApiService;
use hh_auth::{CredentialTable, SessionStorage, SessionStore};
use hh_config::{ApiConfig, SessionConfig};

pub(crate) const ADMIN_EMAIL: &str = "admin@helpinghands.org";
pub(crate) const ADMIN_SECRET: &str = "admin123";
pub(crate) const DONOR_EMAIL: &str = "donor@helpinghands.org";
pub(crate) const DONOR_SECRET: &str = "donor123";

/// Initialized app over `storage` with the default simulated delays.
pub(crate) async fn app_with<S: SessionStorage>(storage: S) -> App<S> {
    let store = SessionStore::new(
        storage,
        CredentialTable::builtin(),
        &SessionConfig::default(),
    );
    store.initialize().await;
    App::new(store, MockApiService::new(&ApiConfig::default()))
}
