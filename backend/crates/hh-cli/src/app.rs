use crate::{Commands, Result as CliErrorResult};

use hh_api::{ApiResponse, DashboardStats, MockApiService};
use hh_auth::routing::{
    dashboard_redirect, is_active_route, navigation_items, post_login_target, protect,
};
use hh_auth::{
    AuthError, AuthorizationGate, GateOutcome, NavItem, Notification, SessionStorage,
    SessionStore,
};
use hh_core::{CoreError, IdentityPatch, LoginForm, Role};

use serde::Serialize;
use serde_json::{Value, json};
use tokio::sync::broadcast;

const STATS_URL: &str = "/stats";

/// Sidebar entry plus whether it matches the current path.
#[derive(Debug, Serialize)]
struct NavEntry {
    #[serde(flatten)]
    item: NavItem,
    active: bool,
}

/// Runs one command against an initialized session store.
pub struct App<S: SessionStorage> {
    store: SessionStore<S>,
    api: MockApiService,
}

impl<S: SessionStorage> App<S> {
    pub fn new(store: SessionStore<S>, api: MockApiService) -> Self {
        Self { store, api }
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.store.subscribe()
    }

    pub async fn run(&self, command: Commands) -> CliErrorResult<Value> {
        match command {
            Commands::Login {
                email,
                password,
                redirect,
            } => {
                LoginForm::new(&email, &password).validate()?;

                let identity = self.store.login(&email, &password).await?;
                Ok(json!({
                    "identity": identity,
                    "landing": identity.role.landing_path(),
                    "redirect": post_login_target(redirect.as_deref()),
                }))
            }

            Commands::Logout => {
                self.store.logout().await?;
                Ok(json!({ "authenticated": false }))
            }

            Commands::Whoami => {
                let snapshot = self.store.snapshot().await;
                Ok(json!({
                    "authenticated": snapshot.is_authenticated(),
                    "identity": snapshot.identity,
                }))
            }

            Commands::UpdateProfile {
                name,
                email,
                phone,
                avatar,
            } => {
                let patch = IdentityPatch {
                    name,
                    email,
                    phone,
                    avatar,
                    ..Default::default()
                };
                if patch.is_empty() {
                    return Err(CoreError::validation("nothing to update").into());
                }
                patch.validate()?;

                let updated = self.store.update_profile(&patch).await?;
                Ok(serde_json::to_value(updated)?)
            }

            Commands::Gate { path, roles } => self.gate(path, &roles).await,

            Commands::Dashboard => {
                let snapshot = self.store.snapshot().await;
                Ok(json!({ "redirect": dashboard_redirect(&snapshot) }))
            }

            Commands::Nav { path } => {
                let Some(identity) = self.store.get().await else {
                    return Err(AuthError::no_active_session().into());
                };

                let entries: Vec<NavEntry> = navigation_items(identity.role)
                    .iter()
                    .map(|item| NavEntry {
                        item: *item,
                        active: path
                            .as_deref()
                            .is_some_and(|current| is_active_route(item.href, current)),
                    })
                    .collect();
                Ok(serde_json::to_value(entries)?)
            }

            Commands::Stats => {
                let response: ApiResponse<DashboardStats> = self.api.get(STATS_URL).await?;
                Ok(serde_json::to_value(response)?)
            }

            Commands::Items { page, limit } => {
                let response = self.api.paginate(page, limit).await?;
                Ok(serde_json::to_value(response)?)
            }

            Commands::Accounts => Ok(serde_json::to_value(
                self.store.credentials().summaries(),
            )?),
        }
    }

    async fn gate(&self, path: String, roles: &[String]) -> CliErrorResult<Value> {
        let gate = if roles.is_empty() {
            AuthorizationGate::authenticated()
        } else {
            let roles = roles
                .iter()
                .map(|role| role.parse::<Role>())
                .collect::<Result<Vec<_>, _>>()?;
            AuthorizationGate::for_roles(roles)
        };

        let snapshot = self.store.snapshot().await;
        let decision = protect(&gate, &snapshot, &path);
        let outcome = gate.render(&snapshot, |identity| identity.name.clone());
        let state = outcome.state();

        let (viewer, denial) = match outcome {
            GateOutcome::Authorized(name) => (Some(name), None),
            GateOutcome::Denied(denial) | GateOutcome::Unauthorized(denial) => {
                (None, Some(denial))
            }
            GateOutcome::Loading => (None, None),
        };

        Ok(json!({
            "path": path,
            "state": state,
            "decision": decision,
            "viewer": viewer,
            "denial": denial,
        }))
    }
}
