use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] hh_config::ConfigError),

    #[error("{0}")]
    Auth(#[from] hh_auth::AuthError),

    #[error("{0}")]
    Core(#[from] hh_core::CoreError),

    #[error("Api error: {0}")]
    Api(#[from] hh_api::ApiError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize output: {source} {location}")]
    Output {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Follow-up advice printed under the error, when there is any.
    pub fn recovery_hint(&self) -> Option<&'static str> {
        match self {
            Self::Auth(e) => Some(e.recovery_hint()),
            Self::Config(_) => Some("Check config.toml and the HH_* environment variables."),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Output {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
