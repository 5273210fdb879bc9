use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by the session store and its storage backends.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("No active session {location}")]
    NoActiveSession { location: ErrorLocation },

    #[error("Failed to read session record at {path}: {source} {location}")]
    StorageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to write session record at {path}: {source} {location}")]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to create directory at {path}: {source} {location}")]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Atomic rename failed from {from} to {to}: {source} {location}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize session record: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Whether a user-initiated retry may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::StorageRead { .. } | Self::StorageWrite { .. } | Self::AtomicRename { .. }
        )
    }

    /// Short text for the transient notification shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "Invalid email or password",
            Self::NoActiveSession { .. } => "Please log in to continue",
            _ => "Something went wrong. Please try again.",
        }
    }

    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => {
                "Check the email and password, or use one of the demo accounts."
            }
            Self::NoActiveSession { .. } => "Log in before editing your profile.",
            Self::StorageRead { .. } => {
                "Unable to read the saved session. \
                   The file may be locked by another process."
            }
            Self::StorageWrite { .. } | Self::DirCreation { .. } => {
                "Unable to write to the session directory. \
                   Check disk space and file permissions."
            }
            Self::AtomicRename { .. } => {
                "Unable to save the session safely. \
                   Check disk space and try again."
            }
            Self::Serialization { .. } => {
                "Internal error preparing session data. \
                   Please report this issue."
            }
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_active_session() -> Self {
        Self::NoActiveSession {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::StorageRead {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::StorageWrite {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn dir_creation(path: PathBuf, source: std::io::Error) -> Self {
        Self::DirCreation {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for AuthError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
