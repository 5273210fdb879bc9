use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOGIN_DELAY_MS, DEFAULT_PROFILE_DELAY_MS,
    DEFAULT_STORAGE_KEY, MAX_SIMULATED_DELAY_MS, MAX_STORAGE_KEY_LENGTH,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Key the signed-in identity is persisted under
    pub storage_key: String,
    /// Simulated latency of a login call
    pub login_delay_ms: u64,
    /// Simulated latency of a profile update call
    pub profile_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: String::from(DEFAULT_STORAGE_KEY),
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
            profile_delay_ms: DEFAULT_PROFILE_DELAY_MS,
        }
    }
}

impl SessionConfig {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn profile_delay(&self) -> Duration {
        Duration::from_millis(self.profile_delay_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.storage_key.is_empty() || self.storage_key.len() > MAX_STORAGE_KEY_LENGTH {
            return Err(ConfigError::session(format!(
                "session.storage_key must be 1-{} characters, got {}",
                MAX_STORAGE_KEY_LENGTH,
                self.storage_key.len()
            )));
        }

        // The key doubles as a file name for on-disk storage.
        if !self
            .storage_key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ConfigError::session(format!(
                "session.storage_key may only contain letters, digits, '_' and '-', got '{}'",
                self.storage_key
            )));
        }

        for (name, value) in [
            ("login_delay_ms", self.login_delay_ms),
            ("profile_delay_ms", self.profile_delay_ms),
        ] {
            if value > MAX_SIMULATED_DELAY_MS {
                return Err(ConfigError::session(format!(
                    "session.{name} must be <= {MAX_SIMULATED_DELAY_MS}, got {value}"
                )));
            }
        }

        Ok(())
    }
}
