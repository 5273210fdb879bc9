use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_LATENCY_MS, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
    MAX_SIMULATED_DELAY_MS,
};

use std::time::Duration;

use serde::Deserialize;

/// Settings for the simulated API service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub latency_ms: u64,
    pub default_page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_API_LATENCY_MS,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ApiConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.latency_ms > MAX_SIMULATED_DELAY_MS {
            return Err(ConfigError::api(format!(
                "api.latency_ms must be <= {}, got {}",
                MAX_SIMULATED_DELAY_MS, self.latency_ms
            )));
        }

        if self.default_page_size == 0 || self.default_page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::api(format!(
                "api.default_page_size must be 1-{}, got {}",
                MAX_PAGE_SIZE, self.default_page_size
            )));
        }

        Ok(())
    }
}
