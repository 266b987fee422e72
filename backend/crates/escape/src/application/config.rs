//! Application Configuration
//!
//! Configuration for the escape room client core.

use crate::domain::catalog::Catalog;
use std::time::Duration;

/// Escape room configuration
#[derive(Debug, Clone)]
pub struct EscapeConfig {
    /// Length of one session
    pub max_session: Duration,
    /// Period of the countdown tick
    pub tick_interval: Duration,
    /// Remaining time at or below which the timer badge turns critical
    pub critical_threshold: Duration,
    /// Base URL of the gate API, including the `/api` prefix
    pub api_base_url: String,
    /// Progress is stored under `<prefix><identity>`
    pub progress_key_prefix: String,
    /// Key holding the anonymous player id
    pub anonymous_id_key: String,
    pub anonymous_id_len: usize,
    /// Puzzles in this build
    pub catalog: Catalog,
}

impl Default for EscapeConfig {
    fn default() -> Self {
        Self {
            max_session: Duration::from_secs(15 * 60),
            tick_interval: Duration::from_secs(1),
            critical_threshold: Duration::from_secs(60),
            api_base_url: "http://localhost:5000/api".to_string(),
            progress_key_prefix: "riddlescapeProgress_".to_string(),
            anonymous_id_key: "riddlescapeUserId".to_string(),
            anonymous_id_len: 7,
            catalog: Catalog::full(),
        }
    }
}

impl EscapeConfig {
    /// Create config for development
    ///
    /// Five-minute sessions against a server on the loopback interface.
    pub fn development() -> Self {
        Self {
            max_session: Duration::from_secs(5 * 60),
            api_base_url: "http://127.0.0.1:5000/api".to_string(),
            ..Self::default()
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_max_session(mut self, max_session: Duration) -> Self {
        self.max_session = max_session;
        self
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Whole seconds; sub-second remainders are dropped
    pub fn max_seconds(&self) -> u32 {
        u32::try_from(self.max_session.as_secs()).unwrap_or(u32::MAX)
    }

    pub fn critical_seconds(&self) -> u32 {
        u32::try_from(self.critical_threshold.as_secs()).unwrap_or(u32::MAX)
    }
}
