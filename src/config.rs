//! Environment-driven configuration.
//!
//! | Variable                | Required | Default        |
//! |-------------------------|----------|----------------|
//! | `VERCEL_API_URL`        | yes      | --             |
//! | `API_SECRET_KEY`        | yes      | --             |
//! | `ORBIT_REMINDERS_LIST`  | no       | `Orbit Rules`  |
//! | `SYNC_INTERVAL_MINUTES` | no       | `30`           |
//!
//! The config is read once at startup and handed to the [`Bridge`] and its
//! collaborators; nothing reads the environment after that.
//!
//! [`Bridge`]: crate::bridge::Bridge

use std::time::Duration;

use crate::error::ConfigError;

pub const ENV_API_URL: &str = "VERCEL_API_URL";
pub const ENV_API_SECRET: &str = "API_SECRET_KEY";
pub const ENV_LIST_NAME: &str = "ORBIT_REMINDERS_LIST";
pub const ENV_INTERVAL_MINUTES: &str = "SYNC_INTERVAL_MINUTES";

/// Reminders list the rules are read from.
pub const DEFAULT_LIST_NAME: &str = "Orbit Rules";
/// Minutes between sync cycles.
pub const DEFAULT_INTERVAL_MINUTES: u64 = 30;
/// Upper bound on one POST round trip.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything the bridge needs to run.
#[derive(Clone)]
pub struct BridgeConfig {
    /// Full URL of the sync endpoint, e.g. `https://app.example/api/sync-rules`.
    pub endpoint: String,
    /// Bearer token sent in the `Authorization` header.
    pub api_secret: String,
    /// Reminders list to read.
    pub list_name: String,
    /// Sleep between cycles, also used after an unexpected fault.
    pub poll_interval: Duration,
    /// Bound on a single sync request.
    pub request_timeout: Duration,
}

impl BridgeConfig {
    /// Config with the default list, interval and timeout.
    pub fn new(endpoint: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_secret: api_secret.into(),
            list_name: DEFAULT_LIST_NAME.to_string(),
            poll_interval: Duration::from_secs(DEFAULT_INTERVAL_MINUTES * 60),
            request_timeout: REQUEST_TIMEOUT,
        }
    }

    /// Read the config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the config through `lookup`, which maps a variable name to its value.
    ///
    /// Empty or whitespace-only values count as unset. The secret is kept
    /// exactly as given; every other value is trimmed.
    ///
    /// # Errors
    /// - [`ConfigError::Missing`] when `VERCEL_API_URL` or `API_SECRET_KEY` is absent.
    /// - [`ConfigError::Invalid`] when the URL does not parse or the interval is
    ///   not a positive integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let get = |key: &str| raw(key).map(|v| v.trim().to_string());

        let endpoint = get(ENV_API_URL).ok_or(ConfigError::Missing { var: ENV_API_URL })?;
        let api_secret = raw(ENV_API_SECRET).ok_or(ConfigError::Missing {
            var: ENV_API_SECRET,
        })?;

        reqwest::Url::parse(&endpoint).map_err(|e| ConfigError::Invalid {
            var: ENV_API_URL,
            detail: e.to_string(),
        })?;

        let mut config = Self::new(endpoint, api_secret);

        if let Some(list_name) = get(ENV_LIST_NAME) {
            config.list_name = list_name;
        }

        if let Some(value) = get(ENV_INTERVAL_MINUTES) {
            let minutes = value
                .parse::<u64>()
                .ok()
                .filter(|m| *m > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    var: ENV_INTERVAL_MINUTES,
                    detail: format!("expected a positive number of minutes, got '{value}'"),
                })?;
            config.poll_interval = Duration::from_secs(minutes * 60);
        }

        Ok(config)
    }

    /// Override the poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Override the request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Override the reminders list name.
    pub fn with_list_name(mut self, list_name: impl Into<String>) -> Self {
        self.list_name = list_name.into();
        self
    }
}

// The secret stays out of logs.
impl std::fmt::Debug for BridgeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeConfig")
            .field("endpoint", &self.endpoint)
            .field("api_secret", &"<redacted>")
            .field("list_name", &self.list_name)
            .field("poll_interval", &self.poll_interval)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
