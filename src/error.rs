//! Error types for the bridge.
//!
//! Only [`ConfigError`] and [`SyncError::Client`] are fatal, and only at
//! startup. Everything raised while the loop is running is logged and
//! absorbed by the component that raised it.

use std::process::ExitStatus;

/// Invalid or missing environment configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("{var} environment variable is required")]
    Missing { var: &'static str },
    /// A variable is set but cannot be used.
    #[error("{var} is invalid: {detail}")]
    Invalid { var: &'static str, detail: String },
}

/// Failure to read items from the reminders application.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The scripting program could not be started at all.
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// The script ran but exited unsuccessfully.
    #[error("script exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
    /// The script printed something that is not UTF-8.
    #[error("script output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Failure to deliver a batch to the sync endpoint.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The round trip exceeded the request timeout.
    #[error("request to {url} timed out")]
    Timeout { url: String },
    /// The request never produced a response (DNS, TCP, TLS, ...).
    #[error("request to {url} failed: {detail}")]
    Connect { url: String, detail: String },
    /// The endpoint answered with a non-2xx status.
    #[error("HTTP {status} from {url}: {detail}")]
    Status {
        status: u16,
        url: String,
        detail: String,
    },
    /// The payload could not be serialized.
    #[error("could not encode sync payload: {0}")]
    Encode(#[from] serde_json::Error),
    /// The HTTP client itself could not be built.
    #[error("could not build HTTP client: {0}")]
    Client(String),
}

impl SyncError {
    /// Classify a reqwest send/receive error.
    pub(crate) fn from_transport(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SyncError::Timeout {
                url: url.to_string(),
            }
        } else {
            SyncError::Connect {
                url: url.to_string(),
                detail: err.to_string(),
            }
        }
    }
}

/// Startup failures that prevent the bridge from running.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sync(#[from] SyncError),
}
