//! HTTP client for the sync-rules endpoint.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::{error, info, warn};

use super::payload::{SyncPayload, SyncResponse};
use crate::config::BridgeConfig;
use crate::error::SyncError;
use crate::rules::RuleRecord;

/// Result of a sync attempt that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Nothing to send; no request was made.
    Skipped,
    /// The endpoint accepted the batch.
    Delivered {
        /// Number of rules sent.
        sent: usize,
        /// Message from the endpoint (`"OK"` when absent).
        message: String,
    },
}

/// POSTs rule batches to the configured endpoint.
///
/// Every request carries `Authorization: Bearer <secret>` and is bounded by
/// the configured request timeout.
pub struct SyncClient {
    endpoint: String,
    api_secret: String,
    client: reqwest::Client,
}

impl SyncClient {
    /// Build a client for `config.endpoint`.
    ///
    /// # Errors
    /// [`SyncError::Client`] when the underlying HTTP client cannot be built.
    pub fn new(config: &BridgeConfig) -> Result<Self, SyncError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| SyncError::Client(e.to_string()))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            api_secret: config.api_secret.clone(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `rules` and report what happened.
    ///
    /// An empty slice returns [`SyncOutcome::Skipped`] without touching the
    /// network.
    ///
    /// # Errors
    /// - [`SyncError::Timeout`] when the round trip exceeds the timeout.
    /// - [`SyncError::Connect`] on any other transport failure.
    /// - [`SyncError::Status`] on a non-2xx reply; `detail` is the JSON error
    ///   body if there is one, else the raw text.
    /// - [`SyncError::Encode`] if the payload cannot be serialized.
    pub async fn push(&self, rules: &[RuleRecord]) -> Result<SyncOutcome, SyncError> {
        if rules.is_empty() {
            return Ok(SyncOutcome::Skipped);
        }

        let body = serde_json::to_vec(&SyncPayload::new(rules))?;

        let resp = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_secret))
            .body(body)
            .send()
            .await
            .map_err(|e| SyncError::from_transport(&self.endpoint, e))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| SyncError::from_transport(&self.endpoint, e))?;

        if !status.is_success() {
            return Err(SyncError::Status {
                status: status.as_u16(),
                url: self.endpoint.clone(),
                detail: error_detail(&text),
            });
        }

        let message = match serde_json::from_str::<SyncResponse>(&text) {
            Ok(parsed) => {
                if parsed.processed.is_some() || parsed.success.is_some() {
                    info!(
                        processed = ?parsed.processed,
                        success = ?parsed.success,
                        "endpoint acknowledged sync"
                    );
                }
                parsed.message_or_ok().to_string()
            }
            Err(e) => {
                warn!(status = status.as_u16(), error = %e, "sync response body is not JSON");
                "OK".to_string()
            }
        };

        Ok(SyncOutcome::Delivered {
            sent: rules.len(),
            message,
        })
    }

    /// Send `rules`, log the outcome, and return whether it succeeded.
    ///
    /// Never panics and never returns an error; failures are logged here.
    pub async fn sync(&self, rules: &[RuleRecord]) -> bool {
        if !rules.is_empty() {
            info!(count = rules.len(), url = %self.endpoint, "syncing rules");
        }

        match self.push(rules).await {
            Ok(SyncOutcome::Skipped) => {
                warn!("no reminders to sync");
                true
            }
            Ok(SyncOutcome::Delivered { message, .. }) => {
                info!(%message, "sync successful");
                true
            }
            Err(SyncError::Status { status, url, detail }) => {
                error!(status, url = %url, details = %detail, "sync failed");
                false
            }
            Err(e) => {
                error!(error = %e, "sync failed");
                false
            }
        }
    }
}

/// Best description of an error body: compact JSON when it parses, else
/// the trimmed text.
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value.to_string(),
        Err(_) => body.trim().to_string(),
    }
}
