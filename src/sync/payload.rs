//! Wire types for the sync-rules endpoint.
//!
//! ## Request
//! ```json
//! { "sync_timestamp": "2026-10-18T09:30:00.123456Z",
//!   "rules": [ { "rule_name": "...", "criteria_logic": "...", "source_id": "..." } ] }
//! ```
//!
//! ## Response
//! Success bodies look like `{ "success": true, "message": "...", "processed": 3 }`.
//! Only `message` is relied on; everything is optional.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::rules::RuleRecord;

/// Body POSTed to the endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SyncPayload<'a> {
    pub sync_timestamp: String,
    pub rules: &'a [RuleRecord],
}

impl<'a> SyncPayload<'a> {
    /// Payload stamped with the current UTC time.
    pub fn new(rules: &'a [RuleRecord]) -> Self {
        Self::at(Utc::now(), rules)
    }

    /// Payload stamped with `at`.
    pub fn at(at: DateTime<Utc>, rules: &'a [RuleRecord]) -> Self {
        Self {
            sync_timestamp: format_timestamp(at),
            rules,
        }
    }
}

/// RFC 3339, microsecond precision, `Z` suffix.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Success body returned by the endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyncResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub processed: Option<u64>,
}

impl SyncResponse {
    /// Server message, or `"OK"` when it sent none.
    pub fn message_or_ok(&self) -> &str {
        self.message.as_deref().unwrap_or("OK")
    }
}
