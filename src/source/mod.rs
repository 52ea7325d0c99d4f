//! # Rule sources
//!
//! A [`RuleSource`] lists the rules currently in the reminders list. The
//! production implementation is [`RemindersSource`], which shells out to
//! `osascript`; tests substitute their own.
//!
//! [`fetch_rules`] is the fetcher the loop calls: it turns any source error
//! into an empty batch so a broken source never stops the bridge.

pub mod reminders;

use std::future::Future;

use tracing::error;

use crate::error::SourceError;
use crate::rules::RuleRecord;

pub use reminders::RemindersSource;

/// Something that can list the rules currently in the reminders list.
pub trait RuleSource {
    /// Current snapshot of the list, in source order.
    fn list_rules(&self) -> impl Future<Output = Result<Vec<RuleRecord>, SourceError>>;
}

/// Read the current rules, treating any failure as an empty list.
pub async fn fetch_rules<S: RuleSource>(source: &S) -> Vec<RuleRecord> {
    match source.list_rules().await {
        Ok(rules) => rules,
        Err(e) => {
            error!(error = %e, "failed to fetch reminders");
            Vec::new()
        }
    }
}
