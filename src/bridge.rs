//! # Bridge loop
//!
//! Fetch, sync, sleep, repeat:
//!
//! ```text
//!            ┌──────────── sleep(poll_interval) ◄───────────┐
//!            ▼                                               │
//! Running: fetch_rules ──► SyncClient::sync ──► log outcome ─┘
//!            │
//!            └── shutdown resolved at the sleep boundary ──► Terminated
//! ```
//!
//! Source and sync failures are absorbed by the collaborators. A panic inside
//! a cycle is caught here, logged, and followed by the usual sleep.

use std::future::Future;
use std::panic::AssertUnwindSafe;

use chrono::Utc;
use futures_util::FutureExt;
use tracing::{error, info};

use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::source::{fetch_rules, RuleSource};
use crate::sync::SyncClient;

/// Lifecycle of a [`Bridge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    Running,
    Terminated,
}

/// What one cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    /// Rules read from the source (zero when the fetch failed).
    pub fetched: usize,
    /// Whether the sync step succeeded. An empty batch counts as success.
    pub synced: bool,
}

/// Totals for one call to [`Bridge::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub cycles: u64,
    pub successful_syncs: u64,
    pub failed_syncs: u64,
    /// Cycles aborted by a panic.
    pub faults: u64,
}

/// Drives the fetch/sync loop for one source.
pub struct Bridge<S> {
    config: BridgeConfig,
    source: S,
    client: SyncClient,
    state: BridgeState,
}

impl<S: RuleSource> Bridge<S> {
    /// # Errors
    /// [`BridgeError::Sync`] when the HTTP client cannot be built.
    pub fn new(config: BridgeConfig, source: S) -> Result<Self, BridgeError> {
        let client = SyncClient::new(&config)?;
        Ok(Self {
            config,
            source,
            client,
            state: BridgeState::Running,
        })
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn state(&self) -> BridgeState {
        self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the current rules and push them once.
    pub async fn run_cycle(&self) -> CycleReport {
        info!(
            started_at = %Utc::now().format("%Y-%m-%d %H:%M:%S"),
            "starting sync"
        );

        let rules = fetch_rules(&self.source).await;
        info!(count = rules.len(), "found reminders");

        let synced = self.client.sync(&rules).await;

        CycleReport {
            fetched: rules.len(),
            synced,
        }
    }

    /// Run cycles until `shutdown` resolves.
    ///
    /// `shutdown` is polled once before the first cycle, so listeners that
    /// register on first poll (such as `tokio::signal::ctrl_c`) are in place
    /// from the start. After that it is only raced against the sleep between
    /// cycles; a cycle in progress runs to completion first. Returns the
    /// totals and leaves the bridge in [`BridgeState::Terminated`].
    pub async fn run<F>(&mut self, shutdown: F) -> RunSummary
    where
        F: Future<Output = ()>,
    {
        let interval = self.config.poll_interval;
        info!(
            list = %self.config.list_name,
            interval_secs = interval.as_secs(),
            endpoint = %self.config.endpoint,
            "reminders bridge started"
        );

        tokio::pin!(shutdown);
        let mut shutdown_requested = shutdown.as_mut().now_or_never().is_some();
        self.state = BridgeState::Running;
        let mut summary = RunSummary::default();

        loop {
            summary.cycles += 1;

            match AssertUnwindSafe(self.run_cycle()).catch_unwind().await {
                Ok(report) => {
                    if report.synced {
                        summary.successful_syncs += 1;
                    } else {
                        summary.failed_syncs += 1;
                    }
                    info!(next_in_secs = interval.as_secs(), "next sync scheduled");
                }
                Err(panic) => {
                    summary.faults += 1;
                    error!(
                        error = %panic_message(panic.as_ref()),
                        retry_in_secs = interval.as_secs(),
                        "unexpected error during sync cycle"
                    );
                }
            }

            // A completed future must not be polled again.
            if !shutdown_requested {
                tokio::select! {
                    biased;
                    _ = &mut shutdown => shutdown_requested = true,
                    _ = tokio::time::sleep(interval) => {}
                }
            }

            if shutdown_requested {
                info!("shutdown requested");
                break;
            }
        }

        self.state = BridgeState::Terminated;
        summary
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
