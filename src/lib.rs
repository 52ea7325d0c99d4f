//! # Orbit Reminders Bridge
//!
//! Reads the items of a Reminders list through `osascript`, turns each into
//! a [`RuleRecord`], and POSTs the batch to the Orbit sync-rules endpoint
//! every poll interval until interrupted.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = BridgeConfig::from_env()?;
//! let source = RemindersSource::new(config.list_name.clone());
//! let shutdown = ShutdownSignal::install()?;
//! let mut bridge = Bridge::new(config, source)?;
//! bridge.run(shutdown.recv()).await;
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod rules;
pub mod shutdown;
pub mod source;
pub mod sync;

pub use bridge::{Bridge, BridgeState, CycleReport, RunSummary};
pub use config::BridgeConfig;
pub use error::{BridgeError, ConfigError, SourceError, SyncError};
pub use rules::{parse_rules, RuleRecord};
pub use shutdown::ShutdownSignal;
pub use source::{fetch_rules, RemindersSource, RuleSource};
pub use sync::{SyncClient, SyncOutcome, SyncPayload};
