//! # Sync
//!
//! Pushes rule batches to the remote sync-rules endpoint.
//!
//! 1. **Payload** — [`SyncPayload`] stamps the batch with a UTC timestamp.
//! 2. **Client** — [`SyncClient`] POSTs it with a bearer token and a fixed
//!    timeout, and reads back the endpoint's message or error body.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let client = SyncClient::new(&config)?;
//! let ok = client.sync(&rules).await;
//! ```

pub mod client;
pub mod payload;

pub use client::{SyncClient, SyncOutcome};
pub use payload::{format_timestamp, SyncPayload, SyncResponse};
