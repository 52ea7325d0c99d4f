//! `orbit-reminders-bridge` -- pushes a Reminders list to the Orbit API.
//!
//! Runs until SIGINT (or SIGTERM on unix). Configuration comes from the
//! environment, optionally seeded from a `.env` file; see
//! [`orbit_reminders_bridge::config`] for the variables.

use std::process::ExitCode;

use orbit_reminders_bridge::{Bridge, BridgeConfig, RemindersSource, ShutdownSignal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orbit_reminders_bridge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match BridgeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let source = RemindersSource::new(config.list_name.clone());
    let mut bridge = match Bridge::new(config, source) {
        Ok(bridge) => bridge,
        Err(e) => {
            tracing::error!(error = %e, "failed to start bridge");
            return ExitCode::FAILURE;
        }
    };

    let summary = match ShutdownSignal::install() {
        Ok(signal) => bridge.run(signal.recv()).await,
        Err(e) => {
            tracing::warn!(error = %e, "failed to install signal handlers");
            bridge.run(std::future::pending()).await
        }
    };

    tracing::info!(
        cycles = summary.cycles,
        successful_syncs = summary.successful_syncs,
        failed_syncs = summary.failed_syncs,
        faults = summary.faults,
        "shutting down gracefully"
    );
    ExitCode::SUCCESS
}
