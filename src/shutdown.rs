//! Process interrupt handling.
//!
//! [`ShutdownSignal::install`] registers the SIGINT and SIGTERM listeners
//! immediately, so an interrupt that arrives while the first cycle is still
//! running is queued instead of killing the process.

use tracing::info;

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

/// Installed interrupt listeners. [`recv`](Self::recv) resolves on the first
/// SIGINT (or SIGTERM on unix) received after installation.
pub struct ShutdownSignal {
    #[cfg(unix)]
    interrupt: Signal,
    #[cfg(unix)]
    terminate: Signal,
    #[cfg(not(unix))]
    ctrl_c: tokio::signal::windows::CtrlC,
}

impl ShutdownSignal {
    /// Register the listeners. Must be called inside a tokio runtime.
    ///
    /// # Errors
    /// Returns the OS error when a handler cannot be registered.
    #[cfg(unix)]
    pub fn install() -> std::io::Result<Self> {
        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    /// Register the listener. Must be called inside a tokio runtime.
    ///
    /// # Errors
    /// Returns the OS error when the handler cannot be registered.
    #[cfg(not(unix))]
    pub fn install() -> std::io::Result<Self> {
        Ok(Self {
            ctrl_c: tokio::signal::windows::ctrl_c()?,
        })
    }

    /// Wait for an interrupt.
    pub async fn recv(mut self) {
        #[cfg(unix)]
        tokio::select! {
            _ = self.interrupt.recv() => info!("received SIGINT (Ctrl-C)"),
            _ = self.terminate.recv() => info!("received SIGTERM"),
        }

        #[cfg(not(unix))]
        {
            self.ctrl_c.recv().await;
            info!("received Ctrl-C");
        }
    }
}
