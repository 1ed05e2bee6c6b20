//! One-shot stop signal shared by the serve future and the retention loop.

use log::info;
use tokio::sync::watch;

/// Sender side; cloned into the Ctrl+C handler
#[derive(Clone)]
pub struct ShutdownSignal {
    tx: watch::Sender<bool>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// Stop everything holding a listener. Repeated calls are no-ops.
    pub fn trigger(&self) {
        let first = self.tx.send_if_modified(|stopped| !std::mem::replace(stopped, true));
        if first {
            info!("Shutdown signal received, stopping server and retention loop");
        }
    }

    pub fn listener(&self) -> ShutdownListener {
        ShutdownListener(self.tx.subscribe())
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves once the signal has fired, including when it fired before the
/// listener was created
pub struct ShutdownListener(watch::Receiver<bool>);

impl ShutdownListener {
    pub async fn triggered(mut self) {
        // Err only if the sender is gone, which also means nothing is left to stop for
        let _ = self.0.wait_for(|stopped| *stopped).await;
    }
}
