//! Stop-signal coordination for the serve loop.

use tokio::sync::watch;

/// Handle that requests the serve loop to stop.
pub struct Shutdown {
    tx: watch::Sender<bool>,
}

impl Shutdown {
    /// Create a new, untriggered stop handle.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// Get a signal the serve loop can wait on.
    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Request the serve loop to stop.
    pub fn trigger(&self) {
        let _ = self.tx.send(true);
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side of the stop signal.
///
/// Level-triggered: a signal subscribed after `trigger` still resolves
/// immediately.
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Resolve once stop has been requested.
    ///
    /// Also resolves if the `Shutdown` handle was dropped, so the serve
    /// loop cannot outlive its owner.
    pub async fn recv(&mut self) {
        while !*self.rx.borrow() {
            if self.rx.changed().await.is_err() {
                break;
            }
        }
    }

    /// Whether stop has been requested.
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }
}
