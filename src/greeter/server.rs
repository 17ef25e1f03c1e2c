//! Greeting serve loop.
//!
//! # Responsibilities
//! - Accept connections one at a time, in OS accept-queue order
//! - Write the fixed greeting to each client
//! - Close every connection immediately after the write attempt
//! - Keep serving through transient accept failures
//!
//! # Design Decisions
//! - No per-connection tasks: while one client is serviced no other is
//!   accepted, and pending clients wait in the OS backlog
//! - The greeting is fire-and-forget: a failed or short write is logged
//!   and never retried
//! - Shutdown is only observed between iterations, so it cannot change
//!   per-connection behavior

use std::net::SocketAddr;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::lifecycle::ShutdownSignal;
use crate::net::{ConnectionId, DualStackListener};

/// The exact bytes every client receives.
pub const GREETING: &[u8] = b"hello\n";

/// Sequential greeter over a dual-stack listener.
///
/// Owns the listener for the life of the serve loop; the socket is released
/// on every exit path when the server is dropped.
pub struct GreeterServer {
    listener: DualStackListener,
}

impl GreeterServer {
    /// Create a server over an already-bound listener.
    pub fn new(listener: DualStackListener) -> Self {
        Self { listener }
    }

    /// Serve until the stop signal fires.
    ///
    /// Accept errors are transient: they are logged and the loop continues.
    pub async fn run(self, mut shutdown: ShutdownSignal) -> Result<(), std::io::Error> {
        let addr = self.listener.local_addr()?;
        tracing::info!(port = addr.port(), "Greeter serving");

        loop {
            tokio::select! {
                _ = shutdown.recv() => {
                    tracing::info!("Stop requested, leaving accept loop");
                    break;
                }
                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((stream, peer)) => Self::greet(stream, peer).await,
                        Err(e) => {
                            tracing::error!(error = %e, "Accept failed");
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Write the greeting and close the connection.
    async fn greet(mut stream: TcpStream, peer: SocketAddr) {
        let id = ConnectionId::next();
        tracing::debug!(connection_id = %id, peer_addr = %peer, "Connection accepted");

        match stream.write_all(GREETING).await {
            Ok(()) => {
                tracing::debug!(connection_id = %id, "Greeting written");
            }
            Err(e) => {
                tracing::warn!(connection_id = %id, error = %e, "Failed to write greeting");
            }
        }

        if let Err(e) = stream.shutdown().await {
            tracing::trace!(connection_id = %id, error = %e, "Close after greeting failed");
        }

        tracing::debug!(connection_id = %id, "Connection closed");
    }
}
