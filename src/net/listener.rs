//! Dual-stack TCP listener.
//!
//! # Responsibilities
//! - Create the listening socket in the IPv6 family
//! - Apply SO_REUSEADDR and clear IPV6_V6ONLY before bind
//! - Bind the wildcard address and listen with a bounded backlog
//! - Accept incoming connections from either address family

use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::{TcpListener, TcpStream};

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug)]
pub enum ListenerError {
    /// Failed to create or configure the socket.
    Socket(std::io::Error),
    /// Failed to bind to the wildcard address.
    Bind(std::io::Error),
    /// Failed to start listening.
    Listen(std::io::Error),
    /// Failed to accept a connection.
    Accept(std::io::Error),
}

impl std::fmt::Display for ListenerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListenerError::Socket(e) => write!(f, "Failed to configure socket: {}", e),
            ListenerError::Bind(e) => write!(f, "Failed to bind: {}", e),
            ListenerError::Listen(e) => write!(f, "Failed to listen: {}", e),
            ListenerError::Accept(e) => write!(f, "Failed to accept: {}", e),
        }
    }
}

impl std::error::Error for ListenerError {}

/// A TCP listener that accepts both IPv4 and IPv6 clients on one socket.
///
/// The socket lives in the IPv6 family with IPV6_V6ONLY cleared, so IPv4
/// clients arrive as IPv4-mapped IPv6 peers. The option has no effect once
/// the socket is bound, which is why setup runs through socket2 instead of
/// `TcpListener::bind`.
#[derive(Debug)]
pub struct DualStackListener {
    inner: TcpListener,
}

impl DualStackListener {
    /// Bind the wildcard address on the configured port.
    ///
    /// Must be called from within a tokio runtime. Any failure here is a
    /// setup-phase error and should abort startup.
    pub fn bind(config: &ListenerConfig) -> Result<Self, ListenerError> {
        let socket = Socket::new(Domain::IPV6, Type::STREAM, Some(Protocol::TCP))
            .map_err(ListenerError::Socket)?;

        // Lets a restarted process rebind without waiting out TIME_WAIT.
        socket
            .set_reuse_address(true)
            .map_err(ListenerError::Socket)?;

        // Must be cleared before bind or IPv4 peers are refused outright.
        socket.set_only_v6(false).map_err(ListenerError::Socket)?;

        let addr = SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), config.port);
        socket.bind(&addr.into()).map_err(ListenerError::Bind)?;
        socket
            .listen(config.backlog as i32)
            .map_err(ListenerError::Listen)?;

        socket
            .set_nonblocking(true)
            .map_err(ListenerError::Socket)?;
        let inner = TcpListener::from_std(socket.into()).map_err(ListenerError::Socket)?;

        let local_addr = inner.local_addr().map_err(ListenerError::Socket)?;

        tracing::info!(
            address = %local_addr,
            backlog = config.backlog,
            "Listener bound"
        );

        Ok(Self { inner })
    }

    /// Accept the next connection from either address family.
    pub async fn accept(&self) -> Result<(TcpStream, SocketAddr), ListenerError> {
        let (stream, addr) = self.inner.accept().await.map_err(ListenerError::Accept)?;
        Ok((stream, addr))
    }

    /// Get the local address this listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, std::io::Error> {
        self.inner.local_addr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ephemeral_config() -> ListenerConfig {
        ListenerConfig {
            port: 0,
            ..ListenerConfig::default()
        }
    }

    #[tokio::test]
    async fn bind_ephemeral_reports_resolved_port() {
        let listener = DualStackListener::bind(&ephemeral_config()).unwrap();
        let addr = listener.local_addr().unwrap();
        assert!(addr.ip().is_unspecified());
        assert_ne!(addr.port(), 0);
    }

    #[tokio::test]
    async fn bind_occupied_port_fails() {
        let first = DualStackListener::bind(&ephemeral_config()).unwrap();
        let port = first.local_addr().unwrap().port();

        let config = ListenerConfig {
            port,
            ..ListenerConfig::default()
        };
        let err = DualStackListener::bind(&config).unwrap_err();
        assert!(matches!(err, ListenerError::Bind(_)));
    }

    #[test]
    fn display_names_the_failed_phase() {
        let err = ListenerError::Bind(std::io::ErrorKind::AddrInUse.into());
        assert!(err.to_string().starts_with("Failed to bind"));

        let err = ListenerError::Listen(std::io::ErrorKind::InvalidInput.into());
        assert!(err.to_string().starts_with("Failed to listen"));
    }
}
