//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::task::JoinHandle;

use greeterd::config::ListenerConfig;
use greeterd::greeter::GreeterServer;
use greeterd::lifecycle::Shutdown;
use greeterd::net::DualStackListener;

/// Start a greeter on an OS-assigned port.
///
/// Returns the bound wildcard address, the stop handle, and the serve task.
pub fn start_greeter() -> (SocketAddr, Shutdown, JoinHandle<Result<(), std::io::Error>>) {
    let config = ListenerConfig {
        port: 0,
        ..ListenerConfig::default()
    };
    let listener = DualStackListener::bind(&config).expect("bind greeter");
    let addr = listener.local_addr().expect("local addr");

    let shutdown = Shutdown::new();
    let signal = shutdown.subscribe();
    let handle = tokio::spawn(GreeterServer::new(listener).run(signal));

    (addr, shutdown, handle)
}

/// Connect to `addr`, read until the server closes, and return the bytes.
pub async fn read_greeting(addr: SocketAddr) -> Vec<u8> {
    let mut stream = tokio::time::timeout(Duration::from_secs(5), TcpStream::connect(addr))
        .await
        .expect("connect timed out")
        .expect("connect failed");

    let mut received = Vec::new();
    tokio::time::timeout(Duration::from_secs(5), stream.read_to_end(&mut received))
        .await
        .expect("read timed out")
        .expect("read failed");

    received
}
