//! Dual-Stack TCP Greeter Service
//!
//! A minimal deployment-demonstration service built with Tokio.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────┐
//!                      │              GREETER SERVICE              │
//!                      │                                           │
//!     TCP connect      │  ┌─────────┐       ┌──────────────────┐  │
//!     ─────────────────┼─▶│   net   │──────▶│     greeter      │  │
//!     (IPv4 or IPv6)   │  │listener │       │ serve loop       │  │
//!                      │  └─────────┘       │ write "hello\n"  │  │
//!     "hello\n" + FIN  │                    │ close connection │  │
//!     ◀────────────────┼────────────────────└──────────────────┘  │
//!                      │                                           │
//!                      │  ┌─────────┐  ┌───────────┐  ┌─────────┐ │
//!                      │  │ config  │  │ lifecycle │  │observa- │ │
//!                      │  │         │  │ signals   │  │ bility  │ │
//!                      │  └─────────┘  └───────────┘  └─────────┘ │
//!                      └──────────────────────────────────────────┘
//! ```
//!
//! One IPv6 socket with IPV6_V6ONLY cleared serves both address families.
//! Connections are serviced strictly one at a time; pending clients wait in
//! the OS accept queue.

use std::path::PathBuf;

use clap::Parser;

use greeterd::config::loader::load_config;
use greeterd::config::schema::parse_port_arg;
use greeterd::config::GreeterConfig;
use greeterd::greeter::GreeterServer;
use greeterd::lifecycle::{signals, Shutdown};
use greeterd::net::DualStackListener;
use greeterd::observability::logging;

#[derive(Parser)]
#[command(name = "greeterd")]
#[command(about = "Dual-stack TCP greeter service", long_about = None)]
struct Cli {
    /// Port to listen on. A non-numeric value falls back to the default port.
    port: Option<String>,

    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GreeterConfig::default(),
    };

    logging::init(&config.observability.log_level);

    tracing::info!("greeterd v0.1.0 starting");

    if let Some(arg) = cli.port.as_deref() {
        config.listener.port = parse_port_arg(arg);
    }

    tracing::info!(
        port = config.listener.port,
        backlog = config.listener.backlog,
        "Configuration loaded"
    );

    let listener = DualStackListener::bind(&config.listener)?;
    let local_addr = listener.local_addr()?;

    tracing::info!(port = local_addr.port(), "Server listening");

    let shutdown = Shutdown::new();
    let signal = shutdown.subscribe();

    tokio::spawn(async move {
        signals::wait_for_termination().await;
        tracing::info!("Termination signal received");
        shutdown.trigger();
    });

    GreeterServer::new(listener).run(signal).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
