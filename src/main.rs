use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use teletap::config::{self, ListenerConfig};
use teletap::listener::Listener;
use teletap::logging;
use teletap::report::ConsoleReporter;
use teletap::sender;
use tracing::info;
use tracing::level_filters::LevelFilter;

/// Manual test aid for a UDP telemetry link: listen for
/// whitespace-separated float datagrams and print them, or send some.
#[derive(Parser)]
#[command(name = "teletap", version, about)]
struct Cli {
    /// Diagnostic log level (off, error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "info")]
    log_level: LevelFilter,

    /// Write diagnostics to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Listen for telemetry datagrams and print each decoded reading.
    Listen {
        /// Address to bind.
        #[arg(long, default_value_t = config::DEFAULT_BIND_ADDR)]
        bind: IpAddr,

        /// Port to listen on.
        #[arg(long, default_value_t = config::DEFAULT_PORT)]
        port: u16,

        /// Receive buffer size in bytes; longer datagrams are truncated.
        #[arg(long, default_value_t = config::DEFAULT_RECV_BUFFER_LEN)]
        buffer: usize,
    },
    /// Send one reading as one or more datagrams to a listener.
    Send {
        /// Destination address.
        #[arg(long, default_value = "127.0.0.1:1337")]
        target: SocketAddr,

        /// Number of datagrams to send.
        #[arg(long, default_value_t = 1)]
        count: u32,

        /// Delay between datagrams in milliseconds.
        #[arg(long, default_value_t = 0)]
        interval_ms: u64,

        /// Values for the reading, e.g. `1.0 2.5 -3.0`.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.log_level, cli.log_file.as_deref())?;

    match cli.command {
        Command::Listen { bind, port, buffer } => listen(bind, port, buffer),
        Command::Send {
            target,
            count,
            interval_ms,
            values,
        } => sender::send_readings(target, &values, count, Duration::from_millis(interval_ms)),
    }
}

fn listen(bind: IpAddr, port: u16, buffer: usize) -> Result<()> {
    let listener_config = ListenerConfig {
        bind_addr: bind,
        port,
        recv_buffer_len: buffer,
    };
    let listener = Listener::bind(&listener_config)?;

    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        flag.store(true, Ordering::Relaxed);
    })
    .context("Failed to install Ctrl-C handler")?;

    println!("Telemetry listener on {}", listener.local_addr()?);
    let stats = listener.run(&shutdown, &mut ConsoleReporter);
    println!(
        "Session: {} datagrams received, {} malformed",
        stats.datagrams, stats.malformed
    );
    Ok(())
}
