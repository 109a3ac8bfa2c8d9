use crate::config::ListenerConfig;
use crate::decoder;
use crate::report::ReadingReporter;
use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::net::{SocketAddr, UdpSocket};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};


/// How long a receive call may block before the loop rechecks the
/// shutdown flag.
const SHUTDOWN_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Counters accumulated over one listening session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub datagrams: u64,
    pub malformed: u64,
}

/// Owns the bound socket and the synchronous receive loop. One receive
/// at a time; each datagram is fully processed before the next.
pub struct Listener {
    socket: UdpSocket,
    recv_buffer_len: usize,
}

impl Listener {
    /// Binds the socket described by `config`. The socket gets a short
    /// read timeout so [`run`](Self::run) can observe the shutdown flag
    /// between datagrams.
    pub fn bind(config: &ListenerConfig) -> Result<Self> {
        let addr = config.socket_addr();
        let socket = UdpSocket::bind(addr)
            .with_context(|| format!("Failed to bind UDP socket on {addr}"))?;
        socket
            .set_read_timeout(Some(SHUTDOWN_POLL_INTERVAL))
            .context("Failed to set socket read timeout")?;

        info!(%addr, recv_buffer_len = config.recv_buffer_len, "Telemetry listener bound");
        Ok(Self {
            socket,
            recv_buffer_len: config.recv_buffer_len,
        })
    }

    /// Local address of the bound socket. Useful when binding port 0.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.socket
            .local_addr()
            .context("Failed to read local socket address")
    }

    /// Receives datagrams until `shutdown` is set, pushing one reporter
    /// event per datagram. Malformed telemetry is reported and never
    /// fatal; receive errors other than the poll timeout are logged and
    /// the loop keeps going. Returns the session counters.
    pub fn run(&self, shutdown: &AtomicBool, reporter: &mut dyn ReadingReporter) -> SessionStats {
        let mut buf = vec![0u8; self.recv_buffer_len];
        let mut stats = SessionStats::default();

        while !shutdown.load(Ordering::Relaxed) {
            let (len, from) = match self.socket.recv_from(&mut buf) {
                Ok(received) => received,
                Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                    continue;
                }
                Err(e) => {
                    warn!(error = %e, "Error receiving datagram");
                    continue;
                }
            };

            stats.datagrams += 1;
            match decoder::decode(&buf[..len]) {
                Ok(reading) => {
                    debug!(%from, values = reading.len(), "Decoded telemetry packet");
                    reporter.reading(from, &reading);
                }
                Err(error) => {
                    stats.malformed += 1;
                    debug!(%from, %error, "Malformed telemetry packet");
                    reporter.malformed(from, &buf[..len], &error);
                }
            }
        }

        info!(
            datagrams = stats.datagrams,
            malformed = stats.malformed,
            "Telemetry listener stopped"
        );
        stats
    }
}
