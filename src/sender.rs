use anyhow::{Context, Result};
use std::net::{SocketAddr, UdpSocket};
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Formats one reading as a wire payload: values space-joined, no
/// trailing newline.
pub fn format_payload(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sends the same reading to `target` `count` times, one datagram per
/// reading, sleeping `interval` between sends. Fire-and-forget: no
/// delivery confirmation is expected or awaited.
pub fn send_readings(
    target: SocketAddr,
    values: &[f64],
    count: u32,
    interval: Duration,
) -> Result<()> {
    let socket = UdpSocket::bind("0.0.0.0:0").context("Failed to bind sender socket")?;
    let payload = format_payload(values);

    for i in 0..count {
        if i > 0 && !interval.is_zero() {
            thread::sleep(interval);
        }
        socket
            .send_to(payload.as_bytes(), target)
            .with_context(|| format!("Failed to send datagram to {target}"))?;
        debug!(%target, bytes = payload.len(), "Sent telemetry datagram");
    }

    Ok(())
}
