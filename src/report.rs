use crate::decoder::FormatError;
use crate::telemetry::TelemetryReading;
use std::net::SocketAddr;

/// Sink for the outcome of each received datagram. The listener pushes
/// exactly one event per datagram; tests substitute a recording impl.
pub trait ReadingReporter {
    fn reading(&mut self, from: SocketAddr, reading: &TelemetryReading);
    fn malformed(&mut self, from: SocketAddr, payload: &[u8], error: &FormatError);
}

/// Human-directed console output, one line per datagram. The format is
/// illustrative, not machine-parseable.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ReadingReporter for ConsoleReporter {
    fn reading(&mut self, from: SocketAddr, reading: &TelemetryReading) {
        println!("Received telemetry: {reading} from {from}");
    }

    fn malformed(&mut self, from: SocketAddr, payload: &[u8], error: &FormatError) {
        let raw = String::from_utf8_lossy(payload);
        println!("Invalid telemetry format from {from}: {raw:?} ({error})");
    }
}
