use crate::telemetry::TelemetryReading;
use std::fmt;
use std::str::Utf8Error;


/// Why a datagram could not be decoded as telemetry.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// The payload bytes are not valid UTF-8.
    InvalidUtf8(Utf8Error),
    /// A token did not parse as a base-10 float literal.
    InvalidNumber { token: String, position: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidUtf8(err) => {
                write!(f, "payload is not valid UTF-8: {err}")
            }
            FormatError::InvalidNumber { token, position } => {
                write!(f, "token {position} ({token:?}) is not a number")
            }
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatError::InvalidUtf8(err) => Some(err),
            FormatError::InvalidNumber { .. } => None,
        }
    }
}

/// Decodes one datagram payload into a telemetry reading.
///
/// The payload is UTF-8 text holding whitespace-separated float literals.
/// A single unparseable token poisons the whole packet; no partial
/// readings are produced. An empty or all-whitespace payload is a valid
/// reading with zero values.
pub fn decode(payload: &[u8]) -> Result<TelemetryReading, FormatError> {
    let text = std::str::from_utf8(payload).map_err(FormatError::InvalidUtf8)?;

    let mut values = Vec::new();
    for (position, token) in text.split_whitespace().enumerate() {
        let value = token
            .parse::<f64>()
            .map_err(|_| FormatError::InvalidNumber {
                token: token.to_string(),
                position,
            })?;
        values.push(value);
    }

    Ok(TelemetryReading::new(values))
}
