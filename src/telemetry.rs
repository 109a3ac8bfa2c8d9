use std::fmt;

/// One decoded telemetry packet: the parsed values in the order the
/// sender wrote them. Exists only to be reported, then dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TelemetryReading {
    pub values: Vec<f64>,
}

impl TelemetryReading {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for TelemetryReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_values_as_a_list() {
        let reading = TelemetryReading::new(vec![1.0, 2.5, -3.0]);
        assert_eq!(reading.to_string(), "[1.0, 2.5, -3.0]");
    }

    #[test]
    fn empty_reading_displays_empty_list() {
        assert_eq!(TelemetryReading::default().to_string(), "[]");
        assert!(TelemetryReading::default().is_empty());
    }
}
