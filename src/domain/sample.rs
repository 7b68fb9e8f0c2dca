//! Sample domain type
//!
//! One observation of the host, taken once per invocation.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

/// One point-in-time measurement of CPU, memory and network throughput
///
/// Values are kept unrounded; precision is applied when the sample is
/// written or displayed.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use syshealth::domain::Sample;
///
/// let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
/// let sample = Sample::new(at, "web-1", 50.0, 20.0, 5.0);
///
/// assert_eq!(sample.timestamp(), "2024-05-01T12:00:00+00:00");
/// assert_eq!(sample.to_string(), "2024-05-01T12:00:00+00:00 cpu=50.0% ram=20.0% net=5.000Mbps");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    taken_at: DateTime<Utc>,
    host: String,
    cpu_percent: f64,
    ram_percent: f64,
    net_total_mbps: f64,
}

impl Sample {
    /// Create a new sample
    pub fn new(
        taken_at: DateTime<Utc>,
        host: impl Into<String>,
        cpu_percent: f64,
        ram_percent: f64,
        net_total_mbps: f64,
    ) -> Self {
        Self {
            taken_at,
            host: host.into(),
            cpu_percent,
            ram_percent,
            net_total_mbps: net_total_mbps.max(0.0),
        }
    }

    /// ISO-8601 timestamp, UTC, second precision, explicit offset
    pub fn timestamp(&self) -> String {
        self.taken_at.to_rfc3339_opts(SecondsFormat::Secs, false)
    }

    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn cpu_percent(&self) -> f64 {
        self.cpu_percent
    }

    pub fn ram_percent(&self) -> f64 {
        self.ram_percent
    }

    pub fn net_total_mbps(&self) -> f64 {
        self.net_total_mbps
    }
}

/// Summary line printed once per invocation
impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cpu={:.1}% ram={:.1}% net={:.3}Mbps",
            self.timestamp(),
            self.cpu_percent,
            self.ram_percent,
            self.net_total_mbps
        )
    }
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
