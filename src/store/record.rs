//! Serialized form of a sample
//!
//! Shared by the CSV and JSONL writers so both files carry the same fields.

use crate::domain::{round_to, Sample};
use serde::{Deserialize, Serialize};

/// Tabular header, in column order
pub const CSV_HEADER: [&str; 5] = [
    "timestamp",
    "host",
    "cpu_percent",
    "ram_percent",
    "net_total_mbps",
];

/// One persisted observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub timestamp: String,
    pub host: String,
    pub cpu_percent: f64,
    pub ram_percent: f64,
    pub net_total_mbps: f64,
}

impl From<&Sample> for SampleRecord {
    fn from(sample: &Sample) -> Self {
        Self {
            timestamp: sample.timestamp(),
            host: sample.host().to_string(),
            cpu_percent: round_to(sample.cpu_percent(), 1),
            ram_percent: round_to(sample.ram_percent(), 1),
            net_total_mbps: round_to(sample.net_total_mbps(), 3),
        }
    }
}

impl SampleRecord {
    /// Single JSON object, no trailing newline
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Comma-separated row with fixed precision, no trailing newline
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{:.1},{:.1},{:.3}",
            csv_field(&self.timestamp),
            csv_field(&self.host),
            self.cpu_percent,
            self.ram_percent,
            self.net_total_mbps
        )
    }
}

/// Header line for the tabular log
pub fn csv_header() -> String {
    CSV_HEADER.join(",")
}

/// Quote a field only when it holds a separator, quote or line break
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
