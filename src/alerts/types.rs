//! Alert system domain types
//!
//! Defines the metrics that can breach, the alert produced for a breach,
//! and the message handed to notification channels.

use crate::domain::Sample;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Subject line used for every alert notification
pub const ALERT_SUBJECT: &str = "System Health Alert";

/// Metric that an alert refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MetricKind {
    /// Global CPU utilization
    Cpu,
    /// Memory utilization
    Ram,
    /// Aggregate network throughput
    Net,
}

impl MetricKind {
    /// Unit suffix as printed after a value
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Cpu | Self::Ram => "%",
            Self::Net => " Mbps",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu => write!(f, "CPU"),
            Self::Ram => write!(f, "RAM"),
            Self::Net => write!(f, "NET"),
        }
    }
}

/// A metric that met or exceeded its threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Alert {
    pub metric: MetricKind,
    /// Observed value
    pub value: f64,
    /// Configured threshold
    pub threshold: f64,
}

impl Alert {
    pub fn new(metric: MetricKind, value: f64, threshold: f64) -> Self {
        Self {
            metric,
            value,
            threshold,
        }
    }
}

/// Renders as `CPU 91.2% ≥ 85%` or `NET 250.0 Mbps ≥ 200 Mbps`
impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.metric.unit();
        write!(
            f,
            "{} {:.1}{} ≥ {}{}",
            self.metric, self.value, unit, self.threshold, unit
        )
    }
}

/// Composed notification for one invocation's alerts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    pub subject: String,
    pub body: String,
}

impl AlertMessage {
    /// Compose the message body for a sample and its alerts
    pub fn compose(sample: &Sample, alerts: &[Alert], csv_path: &Path) -> Self {
        let mut body = format!(
            "[{} @ {} on {}]\n",
            ALERT_SUBJECT,
            sample.timestamp(),
            sample.host()
        );
        for alert in alerts {
            body.push_str(&format!("- {}\n", alert));
        }
        body.push_str(&format!("\nLog: {}", csv_path.display()));

        Self {
            subject: ALERT_SUBJECT.to_string(),
            body,
        }
    }
}
