//! Threshold evaluation

use super::types::{Alert, MetricKind};
use crate::config::Thresholds;
use crate::domain::Sample;

/// Compare a sample against its thresholds
///
/// A metric breaches when it is greater than or equal to its threshold.
/// Alerts come back in CPU, RAM, NET order.
pub fn evaluate(sample: &Sample, thresholds: &Thresholds) -> Vec<Alert> {
    [
        (MetricKind::Cpu, sample.cpu_percent(), thresholds.cpu_percent),
        (MetricKind::Ram, sample.ram_percent(), thresholds.ram_percent),
        (MetricKind::Net, sample.net_total_mbps(), thresholds.net_mbps),
    ]
    .into_iter()
    .filter(|(_, value, threshold)| value >= threshold)
    .map(|(metric, value, threshold)| Alert::new(metric, value, threshold))
    .collect()
}
