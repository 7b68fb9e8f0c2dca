//! sysinfo-backed metrics provider
//!
//! Provides the production [`MetricsProvider`] on top of the `sysinfo` crate.

use crate::domain::NetCounters;
use crate::error::ProviderError;
use crate::sampler::MetricsProvider;

use std::time::Duration;
use sysinfo::{Networks, System};

/// Blocking window over which CPU usage is measured
pub const CPU_MEASURE_WINDOW: Duration = Duration::from_secs(1);

/// Host name used when the OS does not report one
const FALLBACK_HOST: &str = "localhost";

/// Reads host metrics through `sysinfo`
pub struct SysinfoProvider {
    system: System,
    cpu_window: Duration,
}

impl SysinfoProvider {
    /// Initialize the provider
    ///
    /// Fails when `sysinfo` has no backend for this platform.
    pub fn new() -> Result<Self, ProviderError> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(ProviderError::Unsupported);
        }

        Ok(Self {
            system: System::new(),
            cpu_window: CPU_MEASURE_WINDOW.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL),
        })
    }
}

impl MetricsProvider for SysinfoProvider {
    fn cpu_percent(&mut self) -> Result<f64, ProviderError> {
        // Usage is the delta between two refreshes.
        self.system.refresh_cpu_usage();
        std::thread::sleep(self.cpu_window);
        self.system.refresh_cpu_usage();

        if self.system.cpus().is_empty() {
            return Err(ProviderError::Unavailable {
                metric: "cpu".to_string(),
                reason: "no CPUs reported".to_string(),
            });
        }

        Ok(f64::from(self.system.global_cpu_usage()).clamp(0.0, 100.0))
    }

    fn memory_percent(&mut self) -> Result<f64, ProviderError> {
        self.system.refresh_memory();

        let total = self.system.total_memory();
        if total == 0 {
            return Ok(0.0);
        }
        let used = total.saturating_sub(self.system.available_memory());
        Ok(used as f64 / total as f64 * 100.0)
    }

    fn net_counters(&mut self) -> Result<NetCounters, ProviderError> {
        let networks = Networks::new_with_refreshed_list();
        let counters = networks
            .list()
            .values()
            .fold(NetCounters::default(), |acc, data| {
                NetCounters::new(
                    acc.bytes_recv.saturating_add(data.total_received()),
                    acc.bytes_sent.saturating_add(data.total_transmitted()),
                )
            });
        log::debug!(
            "net counters: rx={} tx={} ({} interfaces)",
            counters.bytes_recv,
            counters.bytes_sent,
            networks.list().len()
        );
        Ok(counters)
    }

    fn host_name(&self) -> String {
        System::host_name().unwrap_or_else(|| FALLBACK_HOST.to_string())
    }
}
