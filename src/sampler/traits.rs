//! Trait definitions for host metric readings
//!
//! These traits abstract over the OS metrics backend to enable testing with fakes.

use crate::domain::NetCounters;
use crate::error::ProviderError;

use std::time::Duration;

/// Source of host CPU, memory and network readings
pub trait MetricsProvider {
    /// Global CPU utilization in percent (0-100)
    fn cpu_percent(&mut self) -> Result<f64, ProviderError>;

    /// Memory utilization in percent (0-100)
    fn memory_percent(&mut self) -> Result<f64, ProviderError>;

    /// Cumulative network byte counters across all interfaces
    fn net_counters(&mut self) -> Result<NetCounters, ProviderError>;

    /// Host identifier recorded with every sample
    fn host_name(&self) -> String;

    /// Block for the network sampling window
    fn wait(&mut self, window: Duration) {
        std::thread::sleep(window);
    }
}

impl<P: MetricsProvider + ?Sized> MetricsProvider for Box<P> {
    fn cpu_percent(&mut self) -> Result<f64, ProviderError> {
        (**self).cpu_percent()
    }

    fn memory_percent(&mut self) -> Result<f64, ProviderError> {
        (**self).memory_percent()
    }

    fn net_counters(&mut self) -> Result<NetCounters, ProviderError> {
        (**self).net_counters()
    }

    fn host_name(&self) -> String {
        (**self).host_name()
    }

    fn wait(&mut self, window: Duration) {
        (**self).wait(window)
    }
}
