//! Single-shot sample collection

use crate::domain::{bytes_to_mbps, Sample, MIN_WINDOW_SECONDS};
use crate::error::ProviderError;
use crate::sampler::MetricsProvider;

use chrono::Utc;
use std::time::Duration;

/// Takes one [`Sample`] from a provider
pub struct Sampler {
    window_seconds: f64,
}

impl Sampler {
    /// Create a sampler measuring network throughput over `window_seconds`
    pub fn new(window_seconds: f64) -> Self {
        Self { window_seconds }
    }

    /// Read CPU and memory, then measure network throughput over the window
    ///
    /// CPU and memory are point-in-time readings and are not averaged over
    /// the network window.
    pub fn sample<P: MetricsProvider + ?Sized>(
        &self,
        provider: &mut P,
    ) -> Result<Sample, ProviderError> {
        let cpu = provider.cpu_percent()?;
        let ram = provider.memory_percent()?;

        let before = provider.net_counters()?;
        provider.wait(self.window());
        let after = provider.net_counters()?;

        let byte_delta = after.delta_since(&before);
        let mbps = bytes_to_mbps(byte_delta, self.window_seconds.max(MIN_WINDOW_SECONDS));
        log::debug!(
            "cpu={:.2}% ram={:.2}% net_delta={}B over {}s -> {:.4}Mbps",
            cpu,
            ram,
            byte_delta,
            self.window_seconds,
            mbps
        );

        Ok(Sample::new(Utc::now(), provider.host_name(), cpu, ram, mbps))
    }

    fn window(&self) -> Duration {
        Duration::try_from_secs_f64(self.window_seconds.max(0.0)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NetCounters;
    use crate::mock::FakeProvider;

    #[test]
    fn test_sample_computes_mbps_over_window() {
        let mut provider = FakeProvider::new(50.0, 20.0)
            .with_counters(NetCounters::new(0, 0), NetCounters::new(1_000_000, 250_000));
        let sample = Sampler::new(2.0).sample(&mut provider).unwrap();

        assert_eq!(sample.cpu_percent(), 50.0);
        assert_eq!(sample.ram_percent(), 20.0);
        assert_eq!(sample.net_total_mbps(), 5.0);
        assert_eq!(sample.host(), "fake-host");
        assert_eq!(provider.waited(), vec![Duration::from_secs(2)]);
    }

    #[test]
    fn test_zero_window_stays_finite() {
        let mut provider = FakeProvider::new(1.0, 1.0)
            .with_counters(NetCounters::new(0, 0), NetCounters::new(100, 100));
        let sample = Sampler::new(0.0).sample(&mut provider).unwrap();

        assert!(sample.net_total_mbps().is_finite());
        assert_eq!(provider.waited(), vec![Duration::ZERO]);
    }

    #[test]
    fn test_tiny_window_uses_floor() {
        let mut provider = FakeProvider::new(1.0, 1.0)
            .with_counters(NetCounters::new(0, 0), NetCounters::new(1_000, 0));
        let sample = Sampler::new(0.0005).sample(&mut provider).unwrap();

        assert_eq!(sample.net_total_mbps(), bytes_to_mbps(1_000, MIN_WINDOW_SECONDS));
    }

    #[test]
    fn test_provider_error_propagates() {
        let mut provider = FakeProvider::new(1.0, 1.0).failing_network();
        let err = Sampler::new(1.0).sample(&mut provider).unwrap_err();
        assert!(matches!(err, ProviderError::Unavailable { .. }));
    }
}
