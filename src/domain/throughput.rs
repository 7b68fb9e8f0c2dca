//! Network throughput arithmetic

use serde::{Deserialize, Serialize};

/// Smallest window used when converting a byte delta to a rate
pub const MIN_WINDOW_SECONDS: f64 = 0.001;

/// Cumulative network byte counters, summed over all interfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetCounters {
    /// Total bytes received since boot
    pub bytes_recv: u64,
    /// Total bytes sent since boot
    pub bytes_sent: u64,
}

impl NetCounters {
    pub fn new(bytes_recv: u64, bytes_sent: u64) -> Self {
        Self {
            bytes_recv,
            bytes_sent,
        }
    }

    /// Combined received + sent bytes transferred since `earlier`
    ///
    /// Counters that went backwards (interface removed, counter wrap)
    /// contribute zero rather than a negative delta.
    pub fn delta_since(&self, earlier: &NetCounters) -> u64 {
        let rx = self.bytes_recv.saturating_sub(earlier.bytes_recv);
        let tx = self.bytes_sent.saturating_sub(earlier.bytes_sent);
        rx.saturating_add(tx)
    }
}

/// Convert a byte delta observed over `window_seconds` into megabits per second
///
/// Exact for any positive window. Zero, negative and NaN windows fall back
/// to [`MIN_WINDOW_SECONDS`] so the result is always finite.
///
/// # Examples
///
/// ```
/// use syshealth::domain::bytes_to_mbps;
///
/// assert_eq!(bytes_to_mbps(1_250_000, 2.0), 5.0);
/// assert!(bytes_to_mbps(1_000, 0.0).is_finite());
/// ```
pub fn bytes_to_mbps(byte_delta: u64, window_seconds: f64) -> f64 {
    let window = if window_seconds > 0.0 {
        window_seconds
    } else {
        MIN_WINDOW_SECONDS
    };
    (byte_delta as f64 * 8.0) / 1_000_000.0 / window
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_mbps_formula() {
        for (delta, window) in [(0u64, 1.0), (125_000, 1.0), (1_250_000, 2.0), (3_333, 0.5)] {
            let expected = delta as f64 * 8.0 / 1e6 / window;
            assert_eq!(bytes_to_mbps(delta, window), expected);
        }
    }

    #[test]
    fn test_bytes_to_mbps_floors_window() {
        let zero = bytes_to_mbps(1_000, 0.0);
        let negative = bytes_to_mbps(1_000, -3.0);
        assert!(zero.is_finite());
        assert_eq!(zero, 1_000.0 * 8.0 / 1e6 / MIN_WINDOW_SECONDS);
        assert_eq!(zero, negative);
    }

    #[test]
    fn test_bytes_to_mbps_exact_below_floor() {
        assert_eq!(bytes_to_mbps(1_000, 0.0005), 16.0);
    }

    #[test]
    fn test_bytes_to_mbps_nan_window_is_finite() {
        assert!(bytes_to_mbps(1_000, f64::NAN).is_finite());
    }

    #[test]
    fn test_delta_since_combines_directions() {
        let before = NetCounters::new(1_000, 500);
        let after = NetCounters::new(1_600, 900);
        assert_eq!(after.delta_since(&before), 1_000);
    }

    #[test]
    fn test_delta_since_saturates() {
        let before = NetCounters::new(5_000, 5_000);
        let after = NetCounters::new(100, 6_000);
        assert_eq!(after.delta_since(&before), 1_000);
    }
}
