//! Metric sampling
//!
//! [`MetricsProvider`] abstracts the host so the [`Sampler`] can be driven
//! by fakes in tests and by `sysinfo` in production.

mod collect;
pub mod system;
pub mod traits;

pub use collect::Sampler;
pub use system::SysinfoProvider;
pub use traits::MetricsProvider;
